//! Merge errors and non-fatal warnings.

use thiserror::Error;

/// Errors that abort a merge. No mesh is produced when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MergeError {
    #[error("No planes selected")]
    EmptySelection,

    #[error("Plane '{name}' has {vertex_count} vertices, expected 4")]
    MalformedPlane { name: String, vertex_count: usize },

    #[error("Plane '{name}' has a non-finite coordinate at vertex {vertex}")]
    NonFiniteVertex { name: String, vertex: usize },

    #[error("Plane name '{name}' is used by more than one plane")]
    DuplicatePlaneName { name: String },

    #[error("Mesh for plane '{name}' is not loaded")]
    MeshNotLoaded { name: String },

    #[error("Mesh for plane '{name}' has no Float32x3 position attribute")]
    MissingPositions { name: String },

    #[error("Merge request superseded by a later request in the same frame")]
    Superseded,
}

/// Why a texture could not be bound to a face of the generated UV layer.
///
/// Never returned to callers as an error; see [`MergeWarning::TextureBindingSkipped`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialBindingFailure {
    #[error("plane has no material")]
    NoMaterial,

    #[error("first material has no texture slot")]
    NoTextureSlot,

    #[error("first texture slot has no image")]
    NoImage,
}

/// Non-fatal issues collected during a merge and returned alongside the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MergeWarning {
    #[error("Texture binding skipped for plane '{plane}' (face {face}): {reason}")]
    TextureBindingSkipped {
        plane: String,
        face: usize,
        reason: MaterialBindingFailure,
    },

    #[error("Face {face} uses material slot {slot} but only {available} materials were consolidated")]
    MaterialSlotOutOfRange {
        face: usize,
        slot: u32,
        available: usize,
    },

    #[error("Vertex group '{original}' renamed to '{renamed}'")]
    GroupRenamed { original: String, renamed: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_plane_message() {
        let err = MergeError::MalformedPlane {
            name: "arm".into(),
            vertex_count: 3,
        };
        assert_eq!(err.to_string(), "Plane 'arm' has 3 vertices, expected 4");
    }

    #[test]
    fn test_binding_warning_carries_reason() {
        let warning = MergeWarning::TextureBindingSkipped {
            plane: "head".into(),
            face: 2,
            reason: MaterialBindingFailure::NoImage,
        };
        assert!(warning.to_string().ends_with("first texture slot has no image"));
    }
}
