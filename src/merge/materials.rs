//! Best-effort material and UV consolidation.

use bevy::prelude::*;

use super::error::MergeWarning;
use crate::plane::{PlaneContainer, PlaneMaterial};

/// Name of the UV layer generated for the merged mesh.
pub const ATLAS_UV_LAYER_NAME: &str = "PuppetUV";

/// UV layer created for the merged mesh.
///
/// Holds per-vertex coordinates and, per face, the texture taken from the
/// source plane when one could be found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtlasUvLayer {
    pub name: String,
    pub coords: Vec<Vec2>,
    pub face_textures: Vec<Option<Handle<Image>>>,
}

/// Consolidated materials of a merged mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialAssignment {
    /// Distinct materials in first-seen order over the sorted planes.
    pub materials: Vec<PlaneMaterial>,

    /// Material slot per face. Face `k` is assigned slot `k`.
    pub face_materials: Vec<u32>,

    pub uv_layer: AtlasUvLayer,
}

impl MaterialAssignment {
    /// Consolidate materials of planes already in sorted order.
    ///
    /// Texture binding never fails the merge; each skipped face is reported
    /// through `warnings`.
    pub fn build<'a>(
        planes: impl IntoIterator<Item = &'a PlaneContainer>,
        warnings: &mut Vec<MergeWarning>,
    ) -> Self {
        let mut assignment = Self {
            uv_layer: AtlasUvLayer {
                name: ATLAS_UV_LAYER_NAME.to_string(),
                ..default()
            },
            ..default()
        };

        for (index, plane) in planes.into_iter().enumerate() {
            for material in &plane.materials {
                if !assignment.contains(material) {
                    assignment.materials.push(material.clone());
                }
            }

            assignment.face_materials.push(index as u32);
            assignment.uv_layer.coords.extend(plane.primary_uvs());

            match plane.first_texture() {
                Ok(image) => assignment.uv_layer.face_textures.push(Some(image.clone())),
                Err(reason) => {
                    debug!("Skipping texture binding for plane '{}': {}", plane.name, reason);
                    warnings.push(MergeWarning::TextureBindingSkipped {
                        plane: plane.name.clone(),
                        face: index,
                        reason,
                    });
                    assignment.uv_layer.face_textures.push(None);
                }
            }
        }

        let available = assignment.materials.len();
        for (face, &slot) in assignment.face_materials.iter().enumerate() {
            if slot as usize >= available {
                warnings.push(MergeWarning::MaterialSlotOutOfRange {
                    face,
                    slot,
                    available,
                });
            }
        }

        assignment
    }

    /// Whether a material with the same handle is already consolidated.
    pub fn contains(&self, material: &PlaneMaterial) -> bool {
        self.materials.iter().any(|m| m.id() == material.id())
    }

    /// Material assigned to `face`, if its slot is in range.
    pub fn material_for_face(&self, face: usize) -> Option<&PlaneMaterial> {
        let slot = *self.face_materials.get(face)?;
        self.materials.get(slot as usize)
    }
}
