//! Per-merge configuration.

use bevy::prelude::*;

use super::axis::DepthAxis;

/// Default name of the merged mesh and of the entity spawned for it.
pub const DEFAULT_OUTPUT_NAME: &str = "UnityPuppet";

/// What to do when two planes share a name and vertex groups are enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum GroupNamePolicy {
    /// Keep the first name, append `.001`, `.002`, ... to later duplicates.
    #[default]
    Suffix,
    /// Abort the merge with [`MergeError::DuplicatePlaneName`](super::MergeError::DuplicatePlaneName).
    Reject,
}

/// Options recognized by [`PuppetMerger`](super::PuppetMerger).
///
/// Also used as a resource by [`PuppetMergePlugin`](crate::PuppetMergePlugin)
/// for requests that don't carry their own options.
///
/// # Example
/// ```
/// use bevy_puppet_merge::merge::{DepthAxis, MergeOptions};
///
/// let options = MergeOptions::new()
///     .with_axis(DepthAxis::Y)
///     .with_preserve_materials(true);
/// assert!(options.create_vertex_groups);
/// ```
#[derive(Resource, Clone, Debug, PartialEq, Reflect)]
pub struct MergeOptions {
    /// Axis used for ordering and collapsed to zero.
    ///
    /// Default: [`DepthAxis::Z`]
    pub axis: DepthAxis,

    /// Build one vertex group per plane.
    ///
    /// Default: `true`
    pub create_vertex_groups: bool,

    /// Consolidate plane materials and bind their textures to a generated UV layer.
    ///
    /// Default: `false`
    pub preserve_materials: bool,

    /// How duplicate plane names are handled when building vertex groups.
    pub group_names: GroupNamePolicy,

    /// Name given to the merged mesh.
    pub output_name: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            axis: DepthAxis::Z,
            create_vertex_groups: true,
            preserve_materials: false,
            group_names: GroupNamePolicy::Suffix,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: DepthAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_vertex_groups(mut self, enable: bool) -> Self {
        self.create_vertex_groups = enable;
        self
    }

    pub fn with_preserve_materials(mut self, enable: bool) -> Self {
        self.preserve_materials = enable;
        self
    }

    pub fn with_group_names(mut self, policy: GroupNamePolicy) -> Self {
        self.group_names = policy;
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }
}
