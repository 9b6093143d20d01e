//! Components used by the scene adapter.

use bevy::prelude::*;

use crate::merge::{DepthAxis, MaterialAssignment, VertexGroups};

/// Marks an entity as a puppet layer that can be merged.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PuppetPlane;

/// Marks an entity as part of the current selection.
///
/// Planes must be both [`PuppetPlane`] and `Selected` to take part in a merge.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Selected;

/// Marks the active entity. A successful merge moves this to the new puppet.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ActiveObject;

/// Attached to every entity spawned by a merge.
#[derive(Component, Clone, Debug)]
pub struct MergedPuppet {
    pub axis: DepthAxis,
    /// Source plane names in draw order.
    pub plane_names: Vec<String>,
}

/// Named vertex groups of a merged puppet mesh.
#[derive(Component, Clone, Debug, Deref)]
pub struct PuppetVertexGroups(pub VertexGroups);

/// Consolidated materials and per-face textures of a merged puppet mesh.
#[derive(Component, Clone, Debug, Deref)]
pub struct PuppetMaterials(pub MaterialAssignment);
