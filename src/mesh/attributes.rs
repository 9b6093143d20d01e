//! Custom vertex attributes carried by merged puppet meshes.

use bevy::mesh::MeshVertexAttribute;
use bevy::render::render_resource::VertexFormat;

/// Sorted position of the plane a vertex came from.
///
/// Vertices `4k..4k+4` all carry `k`. This is the per-vertex form of the
/// merge's vertex groups; group names live in
/// [`PuppetVertexGroups`](crate::scene::PuppetVertexGroups).
pub const ATTRIBUTE_PLANE_INDEX: MeshVertexAttribute =
    MeshVertexAttribute::new("PuppetPlaneIndex", 721904381, VertexFormat::Uint32);

/// Weight of a vertex in its plane's group.
///
/// Only present when vertex groups were built. Always `1.0`.
pub const ATTRIBUTE_GROUP_WEIGHT: MeshVertexAttribute =
    MeshVertexAttribute::new("PuppetGroupWeight", 721904382, VertexFormat::Float32);

/// Material slot of the face a vertex belongs to.
///
/// Only present when materials were preserved. Indexes into
/// [`MaterialAssignment::materials`](crate::merge::MaterialAssignment::materials).
pub const ATTRIBUTE_MATERIAL_SLOT: MeshVertexAttribute =
    MeshVertexAttribute::new("PuppetMaterialSlot", 721904383, VertexFormat::Uint32);
