//! Interleaved per-vertex data for handing a merged puppet to an external engine.

use bytemuck::{Pod, Zeroable};

use crate::merge::MergeResult;
use crate::plane::{QUAD_VERTEX_COUNT, UNIT_QUAD_UVS};

/// One vertex of a merged puppet, laid out for direct upload or export.
///
/// 32 bytes, no padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PuppetVertex {
    /// Flattened position.
    pub position: [f32; 3],

    /// Coordinates in the generated UV layer, or the unit quad.
    pub uv: [f32; 2],

    /// Sorted position of the source plane.
    pub plane_index: u32,

    /// Material slot of the owning face, or [`PuppetVertex::NO_MATERIAL`].
    pub material_slot: u32,

    /// Weight in the plane's vertex group, `0.0` when groups were not built.
    pub group_weight: f32,
}

impl PuppetVertex {
    /// Slot value used when materials were not preserved.
    pub const NO_MATERIAL: u32 = u32::MAX;

    /// Raw bytes of a vertex slice.
    #[inline]
    pub fn as_bytes(vertices: &[Self]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Interleave the attributes of a merge result, one entry per output vertex.
pub fn interleave(result: &MergeResult) -> Vec<PuppetVertex> {
    let uvs = result
        .material_assignment
        .as_ref()
        .map(|assignment| assignment.uv_layer.coords.as_slice());

    result
        .vertices
        .iter()
        .enumerate()
        .map(|(i, position)| {
            let plane = i / QUAD_VERTEX_COUNT;
            let uv = uvs
                .and_then(|coords| coords.get(i).copied())
                .unwrap_or(UNIT_QUAD_UVS[i % QUAD_VERTEX_COUNT]);
            let material_slot = result
                .material_assignment
                .as_ref()
                .and_then(|assignment| assignment.face_materials.get(plane).copied())
                .unwrap_or(PuppetVertex::NO_MATERIAL);
            let group_weight = result
                .vertex_groups
                .as_ref()
                .and_then(|groups| groups.group_of(i as u32))
                .map(|group| group.weight)
                .unwrap_or(0.0);

            PuppetVertex {
                position: position.to_array(),
                uv: uv.to_array(),
                plane_index: plane as u32,
                material_slot,
                group_weight,
            }
        })
        .collect()
}
