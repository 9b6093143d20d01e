//! Mesh output for merged puppets.
//!
//! Plane identity and material slots travel as custom vertex attributes so
//! they survive export to engines that only see the vertex buffer:
//! - [`ATTRIBUTE_PLANE_INDEX`]: sorted plane position per vertex
//! - [`ATTRIBUTE_GROUP_WEIGHT`]: vertex group weight (when groups are built)
//! - [`ATTRIBUTE_MATERIAL_SLOT`]: face material slot (when materials are preserved)

use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;

mod attributes;
mod builder;
mod vertex_data;

pub use attributes::{ATTRIBUTE_GROUP_WEIGHT, ATTRIBUTE_MATERIAL_SLOT, ATTRIBUTE_PLANE_INDEX};
pub use builder::PuppetMeshBuilder;
pub use vertex_data::{PuppetVertex, interleave};

/// Read access to the puppet attributes of a mesh.
pub trait PuppetMeshExt {
    /// Per-vertex plane indices, if the mesh was built from a merge.
    fn plane_indices(&self) -> Option<&[u32]>;

    /// Per-vertex material slots, if materials were preserved.
    fn material_slots(&self) -> Option<&[u32]>;

    /// Number of merged planes, derived from the plane index attribute.
    fn plane_count(&self) -> usize {
        self.plane_indices()
            .and_then(|planes| planes.iter().max())
            .map(|&max| max as usize + 1)
            .unwrap_or(0)
    }
}

impl PuppetMeshExt for Mesh {
    fn plane_indices(&self) -> Option<&[u32]> {
        match self.attribute(ATTRIBUTE_PLANE_INDEX)? {
            VertexAttributeValues::Uint32(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    fn material_slots(&self) -> Option<&[u32]> {
        match self.attribute(ATTRIBUTE_MATERIAL_SLOT)? {
            VertexAttributeValues::Uint32(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{MergeOptions, PuppetMerger};
    use crate::plane::PlaneContainer;

    #[test]
    fn test_plane_count_from_attribute() {
        let quad = [Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y];
        let planes: Vec<_> = (0..3)
            .map(|i| PlaneContainer::new(format!("layer{i}"), quad))
            .collect();
        let merger = PuppetMerger::new(MergeOptions::new().with_preserve_materials(true));
        let result = merger.merge(&planes).unwrap();
        let mesh = PuppetMeshBuilder::from_result(&result).build().unwrap();

        assert_eq!(mesh.plane_count(), 3);
        assert_eq!(mesh.material_slots().unwrap()[11], 2);
    }

    #[test]
    fn test_plain_mesh_has_no_planes() {
        let mesh = Mesh::from(Rectangle::default());
        assert!(mesh.plane_indices().is_none());
        assert_eq!(mesh.plane_count(), 0);
    }
}
