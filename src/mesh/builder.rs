//! Mesh builder for merged puppets.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::prelude::*;

use super::{
    attributes::{ATTRIBUTE_GROUP_WEIGHT, ATTRIBUTE_MATERIAL_SLOT, ATTRIBUTE_PLANE_INDEX},
    vertex_data::{PuppetVertex, interleave},
};
use crate::merge::MergeResult;

/// Builder for creating a Bevy [`Mesh`] from merged puppet data.
///
/// Quads are split into two triangles each, `[a, b, c]` and `[a, c, d]`,
/// keeping the source winding.
///
/// # Example
/// ```ignore
/// let result = PuppetMerger::default().merge(&planes)?;
/// let mesh = PuppetMeshBuilder::from_result(&result).build();
/// ```
pub struct PuppetMeshBuilder {
    vertices: Vec<PuppetVertex>,
    normal: [f32; 3],
    indices: Option<Vec<u32>>,
    include_group_weights: bool,
    include_material_slots: bool,
}

impl Default for PuppetMeshBuilder {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            normal: Vec3::Z.to_array(),
            indices: None,
            include_group_weights: false,
            include_material_slots: false,
        }
    }
}

impl PuppetMeshBuilder {
    /// Create a new empty mesh builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `quad_count` quads.
    pub fn with_capacity(quad_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(quad_count * 4),
            indices: Some(Vec::with_capacity(quad_count * 6)),
            ..Self::new()
        }
    }

    /// Build everything a merge result carries into the mesh.
    pub fn from_result(result: &MergeResult) -> Self {
        let mut builder = Self::with_capacity(result.plane_count())
            .with_normal(result.axis.unit())
            .with_group_weights(result.vertex_groups.is_some())
            .with_material_slots(result.material_assignment.is_some());

        for vertex in interleave(result) {
            builder.push_vertex(vertex);
        }
        for face in &result.faces {
            builder.push_quad(*face);
        }
        builder
    }

    /// Normal shared by every vertex. Flattened planes face along the depth axis.
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal.to_array();
        self
    }

    /// Emit [`ATTRIBUTE_GROUP_WEIGHT`].
    pub fn with_group_weights(mut self, enable: bool) -> Self {
        self.include_group_weights = enable;
        self
    }

    /// Emit [`ATTRIBUTE_MATERIAL_SLOT`].
    pub fn with_material_slots(mut self, enable: bool) -> Self {
        self.include_material_slots = enable;
        self
    }

    pub fn push_vertex(&mut self, vertex: PuppetVertex) {
        self.vertices.push(vertex);
    }

    /// Add a quad face as two triangles.
    pub fn push_quad(&mut self, [a, b, c, d]: [u32; 4]) {
        self.indices
            .get_or_insert_with(Vec::new)
            .extend_from_slice(&[a, b, c, a, c, d]);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map(|i| i.len()).unwrap_or(0)
    }

    /// Build the final mesh.
    ///
    /// Returns `None` if there are no vertices or indices.
    pub fn build(self) -> Option<Mesh> {
        if self.vertices.is_empty() {
            return None;
        }

        let indices = self.indices?;
        if indices.is_empty() {
            return None;
        }

        let count = self.vertices.len();
        let positions: Vec<[f32; 3]> = self.vertices.iter().map(|v| v.position).collect();
        let uvs: Vec<[f32; 2]> = self.vertices.iter().map(|v| v.uv).collect();
        let planes: Vec<u32> = self.vertices.iter().map(|v| v.plane_index).collect();

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        );

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![self.normal; count]);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_attribute(ATTRIBUTE_PLANE_INDEX, planes);

        if self.include_group_weights {
            let weights: Vec<f32> = self.vertices.iter().map(|v| v.group_weight).collect();
            mesh.insert_attribute(ATTRIBUTE_GROUP_WEIGHT, weights);
        }
        if self.include_material_slots {
            let slots: Vec<u32> = self.vertices.iter().map(|v| v.material_slot).collect();
            mesh.insert_attribute(ATTRIBUTE_MATERIAL_SLOT, slots);
        }

        mesh.insert_indices(Indices::U32(indices));

        Some(mesh)
    }
}
