//! [`PlaneSource`] backed by a plane entity's mesh and material assets.

use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;

use crate::plane::{PlaneMaterial, PlaneSource, QUAD_VERTEX_COUNT, TextureSlot, UvLayer};

/// UV attributes read from plane meshes, with the layer names they get.
const UV_LAYERS: [(&str, bevy::mesh::MeshVertexAttribute); 2] = [
    ("UVMap", Mesh::ATTRIBUTE_UV_0),
    ("UVMap.001", Mesh::ATTRIBUTE_UV_1),
];

/// A plane entity viewed through its assets.
pub struct EntityPlane<'a> {
    name: String,
    location: Vec3,
    mesh: &'a Mesh,
    material: Option<(&'a Handle<StandardMaterial>, Option<&'a StandardMaterial>)>,
}

impl<'a> EntityPlane<'a> {
    pub fn new(name: impl Into<String>, location: Vec3, mesh: &'a Mesh) -> Self {
        Self {
            name: name.into(),
            location,
            mesh,
            material: None,
        }
    }

    /// Attach the entity's material. `asset` is `None` while it is still loading.
    pub fn with_material(
        mut self,
        handle: &'a Handle<StandardMaterial>,
        asset: Option<&'a StandardMaterial>,
    ) -> Self {
        self.material = Some((handle, asset));
        self
    }
}

impl PlaneSource for EntityPlane<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Vec3 {
        self.location
    }

    fn vertices(&self) -> Vec<Vec3> {
        let Some(positions) = self
            .mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|positions| positions.as_float3())
        else {
            debug!("Plane '{}' has no Float32x3 position attribute", self.name);
            return Vec::new();
        };
        positions.iter().copied().map(Vec3::from).collect()
    }

    fn materials(&self) -> Vec<PlaneMaterial> {
        let Some((handle, asset)) = self.material else {
            return Vec::new();
        };

        // The base color texture is the only slot a StandardMaterial binds UV_0 to.
        let texture_slots = asset
            .map(|material| {
                vec![TextureSlot {
                    image: material.base_color_texture.clone(),
                }]
            })
            .unwrap_or_default();

        vec![PlaneMaterial {
            handle: handle.clone(),
            texture_slots,
        }]
    }

    fn uv_layers(&self) -> Vec<UvLayer> {
        UV_LAYERS
            .iter()
            .filter_map(|(name, attribute)| match self.mesh.attribute(attribute.id)? {
                VertexAttributeValues::Float32x2(uvs) if uvs.len() == QUAD_VERTEX_COUNT => {
                    let coords = [uvs[0], uvs[1], uvs[2], uvs[3]].map(Vec2::from);
                    Some(UvLayer::new(*name, coords))
                }
                _ => None,
            })
            .collect()
    }
}
