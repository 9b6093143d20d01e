//! Input capability: what the merger needs to know about each selected plane.

use bevy::prelude::*;

use super::container::{PlaneMaterial, UvLayer};

/// Read access to one source plane.
///
/// Implemented by the ECS adapter for plane entities and by
/// [`PlaneDescriptor`] for plain data.
pub trait PlaneSource {
    /// Identifier of the source; becomes the vertex group name.
    fn name(&self) -> &str;

    /// World-space location added to every local vertex.
    fn location(&self) -> Vec3;

    /// Local vertex positions in source order.
    fn vertices(&self) -> Vec<Vec3>;

    fn materials(&self) -> Vec<PlaneMaterial> {
        Vec::new()
    }

    fn uv_layers(&self) -> Vec<UvLayer> {
        Vec::new()
    }
}

impl<T: PlaneSource + ?Sized> PlaneSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn location(&self) -> Vec3 {
        (**self).location()
    }

    fn vertices(&self) -> Vec<Vec3> {
        (**self).vertices()
    }

    fn materials(&self) -> Vec<PlaneMaterial> {
        (**self).materials()
    }

    fn uv_layers(&self) -> Vec<UvLayer> {
        (**self).uv_layers()
    }
}

/// Owned plane description for callers that don't go through the ECS.
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_puppet_merge::plane::PlaneDescriptor;
///
/// let torso = PlaneDescriptor::new("torso")
///     .with_location(vec3(0.0, 0.0, 1.0))
///     .with_vertices([Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaneDescriptor {
    pub name: String,
    pub location: Vec3,
    pub vertices: Vec<Vec3>,
    pub materials: Vec<PlaneMaterial>,
    pub uv_layers: Vec<UvLayer>,
}

impl PlaneDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }

    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = Vec3>) -> Self {
        self.vertices = vertices.into_iter().collect();
        self
    }

    pub fn with_material(mut self, material: PlaneMaterial) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_uv_layer(mut self, layer: UvLayer) -> Self {
        self.uv_layers.push(layer);
        self
    }
}

impl PlaneSource for PlaneDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Vec3 {
        self.location
    }

    fn vertices(&self) -> Vec<Vec3> {
        self.vertices.clone()
    }

    fn materials(&self) -> Vec<PlaneMaterial> {
        self.materials.clone()
    }

    fn uv_layers(&self) -> Vec<UvLayer> {
        self.uv_layers.clone()
    }
}
