//! Uniform per-plane records consumed by the merger.

use bevy::prelude::*;

use crate::merge::MaterialBindingFailure;

/// Number of vertices every plane must have.
pub const QUAD_VERTEX_COUNT: usize = 4;

/// UV coordinates used when a plane carries no UV layer of its own.
pub const UNIT_QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// One input plane, already moved into the common coordinate space.
///
/// Containers live for a single merge. The merger never mutates them; the
/// flattened vertices it emits are fresh copies.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneContainer {
    /// Source name, used as the vertex group label.
    pub name: String,

    /// The four quad corners in source order. The order defines winding.
    pub vertices: [Vec3; QUAD_VERTEX_COUNT],

    /// Materials assigned to the source, in slot order.
    pub materials: Vec<PlaneMaterial>,

    /// UV layers of the source, in layer order.
    pub uv_maps: Vec<UvLayer>,
}

impl PlaneContainer {
    /// Create a container without materials or UV layers.
    pub fn new(name: impl Into<String>, vertices: [Vec3; QUAD_VERTEX_COUNT]) -> Self {
        Self {
            name: name.into(),
            vertices,
            materials: Vec::new(),
            uv_maps: Vec::new(),
        }
    }

    pub fn with_material(mut self, material: PlaneMaterial) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_uv_map(mut self, uv_map: UvLayer) -> Self {
        self.uv_maps.push(uv_map);
        self
    }

    /// Image bound to the first texture slot of the first material.
    pub fn first_texture(&self) -> Result<&Handle<Image>, MaterialBindingFailure> {
        self.materials
            .first()
            .ok_or(MaterialBindingFailure::NoMaterial)?
            .first_texture()
    }

    /// UVs of the first layer, or the unit square if there is none.
    pub fn primary_uvs(&self) -> [Vec2; QUAD_VERTEX_COUNT] {
        self.uv_maps
            .first()
            .map(|layer| layer.coords)
            .unwrap_or(UNIT_QUAD_UVS)
    }

    /// Index of the first vertex with a NaN or infinite coordinate.
    pub(crate) fn first_non_finite(&self) -> Option<usize> {
        self.vertices.iter().position(|v| !v.is_finite())
    }
}

/// A material reference held by a plane.
///
/// Identity is the material handle: two planes pointing at the same asset
/// share one entry in the consolidated material list.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneMaterial {
    pub handle: Handle<StandardMaterial>,
    pub texture_slots: Vec<TextureSlot>,
}

impl PlaneMaterial {
    pub fn new(handle: Handle<StandardMaterial>) -> Self {
        Self {
            handle,
            texture_slots: Vec::new(),
        }
    }

    pub fn with_texture_slot(mut self, image: Option<Handle<Image>>) -> Self {
        self.texture_slots.push(TextureSlot { image });
        self
    }

    #[inline]
    pub fn id(&self) -> AssetId<StandardMaterial> {
        self.handle.id()
    }

    /// Image of the first texture slot.
    pub fn first_texture(&self) -> Result<&Handle<Image>, MaterialBindingFailure> {
        self.texture_slots
            .first()
            .ok_or(MaterialBindingFailure::NoTextureSlot)?
            .image
            .as_ref()
            .ok_or(MaterialBindingFailure::NoImage)
    }
}

/// A texture slot of a material; the image may be unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureSlot {
    pub image: Option<Handle<Image>>,
}

/// A named set of per-vertex UV coordinates for one plane.
#[derive(Clone, Debug, PartialEq)]
pub struct UvLayer {
    pub name: String,
    pub coords: [Vec2; QUAD_VERTEX_COUNT],
}

impl UvLayer {
    pub fn new(name: impl Into<String>, coords: [Vec2; QUAD_VERTEX_COUNT]) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> [Vec3; 4] {
        [Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y]
    }

    #[test]
    fn test_first_texture_failures() {
        let mut materials = Assets::<StandardMaterial>::default();
        let mut images = Assets::<Image>::default();

        let bare = PlaneContainer::new("bare", quad());
        assert_eq!(bare.first_texture(), Err(MaterialBindingFailure::NoMaterial));

        let handle = materials.add(StandardMaterial::default());
        let no_slot = PlaneContainer::new("no_slot", quad())
            .with_material(PlaneMaterial::new(handle.clone()));
        assert_eq!(
            no_slot.first_texture(),
            Err(MaterialBindingFailure::NoTextureSlot)
        );

        let empty_slot = PlaneContainer::new("empty_slot", quad())
            .with_material(PlaneMaterial::new(handle.clone()).with_texture_slot(None));
        assert_eq!(empty_slot.first_texture(), Err(MaterialBindingFailure::NoImage));

        let image = images.add(Image::default());
        let bound = PlaneContainer::new("bound", quad())
            .with_material(PlaneMaterial::new(handle).with_texture_slot(Some(image.clone())));
        assert_eq!(bound.first_texture(), Ok(&image));
    }

    #[test]
    fn test_primary_uvs_fallback() {
        let plane = PlaneContainer::new("p", quad());
        assert_eq!(plane.primary_uvs(), UNIT_QUAD_UVS);

        let coords = [Vec2::ZERO, Vec2::X * 0.5, Vec2::splat(0.5), Vec2::Y * 0.5];
        let plane = plane.with_uv_map(UvLayer::new("UVMap", coords));
        assert_eq!(plane.primary_uvs(), coords);
    }

    #[test]
    fn test_first_non_finite() {
        let mut plane = PlaneContainer::new("p", quad());
        assert_eq!(plane.first_non_finite(), None);
        plane.vertices[2].z = f32::NAN;
        assert_eq!(plane.first_non_finite(), Some(2));
    }
}
