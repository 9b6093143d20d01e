//! Plane extraction.
//!
//! Every selected source is read into a [`PlaneContainer`]: four vertices in
//! the common coordinate space plus its name, materials and UV layers.

mod container;
mod extractor;
mod source;

pub use container::{
    PlaneContainer, PlaneMaterial, QUAD_VERTEX_COUNT, TextureSlot, UNIT_QUAD_UVS, UvLayer,
};
pub use extractor::PlaneExtractor;
pub use source::{PlaneDescriptor, PlaneSource};
