//! Reads plane sources into [`PlaneContainer`]s.

use bevy::prelude::*;

use super::container::{PlaneContainer, QUAD_VERTEX_COUNT};
use super::source::PlaneSource;
use crate::merge::MergeError;

/// Turns plane sources into containers in the common coordinate space.
///
/// Only the source location is applied; rotation and scale are ignored.
/// The output keeps input order, which is not the draw order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaneExtractor;

impl PlaneExtractor {
    /// Extract every source, aborting on the first malformed one.
    pub fn extract<S, I>(sources: I) -> Result<Vec<PlaneContainer>, MergeError>
    where
        S: PlaneSource,
        I: IntoIterator<Item = S>,
    {
        sources
            .into_iter()
            .map(|source| Self::extract_one(&source))
            .collect()
    }

    /// Extract a single source.
    pub fn extract_one<S: PlaneSource + ?Sized>(source: &S) -> Result<PlaneContainer, MergeError> {
        let local = source.vertices();
        let quad: [Vec3; QUAD_VERTEX_COUNT] =
            local
                .as_slice()
                .try_into()
                .map_err(|_| MergeError::MalformedPlane {
                    name: source.name().to_string(),
                    vertex_count: local.len(),
                })?;

        let location = source.location();
        let container = PlaneContainer {
            name: source.name().to_string(),
            vertices: quad.map(|v| v + location),
            materials: source.materials(),
            uv_maps: source.uv_layers(),
        };

        if let Some(vertex) = container.first_non_finite() {
            return Err(MergeError::NonFiniteVertex {
                name: container.name,
                vertex,
            });
        }

        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::PlaneDescriptor;

    fn unit_quad() -> [Vec3; 4] {
        [Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y]
    }

    #[test]
    fn test_location_is_added() {
        let source = PlaneDescriptor::new("leg")
            .with_location(vec3(2.0, -1.0, 0.5))
            .with_vertices(unit_quad());

        let plane = PlaneExtractor::extract_one(&source).unwrap();
        assert_eq!(plane.name, "leg");
        assert_eq!(
            plane.vertices,
            [
                vec3(2.0, -1.0, 0.5),
                vec3(3.0, -1.0, 0.5),
                vec3(3.0, 0.0, 0.5),
                vec3(2.0, 0.0, 0.5),
            ]
        );
    }

    #[test]
    fn test_input_order_preserved() {
        let sources = vec![
            PlaneDescriptor::new("front").with_vertices(unit_quad().map(|v| v + Vec3::Z)),
            PlaneDescriptor::new("back").with_vertices(unit_quad()),
        ];

        let planes = PlaneExtractor::extract(&sources).unwrap();
        let names: Vec<_> = planes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["front", "back"]);
    }

    #[test]
    fn test_three_vertices_rejected() {
        let sources = vec![
            PlaneDescriptor::new("ok").with_vertices(unit_quad()),
            PlaneDescriptor::new("tri").with_vertices([Vec3::ZERO, Vec3::X, Vec3::Y]),
        ];

        assert_eq!(
            PlaneExtractor::extract(&sources),
            Err(MergeError::MalformedPlane {
                name: "tri".into(),
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let source = PlaneDescriptor::new("bad")
            .with_location(vec3(0.0, f32::INFINITY, 0.0))
            .with_vertices(unit_quad());

        assert_eq!(
            PlaneExtractor::extract_one(&source),
            Err(MergeError::NonFiniteVertex {
                name: "bad".into(),
                vertex: 0,
            })
        );
    }
}
