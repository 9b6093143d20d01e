//! Plane ordering, flattening and assembly.
//!
//! [`PuppetMerger`] sorts planes by their mean depth along a [`DepthAxis`],
//! collapses that axis to zero and concatenates the quads into one vertex
//! buffer with one face per plane. Vertex groups and material consolidation
//! are optional and controlled by [`MergeOptions`].

use bevy::prelude::*;

mod axis;
mod error;
mod groups;
mod materials;
mod options;

pub use axis::DepthAxis;
pub use error::{MaterialBindingFailure, MergeError, MergeWarning};
pub use groups::{GROUP_WEIGHT, VertexGroup, VertexGroups, quad_indices};
pub use materials::{ATLAS_UV_LAYER_NAME, AtlasUvLayer, MaterialAssignment};
pub use options::{DEFAULT_OUTPUT_NAME, GroupNamePolicy, MergeOptions};

use crate::plane::{PlaneContainer, PlaneExtractor, PlaneSource, QUAD_VERTEX_COUNT};

/// Output of a merge, ready to be turned into a mesh by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeResult {
    /// Name of the merged mesh.
    pub name: String,

    /// Axis the planes were ordered by and flattened along.
    pub axis: DepthAxis,

    /// Flattened vertices, four per plane, in sorted plane order.
    pub vertices: Vec<Vec3>,

    /// One quad per plane: face `k` is `[4k, 4k+1, 4k+2, 4k+3]`.
    pub faces: Vec<[u32; 4]>,

    /// Plane names in sorted order.
    pub plane_names: Vec<String>,

    pub vertex_groups: Option<VertexGroups>,

    pub material_assignment: Option<MaterialAssignment>,

    /// Non-fatal issues hit while assembling.
    pub warnings: Vec<MergeWarning>,
}

impl MergeResult {
    #[inline]
    pub fn plane_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Merges plane containers into a single flattened puppet.
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_puppet_merge::merge::{MergeOptions, PuppetMerger};
/// use bevy_puppet_merge::plane::PlaneDescriptor;
///
/// let quad = [Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y];
/// let planes = [
///     PlaneDescriptor::new("arm").with_location(Vec3::Z).with_vertices(quad),
///     PlaneDescriptor::new("body").with_vertices(quad),
/// ];
///
/// let result = PuppetMerger::new(MergeOptions::default())
///     .merge_sources(&planes)
///     .unwrap();
/// assert_eq!(result.plane_names, ["body", "arm"]);
/// assert!(result.vertices.iter().all(|v| v.z == 0.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PuppetMerger {
    options: MergeOptions,
}

impl PuppetMerger {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Extract and merge in one step.
    pub fn merge_sources<S, I>(&self, sources: I) -> Result<MergeResult, MergeError>
    where
        S: PlaneSource,
        I: IntoIterator<Item = S>,
    {
        let planes = PlaneExtractor::extract(sources)?;
        self.merge(&planes)
    }

    /// Merge containers given in selection order.
    ///
    /// The containers are left untouched; any error aborts the whole merge.
    pub fn merge(&self, planes: &[PlaneContainer]) -> Result<MergeResult, MergeError> {
        if planes.is_empty() {
            return Err(MergeError::EmptySelection);
        }

        for plane in planes {
            if let Some(vertex) = plane.first_non_finite() {
                return Err(MergeError::NonFiniteVertex {
                    name: plane.name.clone(),
                    vertex,
                });
            }
        }

        let axis = self.options.axis;
        let sorted = sort_by_depth(planes, axis);

        let mut vertices = Vec::with_capacity(sorted.len() * QUAD_VERTEX_COUNT);
        for plane in &sorted {
            vertices.extend(axis.flatten_quad(&plane.vertices));
        }

        let faces = quad_faces(sorted.len());
        let plane_names: Vec<String> = sorted.iter().map(|p| p.name.clone()).collect();
        let mut warnings = Vec::new();

        let vertex_groups = if self.options.create_vertex_groups {
            Some(VertexGroups::build(
                plane_names.iter().map(String::as_str),
                self.options.group_names,
                &mut warnings,
            )?)
        } else {
            None
        };

        let material_assignment = self
            .options
            .preserve_materials
            .then(|| MaterialAssignment::build(sorted.iter().copied(), &mut warnings));

        debug!(
            "Merged {} planes along {:?} ({} warnings)",
            faces.len(),
            axis,
            warnings.len()
        );

        Ok(MergeResult {
            name: self.options.output_name.clone(),
            axis,
            vertices,
            faces,
            plane_names,
            vertex_groups,
            material_assignment,
            warnings,
        })
    }
}

/// Planes ordered by ascending depth key.
///
/// The sort is stable: planes with equal keys keep their input order.
pub fn sort_by_depth(planes: &[PlaneContainer], axis: DepthAxis) -> Vec<&PlaneContainer> {
    let mut keyed: Vec<(f32, &PlaneContainer)> = planes
        .iter()
        .map(|plane| (axis.depth_key(&plane.vertices), plane))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, plane)| plane).collect()
}

/// Quad faces over `plane_count` consecutive blocks of four vertices.
pub fn quad_faces(plane_count: usize) -> Vec<[u32; 4]> {
    (0..plane_count).map(quad_indices).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::PlaneDescriptor;

    fn quad_at(depth: f32) -> [Vec3; 4] {
        [
            vec3(0.0, 0.0, depth),
            vec3(1.0, 0.0, depth),
            vec3(1.0, 1.0, depth),
            vec3(0.0, 1.0, depth),
        ]
    }

    fn names(result: &MergeResult) -> Vec<&str> {
        result.plane_names.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_two_plane_scenario() {
        let planes = vec![
            PlaneContainer::new("A", quad_at(1.0)),
            PlaneContainer::new("B", quad_at(0.0)),
        ];

        let result = PuppetMerger::default().merge(&planes).unwrap();

        assert_eq!(names(&result), ["B", "A"]);
        assert_eq!(
            result.vertices,
            vec![
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(1.0, 1.0, 0.0),
                vec3(0.0, 1.0, 0.0),
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(1.0, 1.0, 0.0),
                vec3(0.0, 1.0, 0.0),
            ]
        );
        assert_eq!(result.faces, vec![[0, 1, 2, 3], [4, 5, 6, 7]]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_inputs_not_mutated() {
        let planes = vec![PlaneContainer::new("A", quad_at(3.0))];
        let before = planes.clone();
        PuppetMerger::default().merge(&planes).unwrap();
        assert_eq!(planes, before);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(
            PuppetMerger::default().merge(&[]),
            Err(MergeError::EmptySelection)
        );
        let none: Vec<PlaneDescriptor> = Vec::new();
        assert_eq!(
            PuppetMerger::default().merge_sources(&none),
            Err(MergeError::EmptySelection)
        );
    }

    #[test]
    fn test_three_vertex_plane_aborts() {
        let sources = vec![
            PlaneDescriptor::new("ok").with_vertices(quad_at(0.0)),
            PlaneDescriptor::new("tri").with_vertices(quad_at(1.0).into_iter().take(3)),
        ];
        assert_eq!(
            PuppetMerger::default().merge_sources(&sources),
            Err(MergeError::MalformedPlane {
                name: "tri".into(),
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn test_stable_on_equal_depth() {
        let planes = vec![
            PlaneContainer::new("first", quad_at(0.5)),
            PlaneContainer::new("deep", quad_at(-1.0)),
            PlaneContainer::new("second", quad_at(0.5)),
            PlaneContainer::new("third", quad_at(0.5)),
        ];
        let result = PuppetMerger::default().merge(&planes).unwrap();
        assert_eq!(names(&result), ["deep", "first", "second", "third"]);
    }

    #[test]
    fn test_large_depths_keep_ascending_order() {
        let planes = vec![
            PlaneContainer::new("far", quad_at(2e38)),
            PlaneContainer::new("near", quad_at(1e38)),
            PlaneContainer::new("below", quad_at(-3e38)),
        ];
        let result = PuppetMerger::default().merge(&planes).unwrap();
        assert_eq!(names(&result), ["below", "near", "far"]);
    }

    #[test]
    fn test_mean_depth_orders_tilted_planes() {
        // First vertex says "tilted" is in front, its mean says behind.
        let tilted = [
            vec3(0.0, 0.0, 5.0),
            vec3(1.0, 0.0, -1.0),
            vec3(1.0, 1.0, -1.0),
            vec3(0.0, 1.0, -1.0),
        ];
        let planes = vec![
            PlaneContainer::new("flat", quad_at(1.0)),
            PlaneContainer::new("tilted", tilted),
        ];
        let result = PuppetMerger::default().merge(&planes).unwrap();
        assert_eq!(names(&result), ["tilted", "flat"]);
    }

    #[test]
    fn test_axis_changes_zeroed_component_only() {
        let planes = vec![
            PlaneContainer::new("p", [
                vec3(2.0, 3.0, 4.0),
                vec3(5.0, 6.0, 7.0),
                vec3(8.0, 9.0, 10.0),
                vec3(11.0, 12.0, 13.0),
            ]),
            PlaneContainer::new("q", quad_at(-2.0)),
        ];

        for axis in [DepthAxis::X, DepthAxis::Y, DepthAxis::Z] {
            let merger = PuppetMerger::new(MergeOptions::new().with_axis(axis));
            let result = merger.merge(&planes).unwrap();

            assert_eq!(result.vertex_count(), 8);
            assert_eq!(result.faces, quad_faces(2));
            assert!(result.vertices.iter().all(|v| axis.component(*v) == 0.0));

            let sorted = sort_by_depth(&planes, axis);
            let expected: Vec<Vec3> = sorted.iter().flat_map(|p| p.vertices).collect();
            for (out, input) in result.vertices.iter().zip(&expected) {
                for i in (0..3).filter(|&i| i != axis.index()) {
                    assert_eq!(out[i].to_bits(), input[i].to_bits());
                }
            }
        }
    }

    #[test]
    fn test_vertex_groups_follow_sorted_order() {
        let planes = vec![
            PlaneContainer::new("front", quad_at(2.0)),
            PlaneContainer::new("back", quad_at(-2.0)),
            PlaneContainer::new("middle", quad_at(0.0)),
        ];
        let result = PuppetMerger::default().merge(&planes).unwrap();
        let groups = result.vertex_groups.unwrap();

        assert_eq!(groups.get("back").unwrap().indices, [0, 1, 2, 3]);
        assert_eq!(groups.get("middle").unwrap().indices, [4, 5, 6, 7]);
        assert_eq!(groups.get("front").unwrap().indices, [8, 9, 10, 11]);
    }

    #[test]
    fn test_optional_outputs_disabled() {
        let planes = vec![PlaneContainer::new("a", quad_at(0.0))];
        let merger = PuppetMerger::new(
            MergeOptions::new()
                .with_vertex_groups(false)
                .with_preserve_materials(false),
        );
        let result = merger.merge(&planes).unwrap();
        assert!(result.vertex_groups.is_none());
        assert!(result.material_assignment.is_none());
    }

    #[test]
    fn test_duplicate_names_rejected_aborts_merge() {
        let planes = vec![
            PlaneContainer::new("hand", quad_at(0.0)),
            PlaneContainer::new("hand", quad_at(1.0)),
        ];
        let merger =
            PuppetMerger::new(MergeOptions::new().with_group_names(GroupNamePolicy::Reject));
        assert_eq!(
            merger.merge(&planes),
            Err(MergeError::DuplicatePlaneName { name: "hand".into() })
        );
    }

    #[test]
    fn test_non_finite_container_rejected() {
        let mut bad = quad_at(0.0);
        bad[1].x = f32::NAN;
        let planes = vec![PlaneContainer::new("bad", bad)];
        assert_eq!(
            PuppetMerger::default().merge(&planes),
            Err(MergeError::NonFiniteVertex {
                name: "bad".into(),
                vertex: 1,
            })
        );
    }

    #[test]
    fn test_materials_preserved_when_enabled() {
        let mut materials = Assets::<StandardMaterial>::default();
        let handle = materials.add(StandardMaterial::default());
        let planes = vec![
            PlaneContainer::new("top", quad_at(1.0))
                .with_material(crate::plane::PlaneMaterial::new(handle.clone())),
            PlaneContainer::new("bottom", quad_at(0.0)),
        ];
        let merger = PuppetMerger::new(MergeOptions::new().with_preserve_materials(true));
        let result = merger.merge(&planes).unwrap();
        let assignment = result.material_assignment.unwrap();

        assert_eq!(assignment.face_materials, vec![0, 1]);
        assert_eq!(assignment.materials.len(), 1);
        assert_eq!(assignment.uv_layer.coords.len(), 8);
        // "bottom" sorts first and has no material, "top" has no texture slot.
        assert_eq!(assignment.uv_layer.face_textures, vec![None, None]);
        assert_eq!(result.warnings.len(), 3);
    }
}
