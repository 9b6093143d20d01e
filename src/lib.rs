//! # bevy_puppet_merge
//!
//! Merges layered quad planes into a single flattened mesh for 2D puppet
//! rendering.
//!
//! Planes are ordered by their mean position along a depth axis, that axis
//! is collapsed to zero, and every plane becomes one quad of the merged mesh.
//! Per-plane identity survives as vertex groups; materials and textures can
//! optionally be consolidated.
//!
//! ## Features
//!
//! - Stable depth ordering along X, Y or Z
//! - Vertex groups named after the source planes
//! - Best-effort material and texture consolidation with typed warnings
//! - Bevy [`Mesh`](bevy::mesh::Mesh) output with plane/material vertex attributes
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_puppet_merge::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PuppetMergePlugin::default())
//!         .add_systems(Startup, setup)
//!         .add_systems(Update, merge_on_enter)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
//!     for (name, depth) in [("body", 0.0), ("arm", 0.5), ("head", 1.0)] {
//!         commands.spawn((
//!             Name::new(name),
//!             PuppetPlane,
//!             Selected,
//!             Mesh3d(meshes.add(Rectangle::new(1.0, 1.0))),
//!             Transform::from_xyz(0.0, 0.0, depth),
//!         ));
//!     }
//! }
//!
//! fn merge_on_enter(keys: Res<ButtonInput<KeyCode>>, mut requests: MessageWriter<MergePuppet>) {
//!     if keys.just_pressed(KeyCode::Enter) {
//!         requests.write(MergePuppet::new());
//!     }
//! }
//! ```
//!
//! Without an ECS world, use [`merge::PuppetMerger`] directly:
//!
//! ```
//! use bevy::prelude::*;
//! use bevy_puppet_merge::prelude::*;
//!
//! let quad = [Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y];
//! let planes = [
//!     PlaneDescriptor::new("front").with_location(Vec3::Z).with_vertices(quad),
//!     PlaneDescriptor::new("back").with_vertices(quad),
//! ];
//! let result = PuppetMerger::default().merge_sources(&planes).unwrap();
//! assert_eq!(result.faces, vec![[0, 1, 2, 3], [4, 5, 6, 7]]);
//! let mesh = PuppetMeshBuilder::from_result(&result).build();
//! assert!(mesh.is_some());
//! ```

pub mod merge;
pub mod mesh;
pub mod plane;
mod plugin;
pub mod scene;

pub use plugin::PuppetMergePlugin;

pub mod prelude {
    pub use crate::merge::{
        DepthAxis, GroupNamePolicy, MaterialBindingFailure, MergeError, MergeOptions,
        MergeResult, MergeWarning, PuppetMerger,
    };
    pub use crate::mesh::{
        ATTRIBUTE_GROUP_WEIGHT, ATTRIBUTE_MATERIAL_SLOT, ATTRIBUTE_PLANE_INDEX, PuppetMeshBuilder,
        PuppetMeshExt, PuppetVertex,
    };
    pub use crate::plane::{
        PlaneContainer, PlaneDescriptor, PlaneExtractor, PlaneMaterial, PlaneSource, UvLayer,
    };
    pub use crate::plugin::PuppetMergePlugin;
    pub use crate::scene::{
        ActiveObject, MergePuppet, MergedPuppet, PuppetMaterials, PuppetMergeFailed,
        PuppetMergeSystems, PuppetMerged, PuppetPlane, PuppetVertexGroups, Selected,
    };
}
