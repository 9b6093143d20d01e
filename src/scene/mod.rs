//! ECS side of the merge: reads selected plane entities, spawns the result.

mod components;
mod messages;
mod source;
mod systems;

pub use components::{
    ActiveObject, MergedPuppet, PuppetMaterials, PuppetPlane, PuppetVertexGroups, Selected,
};
pub use messages::{MergePuppet, PuppetMergeFailed, PuppetMerged};
pub use source::EntityPlane;
pub use systems::{PuppetMergeSystems, merge_selected_planes};
