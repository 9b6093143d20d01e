//! Plugin for merging puppet planes.
use bevy::prelude::*;

use crate::merge::MergeOptions;
use crate::scene::{
    MergePuppet, PuppetMergeFailed, PuppetMergeSystems, PuppetMerged, merge_selected_planes,
};

/// Plugin that merges selected puppet planes on request.
///
/// This plugin registers:
/// - [`MergeOptions`] as the default options resource
/// - [`MergePuppet`], [`PuppetMerged`] and [`PuppetMergeFailed`] messages
/// - [`merge_selected_planes`] in [`PuppetMergeSystems`] during `Update`
///
/// # Example
/// ```ignore
/// use bevy::prelude::*;
/// use bevy_puppet_merge::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(PuppetMergePlugin::with_options(
///         MergeOptions::new().with_axis(DepthAxis::Y),
///     ))
///     .run();
/// ```
#[derive(Default)]
pub struct PuppetMergePlugin {
    pub options: MergeOptions,
}

impl PuppetMergePlugin {
    pub fn with_options(options: MergeOptions) -> Self {
        Self { options }
    }
}

impl Plugin for PuppetMergePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.options.clone())
            .add_message::<MergePuppet>()
            .add_message::<PuppetMerged>()
            .add_message::<PuppetMergeFailed>()
            .add_systems(Update, merge_selected_planes.in_set(PuppetMergeSystems));
    }
}
