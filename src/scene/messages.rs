//! Messages for requesting merges and observing their outcome.

use bevy::prelude::*;

use crate::merge::{MergeError, MergeOptions, MergeWarning};

/// Request a merge of the currently selected puppet planes.
///
/// Without explicit options the [`MergeOptions`] resource is used. When
/// several requests arrive in one frame only the last one runs; the earlier
/// ones get a [`PuppetMergeFailed`] carrying [`MergeError::Superseded`].
#[derive(Message, Clone, Debug, Default)]
pub struct MergePuppet {
    pub options: Option<MergeOptions>,
}

impl MergePuppet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MergeOptions) -> Self {
        Self {
            options: Some(options),
        }
    }
}

/// A merge succeeded and `entity` holds the new puppet.
#[derive(Message, Clone, Debug)]
pub struct PuppetMerged {
    pub entity: Entity,
    pub plane_count: usize,
    pub warnings: Vec<MergeWarning>,
}

/// A merge was aborted. Nothing was spawned and the selection is unchanged.
#[derive(Message, Clone, Debug)]
pub struct PuppetMergeFailed {
    pub error: MergeError,
}
