//! Per-plane vertex groups.

use std::collections::HashSet;

use super::error::{MergeError, MergeWarning};
use super::options::GroupNamePolicy;
use crate::plane::QUAD_VERTEX_COUNT;

/// Weight given to every vertex of a plane's group.
pub const GROUP_WEIGHT: f32 = 1.0;

/// A named, weighted set of the four vertices that came from one plane.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexGroup {
    pub name: String,
    pub indices: [u32; QUAD_VERTEX_COUNT],
    pub weight: f32,
}

/// Vertex groups of a merged mesh, in sorted plane order.
///
/// Group `k` always holds vertices `4k..4k+4`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexGroups {
    groups: Vec<VertexGroup>,
}

impl VertexGroups {
    /// Build one group per plane name, resolving collisions with `policy`.
    ///
    /// Renames are reported through `warnings`.
    pub fn build<'a>(
        names: impl IntoIterator<Item = &'a str>,
        policy: GroupNamePolicy,
        warnings: &mut Vec<MergeWarning>,
    ) -> Result<Self, MergeError> {
        let mut taken = HashSet::new();
        let mut groups = Vec::new();

        for (k, name) in names.into_iter().enumerate() {
            let unique = if taken.contains(name) {
                match policy {
                    GroupNamePolicy::Reject => {
                        return Err(MergeError::DuplicatePlaneName {
                            name: name.to_string(),
                        });
                    }
                    GroupNamePolicy::Suffix => {
                        let renamed = next_free_name(name, &taken);
                        warnings.push(MergeWarning::GroupRenamed {
                            original: name.to_string(),
                            renamed: renamed.clone(),
                        });
                        renamed
                    }
                }
            } else {
                name.to_string()
            };

            taken.insert(unique.clone());
            groups.push(VertexGroup {
                name: unique,
                indices: quad_indices(k),
                weight: GROUP_WEIGHT,
            });
        }

        Ok(Self { groups })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexGroup> {
        self.groups.iter()
    }

    /// Look up a group by its (possibly suffixed) name.
    pub fn get(&self, name: &str) -> Option<&VertexGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Group owning `vertex`, if any.
    pub fn group_of(&self, vertex: u32) -> Option<&VertexGroup> {
        self.groups.get(vertex as usize / QUAD_VERTEX_COUNT)
    }
}

/// The four consecutive vertex indices of the quad at sorted position `k`.
#[inline]
pub fn quad_indices(k: usize) -> [u32; QUAD_VERTEX_COUNT] {
    let base = (k * QUAD_VERTEX_COUNT) as u32;
    [base, base + 1, base + 2, base + 3]
}

fn next_free_name(name: &str, taken: &HashSet<String>) -> String {
    (1..)
        .map(|n| format!("{name}.{n:03}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}
