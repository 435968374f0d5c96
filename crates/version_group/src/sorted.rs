use std::collections::HashMap;
use std::sync::Arc;

use version::{GroupId, Version};

use crate::group::VersionGroup;
use crate::policy::Bound;

/// A range start with this raw string scans from the first group.
pub const SCAN_ALL_START: &str = "0";

/// Groups ordered by their numbers, with a lookup from group id to position.
///
/// Built once from a snapshot of versions, see [crate::build_index].
#[derive(Debug, Clone, Default)]
pub struct SortedVersionGroups {
    groups: Vec<VersionGroup>,
    index: HashMap<GroupId, usize>,
}

impl SortedVersionGroups {

    pub(crate) fn from_groups(mut groups: Vec<VersionGroup>) -> Self {
        groups.sort_by(|a, b| a.group_numbers().cmp(b.group_numbers()));
        let index = groups
            .iter()
            .enumerate()
            .map(|(pos, group)| (group.id(), pos))
            .collect();
        Self { groups, index }
    }

    pub fn group_ids(&self) -> Vec<GroupId> {
        self.groups.iter().map(VersionGroup::id).collect()
    }

    pub fn groups(&self) -> &[VersionGroup] {
        &self.groups
    }

    pub fn get(&self, id: &str) -> Option<&VersionGroup> {
        self.index.get(id).map(|pos| &self.groups[*pos])
    }

    /// number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// number of versions across all groups
    pub fn version_count(&self) -> usize {
        self.groups.iter().map(VersionGroup::len).sum()
    }

    /// All versions from the group of `start` up to `end`.
    ///
    /// The scan begins at the group holding `start`'s numbers, or at the very
    /// first group when `start` is the raw string `"0"`. When no such group
    /// exists the result is empty. Every group from there on is scanned, each
    /// contributing its own members in order.
    pub fn query_range<'a, S, E>(&self, start: S, end: E) -> Vec<Arc<Version>>
    where
        S: Into<Bound<'a>>,
        E: Into<Bound<'a>>,
    {
        let start = start.into();
        let end = end.into();

        let first = if start.version.raw() == SCAN_ALL_START {
            0
        } else {
            match self.index.get(&start.version.group_id()) {
                Some(pos) => *pos,
                None => {
                    tracing::debug!("no group for range start {}", start.version);
                    return Vec::new();
                }
            }
        };

        tracing::debug!(
            "range {} .. {} from group {} of {}",
            start.version,
            end.version,
            first,
            self.groups.len()
        );

        self.groups[first..]
            .iter()
            .flat_map(|group| group.query_range(start, end))
            .collect()
    }
}
