//! Grouping, sorting and range queries over parsed versions.
//!
//! Versions with identical numeric segments form a [VersionGroup]. Groups are
//! ordered by their numbers alone, members inside a group by the full tiered
//! version order. Keeping the tiered comparisons inside a group avoids most of
//! the cases where that order is not transitive.

use std::collections::HashMap;
use std::sync::Arc;

use version::{GroupId, Version};

mod group;
mod merge_sort;
mod policy;
mod sorted;

pub use group::VersionGroup;
pub use policy::{Bound, InclusionPolicy};
pub use sorted::{SortedVersionGroups, SCAN_ALL_START};

/// Group versions by their full numeric segments.
pub fn group<I>(versions: I) -> HashMap<GroupId, VersionGroup>
where
    I: IntoIterator,
    I::Item: Into<Arc<Version>>,
{
    let mut groups: HashMap<GroupId, VersionGroup> = HashMap::new();
    for v in versions {
        let v: Arc<Version> = v.into();
        groups
            .entry(v.group_id())
            .or_insert_with(|| {
                tracing::trace!("new group {}", v.numbers());
                VersionGroup::new(v.numbers().clone())
            })
            .insert(v);
    }
    groups
}

/// Group versions and order the groups, ready for [SortedVersionGroups::query_range].
pub fn build_index<I>(versions: I) -> SortedVersionGroups
where
    I: IntoIterator,
    I::Item: Into<Arc<Version>>,
{
    let groups = group(versions).into_values().collect();
    SortedVersionGroups::from_groups(groups)
}

/// Versions ascending: groups by numbers, then members by the tiered order.
///
/// Duplicate raw strings collapse to one entry.
pub fn sort<I>(versions: I) -> Vec<Arc<Version>>
where
    I: IntoIterator,
    I::Item: Into<Arc<Version>>,
{
    build_index(versions)
        .groups()
        .iter()
        .flat_map(VersionGroup::sorted_versions)
        .collect()
}
