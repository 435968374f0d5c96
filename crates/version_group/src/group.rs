use std::collections::HashMap;
use std::sync::Arc;

use version::{GroupId, Version, VersionNumbers};

use crate::merge_sort::merge_sort_by;
use crate::policy::Bound;

/// All versions that share the exact same numeric segments.
///
/// Members are keyed by their raw string, so `v1.0.0` and `1.0.0` are both
/// kept while a second `1.0.0` replaces the first.
#[derive(Debug, Clone)]
pub struct VersionGroup {
    numbers: VersionNumbers,
    members: HashMap<String, Arc<Version>>,
}

impl VersionGroup {

    pub fn new(numbers: VersionNumbers) -> Self {
        Self {
            numbers,
            members: HashMap::new(),
        }
    }

    /// Versions with other numbers are still inserted, callers building
    /// groups by hand are expected to keep them consistent.
    pub fn from_versions<I>(numbers: VersionNumbers, versions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<Version>>,
    {
        let mut group = Self::new(numbers);
        for v in versions {
            group.insert(v);
        }
        group
    }

    /// Returns true if a version with the same raw string was already present.
    /// The new version replaces it either way.
    pub fn insert(&mut self, v: impl Into<Arc<Version>>) -> bool {
        let v = v.into();
        let existed = self.members.insert(v.raw().to_string(), Arc::clone(&v)).is_some();
        if existed {
            tracing::trace!("replaced duplicate version {} in group {}", v, self.numbers);
        }
        existed
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.members.contains_key(raw)
    }

    pub fn id(&self) -> GroupId {
        self.numbers.group_id()
    }

    pub fn group_numbers(&self) -> &VersionNumbers {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// members in no particular order
    pub fn versions(&self) -> impl Iterator<Item = &Arc<Version>> {
        self.members.values()
    }

    /// members ascending by the tiered version order
    pub fn sorted_versions(&self) -> Vec<Arc<Version>> {
        let mut sorted: Vec<Arc<Version>> = self.members.values().cloned().collect();
        // start from a deterministic order so equal-comparing members stay put
        sorted.sort_by(|a, b| a.raw().cmp(b.raw()));
        merge_sort_by(&mut sorted, |a, b| a.as_ref().cmp(b.as_ref()));
        sorted
    }

    /// Members between `start` and `end`, ascending.
    ///
    /// A member above `end` ends the scan. A member failing only one of the
    /// boundary tests is skipped, suffix and release time tiers can put it
    /// on the wrong side of a bound while later members are still inside.
    pub fn query_range(&self, start: Bound<'_>, end: Bound<'_>) -> Vec<Arc<Version>> {
        let mut ret = Vec::new();
        for v in self.sorted_versions() {
            if v.as_ref() > end.version {
                break;
            }
            if !start.admits_above(&v) || !end.admits_below(&v) {
                continue;
            }
            ret.push(v);
        }
        ret
    }
}
