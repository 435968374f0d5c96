use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const GROUP_ID_DELIMITER: &str = ".";

/// Group key: every numeric segment joined with [GROUP_ID_DELIMITER]
pub type GroupId = String;

/// The numeric segments of a version, `v1.2.3-rc1` -> `[1, 2, 3]`
///
/// Ordering compares segment by segment by magnitude (`10 > 2`). When one
/// side runs out of segments first it is lesser: `1.2 < 1.2.0 < 1.2.0.0`
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionNumbers(Vec<u64>);

impl VersionNumbers {

    pub fn new(numbers: Vec<u64>) -> Self {
        Self(numbers)
    }

    pub fn as_slice(&self) -> &[u64] {
        self.0.as_slice()
    }

    /// leading segment, if any
    pub fn major(&self) -> Option<u64> {
        self.0.first().copied()
    }

    /// `[1, 2, 0]` -> `"1.2.0"`
    ///
    /// Uses the full sequence, `1.2` and `1.2.0` are different groups.
    pub fn group_id(&self) -> GroupId {
        self.0.iter().join(GROUP_ID_DELIMITER)
    }
}

impl From<Vec<u64>> for VersionNumbers {
    fn from(v: Vec<u64>) -> Self {
        Self(v)
    }
}

impl From<&[u64]> for VersionNumbers {
    fn from(v: &[u64]) -> Self {
        Self(v.to_vec())
    }
}

impl std::ops::Deref for VersionNumbers {
    type Target = [u64];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl std::fmt::Display for VersionNumbers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.group_id())
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use std::cmp::Ordering;

    fn nums(v: &[u64]) -> VersionNumbers {
        VersionNumbers::from(v)
    }

    #[test]
    fn ordering() {
        assert_eq!(nums(&[1, 2, 3]).cmp(&nums(&[1, 3, 0])), Ordering::Less);
        assert_eq!(nums(&[1, 10]).cmp(&nums(&[1, 2])), Ordering::Greater);
        assert_eq!(nums(&[1, 2]).cmp(&nums(&[1, 2, 0])), Ordering::Less);
        assert_eq!(nums(&[1, 2, 0]).cmp(&nums(&[1, 2])), Ordering::Greater);
        assert_eq!(nums(&[2]).cmp(&nums(&[1, 9, 9])), Ordering::Greater);
        assert_eq!(nums(&[4, 5]).cmp(&nums(&[4, 5])), Ordering::Equal);
        assert_eq!(nums(&[]).cmp(&nums(&[0])), Ordering::Less);
    }

    #[test]
    fn group_id() {
        assert_eq!(nums(&[1, 2, 3]).group_id(), "1.2.3");
        assert_eq!(nums(&[126]).group_id(), "126");
        assert_eq!(nums(&[]).group_id(), "");
        assert_ne!(nums(&[1, 2]).group_id(), nums(&[1, 2, 0]).group_id());
        assert_eq!(nums(&[15, 5, 1]).to_string(), "15.5.1");
    }

    #[test]
    fn major() {
        assert_eq!(nums(&[7, 85, 0]).major(), Some(7));
        assert_eq!(nums(&[]).major(), None);
    }
}
