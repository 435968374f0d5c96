//! Version
//!
//! Structured form of scraped, non-standard release version strings.
//!
//! `v1.2.3-beta1` -> prefix `v`, numbers `[1, 2, 3]`, suffix `-beta1`
//!
//! Parsing never fails. A string that yields no numeric segments is still a
//! [Version], it is just not [valid](Version::is_valid). Use
//! [parse_checked] when only real versions are wanted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

mod affix;
mod error;
mod numbers;
pub mod parser;

pub use affix::{VersionPrefix, VersionSuffix};
pub use error::InvalidVersion;
pub use numbers::{GroupId, VersionNumbers, GROUP_ID_DELIMITER};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "VersionRecord")]
pub struct Version {
    raw: String,
    prefix: VersionPrefix,
    numbers: VersionNumbers,
    suffix: VersionSuffix,

    #[serde(skip_serializing_if = "Option::is_none")]
    release_time: Option<DateTime<Utc>>,
}

/// Only the raw string and release time are read back, the rest is
/// re-derived so that `numbers` always matches `raw`.
#[derive(Deserialize)]
struct VersionRecord {
    raw: String,
    #[serde(default)]
    release_time: Option<DateTime<Utc>>,
}

impl From<VersionRecord> for Version {
    fn from(r: VersionRecord) -> Self {
        Version::new(&r.raw).with_release_time(r.release_time)
    }
}

/// Parse a version string, never fails
pub fn parse(raw: &str) -> Version {
    Version::new(raw)
}

/// Parse a version string, fails when no numeric segment was found
pub fn parse_checked(raw: &str) -> Result<Version, InvalidVersion> {
    let v = Version::new(raw);
    if v.is_valid() {
        Ok(v)
    } else {
        Err(InvalidVersion { raw: v.raw })
    }
}

/// Parse many version strings at once
pub fn parse_all<I, S>(raws: I) -> Vec<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter().map(|s| Version::new(s.as_ref())).collect()
}

fn eq_to_none(v: Ordering) -> Option<Ordering> {
    if matches!(v, Ordering::Equal) {
        return None;
    }
    Some(v)
}

impl Version {

    pub fn new(raw: &str) -> Self {
        let parts = parser::split(raw);
        Self {
            raw: raw.to_string(),
            prefix: parts.prefix.into(),
            numbers: parts.numbers.into(),
            suffix: parts.suffix.into(),
            release_time: None,
        }
    }

    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    pub fn prefix(&self) -> &VersionPrefix {
        &self.prefix
    }

    pub fn numbers(&self) -> &VersionNumbers {
        &self.numbers
    }

    pub fn suffix(&self) -> &VersionSuffix {
        &self.suffix
    }

    pub fn release_time(&self) -> Option<DateTime<Utc>> {
        self.release_time
    }

    pub fn set_release_time(&mut self, t: Option<DateTime<Utc>>) {
        self.release_time = t;
    }

    pub fn with_release_time(mut self, t: Option<DateTime<Utc>>) -> Self {
        self.release_time = t;
        self
    }

    /// a version is valid when at least one numeric segment was found
    pub fn is_valid(&self) -> bool {
        !self.numbers.is_empty()
    }

    /// strict semver check of the raw string, for filtering only
    pub fn is_semver(&self) -> bool {
        semver::Version::parse(&self.raw).is_ok()
    }

    pub fn group_id(&self) -> GroupId {
        self.numbers.group_id()
    }

    /// single line json, mostly for debug output
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl std::str::FromStr for Version {
    type Err = InvalidVersion;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_checked(s)
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Version::new(&s)
    }
}

impl std::ops::Deref for Version {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        matches!(self.cmp(other), Ordering::Equal)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Each tier only applies when both sides have it, otherwise it is skipped.
//
// 1. numbers
// 2. release time (milliseconds)
// 3. suffix
// 4. raw string
//
// Skipping makes this non-transitive across a population where only some
// versions carry a release time or a suffix. Sorting inside a group (same
// numbers) keeps that rare.
impl Ord for Version {
    fn cmp(&self, other: &Version) -> Ordering {

        if self.is_valid() && other.is_valid() {
            if let Some(ret) = eq_to_none(self.numbers.cmp(&other.numbers)) {
                return ret;
            }
        }

        if let (Some(left), Some(right)) = (self.release_time, other.release_time) {
            if let Some(ret) = eq_to_none(left.timestamp_millis().cmp(&right.timestamp_millis())) {
                return ret;
            }
        }

        if !self.suffix.is_empty() && !other.suffix.is_empty() {
            if let Some(ret) = eq_to_none(self.suffix.cmp(&other.suffix)) {
                return ret;
            }
        }

        self.raw.cmp(&other.raw)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
