use version::Version;

/// Whether a range boundary is itself part of the range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InclusionPolicy {
    /// same as [InclusionPolicy::Include]
    #[default]
    Unspecified,
    Include,
    Exclude,
}

impl InclusionPolicy {
    pub fn includes_boundary(self) -> bool {
        !matches!(self, Self::Exclude)
    }
}

/// One end of a range query
#[derive(Debug, Clone, Copy)]
pub struct Bound<'a> {
    pub version: &'a Version,
    pub policy: InclusionPolicy,
}

impl<'a> Bound<'a> {

    pub fn new(version: &'a Version, policy: InclusionPolicy) -> Self {
        Self { version, policy }
    }

    pub fn include(version: &'a Version) -> Self {
        Self::new(version, InclusionPolicy::Include)
    }

    pub fn exclude(version: &'a Version) -> Self {
        Self::new(version, InclusionPolicy::Exclude)
    }

    /// `v` is on the upper side of this bound, used for range starts
    pub fn admits_above(&self, v: &Version) -> bool {
        if self.policy.includes_boundary() {
            v >= self.version
        } else {
            v > self.version
        }
    }

    /// `v` is on the lower side of this bound, used for range ends
    pub fn admits_below(&self, v: &Version) -> bool {
        if self.policy.includes_boundary() {
            v <= self.version
        } else {
            v < self.version
        }
    }
}

impl<'a> From<(&'a Version, InclusionPolicy)> for Bound<'a> {
    fn from((version, policy): (&'a Version, InclusionPolicy)) -> Self {
        Self::new(version, policy)
    }
}

impl<'a> From<&'a Version> for Bound<'a> {
    fn from(version: &'a Version) -> Self {
        Self::new(version, InclusionPolicy::Unspecified)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn boundaries() {
        let one = version::parse("1.0.0");
        let two = version::parse("2.0.0");

        assert!(Bound::include(&one).admits_above(&one));
        assert!(!Bound::exclude(&one).admits_above(&one));
        assert!(Bound::exclude(&one).admits_above(&two));
        assert!(!Bound::include(&two).admits_above(&one));

        assert!(Bound::include(&two).admits_below(&two));
        assert!(!Bound::exclude(&two).admits_below(&two));
        assert!(Bound::exclude(&two).admits_below(&one));

        // unspecified acts as include
        let b: Bound = (&one, InclusionPolicy::Unspecified).into();
        assert!(b.admits_above(&one));
        assert!(b.admits_below(&one));
        assert_eq!(Bound::from(&one).policy, InclusionPolicy::default());
    }
}
