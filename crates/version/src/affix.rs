use serde::{Deserialize, Serialize};

/// text wrapper around the non-numeric parts of a version
/// an empty value means "not present"
macro_rules! affix {
    ( $(#[$meta:meta])* $name:ident ) => {

        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    }
}

affix!(
    /// Text before the numeric segments, `v` in `v1.2.3`
    VersionPrefix
);

affix!(
    /// Text after the numeric segments, `-beta1` in `1.2.3-beta1`
    ///
    /// Orders bytewise: `-alpha < -beta < -rc1 < -rc2`
    VersionSuffix
);
