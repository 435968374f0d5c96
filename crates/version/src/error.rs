use thiserror::Error;

/// The raw string produced no numeric segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version string: {raw:?}")]
pub struct InvalidVersion {
    pub raw: String,
}
