//! Error types.

/// Reasons an orbital element edit is rejected. A rejected edit leaves the
/// element store untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementError {
    /// Semi-major axis must be strictly positive.
    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemimajorAxis(f64),

    /// Semi-major axis so small or large that the orbit has no usable period.
    #[error("semi-major axis {sma} gives no finite orbital period (mu = {mu})")]
    DegenerateOrbit { sma: f64, mu: f64 },

    /// NaN or infinite input.
    #[error("{element} must be finite, got {value}")]
    NonFinite { element: &'static str, value: f64 },
}

/// Errors that can occur when loading or saving a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
