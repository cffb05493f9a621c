//! Error types for the aether-compose crate.

use aether_series::SeriesError;
use aether_smooth::SmoothError;

/// Error type for all fallible operations in the aether-compose crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ComposeError {
    /// Returned when a sequence entry matches neither catalog set.
    #[error("unknown traffic pattern: {name:?}")]
    UnknownPattern {
        /// The unrecognized pattern name.
        name: String,
    },

    /// Returned when the day trend vector is shorter than the number of
    /// days the sequence consumes.
    #[error("day trend exhausted: day index {index} >= trend length {len}")]
    TrendIndex {
        /// Global day index that could not be served.
        index: usize,
        /// Length of the supplied trend vector.
        len: usize,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the series crate (missing pattern column).
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Wrapped error from the smoothing crate.
    #[error(transparent)]
    Smooth(#[from] SmoothError),
}
