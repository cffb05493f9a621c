//! Error types for the aether-noise crate.

use aether_series::SeriesError;

/// Error type for all fallible operations in the aether-noise crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NoiseError {
    /// Returned when sigma is negative or not finite.
    #[error("sigma must be finite and >= 0, got {sigma}")]
    InvalidSigma {
        /// The rejected standard deviation.
        sigma: f64,
    },

    /// Returned when the clipping ceiling is not usable.
    #[error("thp_max must be finite and > 0, got {thp_max}")]
    InvalidThpMax {
        /// The rejected ceiling.
        thp_max: f64,
    },

    /// Returned when a mean sample is non-positive or not finite; the
    /// lognormal parameterization requires a positive mean.
    #[error("mean throughput at index {index} must be finite and > 0, got {value}")]
    NonPositiveMean {
        /// Sample index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a lognormal distribution cannot be constructed.
    ///
    /// The `message` field is a `String` because rand_distr errors do
    /// not implement `Clone`.
    #[error("lognormal construction failed: {message}")]
    Distribution {
        /// Description of the failure.
        message: String,
    },

    /// Wrapped error from the series crate.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
