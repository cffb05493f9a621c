//! Error types for the aether-smooth crate.

/// Error type for all fallible operations in the aether-smooth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SmoothError {
    /// Returned when both input segments are empty.
    #[error("both input segments are empty")]
    EmptyInput,

    /// Returned when the smoothing time constant is not usable.
    #[error("smoothing time constant must be finite and > 0, got {td}")]
    InvalidTimeConstant {
        /// The rejected time constant.
        td: f64,
    },
}
