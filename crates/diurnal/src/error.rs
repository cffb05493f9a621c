//! Error types for the aether-diurnal crate.

/// Error type for all fallible operations in the aether-diurnal crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DiurnalError {
    /// Returned when the time axis is empty.
    #[error("time axis is empty")]
    EmptyTime,

    /// Returned when the clipping ceiling is not usable.
    #[error("thp_max must be finite and > 0, got {thp_max}")]
    InvalidThpMax {
        /// The rejected ceiling.
        thp_max: f64,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_time() {
        assert_eq!(DiurnalError::EmptyTime.to_string(), "time axis is empty");
    }

    #[test]
    fn display_invalid_thp_max() {
        let e = DiurnalError::InvalidThpMax { thp_max: -5.0 };
        assert!(e.to_string().contains("-5"));
    }

    #[test]
    fn display_distribution() {
        let e = DiurnalError::Distribution {
            message: "sigma out of range".to_string(),
        };
        assert!(e.to_string().contains("sigma out of range"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DiurnalError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DiurnalError>();
    }
}
