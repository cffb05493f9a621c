//! Error types for the aether-io crate.

use aether_series::SeriesError;

/// Error type for all fallible operations in the aether-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Wrapped CSV reader/writer error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapped filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Returned when a CSV field is not a number.
    #[error("row {row}, column {column:?}: cannot parse {value:?} as a number")]
    Parse {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Column name from the header.
        column: String,
        /// The offending field text.
        value: String,
    },

    /// Wrapped error from the series crate (column length validation).
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Returned when paired output columns differ in length.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched column.
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse() {
        let e = IoError::Parse {
            row: 3,
            column: "thp_laner12".to_string(),
            value: "abc".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("thp_laner12"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn from_series_error() {
        let inner = SeriesError::ColumnLength {
            column: "thp_x".to_string(),
            expected: 144,
            got: 10,
        };
        let e: IoError = inner.into();
        assert!(matches!(e, IoError::Series(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IoError>();
    }
}
