//! Error types for the aether-series crate.

/// Error type for all fallible operations in the aether-series crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a required named column is absent from a pattern table.
    #[error("pattern table has no column {column:?}")]
    MissingColumn {
        /// The requested column name.
        column: String,
    },

    /// Returned when an inserted column does not have the fixed per-day
    /// sample count.
    #[error("column {column:?} has {got} samples, expected {expected}")]
    ColumnLength {
        /// The offending column name.
        column: String,
        /// Required sample count.
        expected: usize,
        /// Actual sample count.
        got: usize,
    },

    /// Returned when two series columns have different lengths.
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
