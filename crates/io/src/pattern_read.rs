//! CSV reader for pattern tables.

use std::path::Path;

use aether_series::PatternTable;
use tracing::info;

use crate::error::IoError;

/// Reads a pattern table from a CSV file.
///
/// The header row names the columns (e.g. `thp_laner12`,
/// `thp_mon_xu17_residential`); every data row holds one numeric sample
/// per column. Column lengths are validated against the fixed per-day
/// sample count when the table is assembled.
///
/// # Errors
///
/// Returns [`IoError::Csv`] on malformed CSV (including ragged rows),
/// [`IoError::Parse`] on non-numeric fields, and [`IoError::Series`] if
/// a column does not hold exactly one day of samples.
pub fn read_pattern_csv(path: &Path) -> Result<PatternTable, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        for (col_index, field) in record.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| IoError::Parse {
                row: row_index + 1,
                column: headers.get(col_index).unwrap_or("").to_string(),
                value: field.to_string(),
            })?;
            columns[col_index].push(value);
        }
    }

    let mut table = PatternTable::new();
    for (name, samples) in headers.iter().zip(columns) {
        table.insert_column(name, samples)?;
    }

    info!(path = %path.display(), n_columns = table.n_columns(), "pattern table loaded");
    Ok(table)
}
