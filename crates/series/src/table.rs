//! Named daily throughput shapes keyed by column name.

use std::collections::BTreeMap;

use aether_catalog::Weekday;

use crate::SAMPLES_PER_DAY;
use crate::error::SeriesError;

/// Column name for a daily pattern: `thp_<pattern>`.
pub fn daily_column_name(pattern: &str) -> String {
    format!("thp_{pattern}")
}

/// Column name for one weekday of a weekly pattern:
/// `thp_<weekday>_<pattern>`.
pub fn weekly_column_name(weekday: Weekday, pattern: &str) -> String {
    format!("thp_{}_{pattern}", weekday.label())
}

/// A table of named daily throughput shapes.
///
/// Every column holds exactly [`SAMPLES_PER_DAY`] samples (one value per
/// 10-minute interval of a single day), enforced at insertion so the
/// composer can rely on uniform day lengths. Lookup by pattern goes
/// through [`daily_shape`](PatternTable::daily_shape) and
/// [`weekly_shape`](PatternTable::weekly_shape), which build the column
/// name and turn an absent key into [`SeriesError::MissingColumn`].
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    columns: BTreeMap<String, Vec<f64>>,
}

impl PatternTable {
    /// Creates an empty pattern table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a named column, replacing any previous column of that name.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ColumnLength`] if `samples` does not hold
    /// exactly [`SAMPLES_PER_DAY`] values.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        samples: Vec<f64>,
    ) -> Result<(), SeriesError> {
        let name = name.into();
        if samples.len() != SAMPLES_PER_DAY {
            return Err(SeriesError::ColumnLength {
                column: name,
                expected: SAMPLES_PER_DAY,
                got: samples.len(),
            });
        }
        self.columns.insert(name, samples);
        Ok(())
    }

    /// Looks up a raw column by its full name.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::MissingColumn`] if the column is absent.
    pub fn column(&self, name: &str) -> Result<&[f64], SeriesError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SeriesError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Looks up the shape of a daily pattern (`thp_<pattern>`).
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::MissingColumn`] if the column is absent.
    pub fn daily_shape(&self, pattern: &str) -> Result<&[f64], SeriesError> {
        self.column(&daily_column_name(pattern))
    }

    /// Looks up one weekday's shape of a weekly pattern
    /// (`thp_<weekday>_<pattern>`).
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::MissingColumn`] if the column is absent.
    pub fn weekly_shape(&self, weekday: Weekday, pattern: &str) -> Result<&[f64], SeriesError> {
        self.column(&weekly_column_name(weekday, pattern))
    }

    /// Returns the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over column names in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(value: f64) -> Vec<f64> {
        vec![value; SAMPLES_PER_DAY]
    }

    #[test]
    fn column_names_built_from_pattern() {
        assert_eq!(daily_column_name("laner12"), "thp_laner12");
        assert_eq!(
            weekly_column_name(Weekday::Mon, "xu17_residential"),
            "thp_mon_xu17_residential",
        );
        assert_eq!(weekly_column_name(Weekday::Sun, "italy_jan"), "thp_sun_italy_jan");
    }

    #[test]
    fn insert_and_fetch_daily() {
        let mut table = PatternTable::new();
        table.insert_column("thp_laner12", shape(2.5)).unwrap();
        let col = table.daily_shape("laner12").unwrap();
        assert_eq!(col.len(), SAMPLES_PER_DAY);
        assert_eq!(col[0], 2.5);
    }

    #[test]
    fn insert_and_fetch_weekly() {
        let mut table = PatternTable::new();
        table.insert_column("thp_sat_xu17", shape(1.0)).unwrap();
        assert!(table.weekly_shape(Weekday::Sat, "xu17").is_ok());
        assert!(matches!(
            table.weekly_shape(Weekday::Sun, "xu17"),
            Err(SeriesError::MissingColumn { .. })
        ));
    }

    #[test]
    fn wrong_length_rejected() {
        let mut table = PatternTable::new();
        let result = table.insert_column("thp_short", vec![1.0; 10]);
        match result {
            Err(SeriesError::ColumnLength { expected, got, column }) => {
                assert_eq!(expected, SAMPLES_PER_DAY);
                assert_eq!(got, 10);
                assert_eq!(column, "thp_short");
            }
            other => panic!("expected ColumnLength, got {other:?}"),
        }
        assert!(table.is_empty());
    }

    #[test]
    fn missing_column_names_the_key() {
        let table = PatternTable::new();
        let err = table.daily_shape("earth12").unwrap_err();
        assert!(err.to_string().contains("thp_earth12"));
    }

    #[test]
    fn insert_replaces_existing() {
        let mut table = PatternTable::new();
        table.insert_column("thp_earth12", shape(1.0)).unwrap();
        table.insert_column("thp_earth12", shape(9.0)).unwrap();
        assert_eq!(table.n_columns(), 1);
        assert_eq!(table.daily_shape("earth12").unwrap()[0], 9.0);
    }

    #[test]
    fn column_names_sorted() {
        let mut table = PatternTable::new();
        table.insert_column("thp_b", shape(0.0)).unwrap();
        table.insert_column("thp_a", shape(0.0)).unwrap();
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, ["thp_a", "thp_b"]);
    }
}
