//! Tabular data model for the aether traffic generator.
//!
//! Two structures live here: the [`PatternTable`] input side (named
//! fixed-length daily throughput shapes, addressed through typed
//! accessors so an unknown column is a typed error) and the
//! [`TrafficSeries`] output side (a day-offset axis plus the baseline
//! throughput column and the optional anomaly/noise columns layered on
//! top of it).

mod error;
mod series;
mod table;

pub use error::SeriesError;
pub use series::{
    COL_T_DAY, COL_THP, COL_THP_ANOM, COL_THP_ANOM_VAR, COL_THP_VAR, TrafficSeries,
};
pub use table::{PatternTable, daily_column_name, weekly_column_name};

/// Samples per day at the fixed 10-minute resolution.
pub const SAMPLES_PER_DAY: usize = 144;

/// The 10-minute sampling step expressed as a fraction of a day.
pub const DT_DAYS: f64 = 10.0 / (60.0 * 24.0);
