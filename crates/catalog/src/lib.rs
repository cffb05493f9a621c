//! Pattern catalog for the aether traffic generator.
//!
//! Every entry of a composition sequence names either a *daily* pattern
//! (one 24-hour throughput shape) or a *weekly* pattern (seven shapes, one
//! per weekday). This crate holds the sets of known pattern identifiers,
//! classifies names into one of the two families, and handles the weekday
//! label cycle including rotation by a configurable week-start day.

mod catalog;
mod weekday;

pub use catalog::{PatternCatalog, PatternKind, WEEKEND_PREFIX, is_weekend_pattern};
pub use weekday::{Weekday, week_cycle};
