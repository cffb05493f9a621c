//! Named sets of known daily and weekly traffic patterns.

use std::collections::BTreeSet;

/// Prefix marking daily patterns measured on weekend days.
///
/// Daily pattern names starting with this prefix receive the weekend
/// throughput multiplier during composition.
pub const WEEKEND_PREFIX: &str = "wknd";

/// Returns `true` if a daily pattern name carries the weekend prefix.
pub fn is_weekend_pattern(name: &str) -> bool {
    name.starts_with(WEEKEND_PREFIX)
}

/// Classification of a composition-sequence entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// The name refers to a single-day throughput shape.
    Daily,
    /// The name refers to a family of seven per-weekday shapes.
    Weekly,
    /// The name matches neither catalog set.
    Unknown,
}

/// Named sets of known daily and weekly pattern identifiers.
///
/// The catalog is static configuration: it only drives dispatch between
/// the daily and weekly composition branches. The actual throughput
/// shapes live in a `PatternTable` supplied alongside it.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    daily: BTreeSet<String>,
    weekly: BTreeSet<String>,
}

/// Daily pattern identifiers from the empirical literature sources.
const DAILY_PATTERNS: &[&str] = &[
    "laner12",
    "earth12",
    "feknous14_orange_ds_fixed",
    "feknous14_orange_ds_mobile",
    "feknous14_orange_us_fixed",
    "feknous14_orange_us_mobile",
    "xu17",
    "wkdy_trinh17_1",
    "wkdy_trinh17_2",
    "wknd_trinh17_1",
    "wknd_trinh17_2",
    "wknd_feldmann_isp_ce_feb22",
    "wkdy_feldmann_isp_ce_mar25",
    "wkdy_moreira_pre_lock_feb19",
    "wkdy_moreira_pre_lock_may19",
    "wkdy_moreira_pre_lock_jul19",
    "wkdy_moreira_pre_lock_oct19",
    "wknd_moreira_pre_lock_feb19",
    "wknd_moreira_pre_lock_may19",
    "wknd_moreira_pre_lock_jul19",
    "wknd_moreira_pre_lock_oct19",
    "wkdy_moreira_lock_mar20",
    "wkdy_moreira_lock_apr20",
    "wkdy_moreira_lock_may20",
    "wkdy_moreira_lock_jun20",
    "wknd_moreira_lock_mar20",
    "wknd_moreira_lock_apr20",
    "wknd_moreira_lock_may20",
    "wknd_moreira_lock_jun20",
];

/// Weekly pattern identifiers from the empirical literature sources.
const WEEKLY_PATTERNS: &[&str] = &[
    "xu17",
    "xu17_residential",
    "xu17_office",
    "xu17_transport",
    "xu17_entertainment",
    "italy_jan",
    "italy_mar",
    "seoul_jan",
    "seoul_mar",
    "feldmann_isp_ce_mar",
    "feldmann_isp_ce_apr",
    "feldmann_isp_ce_jun",
];

impl PatternCatalog {
    /// Creates a catalog from explicit daily and weekly name sets.
    pub fn new<D, W>(daily: D, weekly: W) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            daily: daily.into_iter().map(Into::into).collect(),
            weekly: weekly.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the standard catalog of all known empirical patterns.
    pub fn standard() -> Self {
        Self::new(DAILY_PATTERNS.iter().copied(), WEEKLY_PATTERNS.iter().copied())
    }

    /// Classifies a pattern name.
    ///
    /// Weekly membership is checked first; a name present in both sets
    /// (e.g. `xu17`) dispatches to the weekly branch.
    pub fn classify(&self, name: &str) -> PatternKind {
        if self.weekly.contains(name) {
            PatternKind::Weekly
        } else if self.daily.contains(name) {
            PatternKind::Daily
        } else {
            PatternKind::Unknown
        }
    }

}
