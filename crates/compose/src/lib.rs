//! Traffic composition pipeline for the aether generator.
//!
//! Walks an ordered sequence of (pattern, count) entries, renders each
//! day from its named shape in the pattern table, applies per-day trend
//! growth and weekend scaling to a running throughput level, and
//! smooth-concatenates all daily arrays into one time-indexed series.
//!
//! # Day accounting
//!
//! A single day counter threads across all segments: the trend vector is
//! indexed by that counter, not per segment, so a sequence of two weeks
//! followed by five days consumes trend entries 0..19 in order.

mod config;
mod error;
mod segment;

pub use config::ComposeConfig;
pub use error::ComposeError;
pub use segment::{Segment, total_days};

use aether_catalog::{PatternCatalog, PatternKind, is_weekend_pattern, week_cycle};
use aether_series::{DT_DAYS, PatternTable, SAMPLES_PER_DAY, TrafficSeries};
use aether_smooth::splice_onto;
use tracing::debug;

/// Looks up the growth rate for a global day index. A missing trend
/// vector means zero growth everywhere.
fn trend_at(trend: Option<&[f64]>, iday: usize) -> Result<f64, ComposeError> {
    match trend {
        None => Ok(0.0),
        Some(t) => t
            .get(iday)
            .copied()
            .ok_or(ComposeError::TrendIndex {
                index: iday,
                len: t.len(),
            }),
    }
}

/// Scales a daily shape by the day's throughput level.
fn scale_shape(shape: &[f64], level: f64) -> Vec<f64> {
    shape.iter().map(|&v| v * level).collect()
}

/// Composes a traffic series from a sequence of daily/weekly patterns.
///
/// Each entry is classified once against the catalog. Weekly entries
/// render `count` weeks of seven weekday shapes (cycle rotated by the
/// configured week start; Saturday and Sunday scaled by the weekend
/// coefficient). Daily entries render `count` repeats of one shape,
/// scaled by the weekend coefficient iff the pattern name carries the
/// `wknd` prefix. Every rendered day advances the running throughput
/// level by its trend fraction and is spliced onto the accumulated
/// series with `erfc` boundary smoothing.
///
/// The result carries a day-offset axis at the fixed 10-minute step,
/// starting at zero.
///
/// # Errors
///
/// Returns [`ComposeError::UnknownPattern`] for names outside the
/// catalog, [`ComposeError::TrendIndex`] when the trend vector is
/// shorter than the days consumed, and wraps missing pattern columns as
/// [`ComposeError::Series`].
#[tracing::instrument(skip(sequence, table, catalog, config))]
pub fn compose(
    sequence: &[Segment],
    table: &PatternTable,
    catalog: &PatternCatalog,
    config: &ComposeConfig,
) -> Result<TrafficSeries, ComposeError> {
    config.validate()?;

    let cycle = week_cycle(config.week_start());
    let td = config.smoothing_td();
    let trend = config.day_trend();

    let mut acc: Vec<f64> = Vec::new();
    let mut thp = config.initial_thp_mbps();
    let mut iday = 0usize;
    let mut tot_days = 0usize;

    for seg in sequence {
        match catalog.classify(seg.pattern()) {
            PatternKind::Weekly => {
                for _ in 0..seg.count() {
                    for day in cycle {
                        thp += thp * trend_at(trend, iday)?;
                        let mut level = thp;
                        if day.is_weekend() {
                            level *= config.coeff_wknd();
                        }
                        let shape = table.weekly_shape(day, seg.pattern())?;
                        let scaled = scale_shape(shape, level);
                        splice_onto(&mut acc, &scaled, td)?;
                        iday += 1;
                    }
                    tot_days += 7;
                }
                debug!(pattern = seg.pattern(), weeks = seg.count(), "weekly segment appended");
            }
            PatternKind::Daily => {
                let thp_mult = if is_weekend_pattern(seg.pattern()) {
                    config.coeff_wknd()
                } else {
                    1.0
                };
                for _ in 0..seg.count() {
                    thp += thp * trend_at(trend, iday)?;
                    let level = thp * thp_mult;
                    let shape = table.daily_shape(seg.pattern())?;
                    let scaled = scale_shape(shape, level);
                    splice_onto(&mut acc, &scaled, td)?;
                    iday += 1;
                    tot_days += 1;
                }
                debug!(pattern = seg.pattern(), days = seg.count(), "daily segment appended");
            }
            PatternKind::Unknown => {
                return Err(ComposeError::UnknownPattern {
                    name: seg.pattern().to_string(),
                });
            }
        }
    }

    let n_samples = tot_days * SAMPLES_PER_DAY;
    // Table columns are validated to SAMPLES_PER_DAY at insertion.
    debug_assert_eq!(acc.len(), n_samples);
    let t_day: Vec<f64> = (0..n_samples).map(|i| i as f64 * DT_DAYS).collect();

    debug!(tot_days, n_samples, "composition finished");
    Ok(TrafficSeries::new(t_day, acc)?)
}
