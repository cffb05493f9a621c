//! Configuration for the traffic composer.

use aether_catalog::Weekday;

use crate::error::ComposeError;

/// Configuration for [`compose`](crate::compose).
///
/// `initial_thp_mbps` is the throughput level before the first day's
/// trend step. It is a starting level only, not an enforced ceiling on
/// the output; clipping ceilings exist solely in the noise and diurnal
/// layers.
#[derive(Debug, Clone)]
pub struct ComposeConfig {
    /// Throughput level at day zero (Mbps), before trend growth.
    initial_thp_mbps: f64,
    /// Weekend traffic multiplier.
    coeff_wknd: f64,
    /// First day of the rendered week cycle (None = Monday).
    week_start: Option<Weekday>,
    /// Per-day fractional growth rates, indexed by global day counter
    /// (None = no growth).
    day_trend: Option<Vec<f64>>,
    /// Smoothing time constant in sample-index units.
    smoothing_td: f64,
}

impl ComposeConfig {
    /// Creates a configuration with the conventional defaults: 90 Mbps
    /// starting level, weekend coefficient 0.8, Monday week start, no
    /// trend, smoothing time constant 2.
    pub fn new() -> Self {
        Self {
            initial_thp_mbps: 90.0,
            coeff_wknd: 0.8,
            week_start: None,
            day_trend: None,
            smoothing_td: 2.0,
        }
    }

    /// Sets the starting throughput level (Mbps).
    pub fn with_initial_thp_mbps(mut self, thp: f64) -> Self {
        self.initial_thp_mbps = thp;
        self
    }

    /// Sets the weekend traffic multiplier.
    pub fn with_coeff_wknd(mut self, coeff: f64) -> Self {
        self.coeff_wknd = coeff;
        self
    }

    /// Sets the first day of the rendered week cycle.
    pub fn with_week_start(mut self, day: Weekday) -> Self {
        self.week_start = Some(day);
        self
    }

    /// Sets the per-day fractional growth rates.
    ///
    /// The vector is indexed by the global day counter across all
    /// segments, so it must cover at least the total number of days the
    /// sequence consumes.
    pub fn with_day_trend(mut self, trend: Vec<f64>) -> Self {
        self.day_trend = Some(trend);
        self
    }

    /// Sets the smoothing time constant (sample-index units).
    pub fn with_smoothing_td(mut self, td: f64) -> Self {
        self.smoothing_td = td;
        self
    }

    // --- Accessors ---

    /// Returns the starting throughput level (Mbps).
    pub fn initial_thp_mbps(&self) -> f64 {
        self.initial_thp_mbps
    }

    /// Returns the weekend traffic multiplier.
    pub fn coeff_wknd(&self) -> f64 {
        self.coeff_wknd
    }

    /// Returns the configured week start, if any.
    pub fn week_start(&self) -> Option<Weekday> {
        self.week_start
    }

    /// Returns the per-day trend vector, if any.
    pub fn day_trend(&self) -> Option<&[f64]> {
        self.day_trend.as_deref()
    }

    /// Returns the smoothing time constant.
    pub fn smoothing_td(&self) -> f64 {
        self.smoothing_td
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if !self.initial_thp_mbps.is_finite() || self.initial_thp_mbps <= 0.0 {
            return Err(ComposeError::InvalidConfig {
                reason: format!(
                    "initial_thp_mbps must be finite and > 0, got {}",
                    self.initial_thp_mbps
                ),
            });
        }
        if !self.coeff_wknd.is_finite() || self.coeff_wknd < 0.0 {
            return Err(ComposeError::InvalidConfig {
                reason: format!("coeff_wknd must be finite and >= 0, got {}", self.coeff_wknd),
            });
        }
        if !self.smoothing_td.is_finite() || self.smoothing_td <= 0.0 {
            return Err(ComposeError::InvalidConfig {
                reason: format!(
                    "smoothing_td must be finite and > 0, got {}",
                    self.smoothing_td
                ),
            });
        }
        if let Some(trend) = &self.day_trend {
            for (i, &g) in trend.iter().enumerate() {
                if !g.is_finite() {
                    return Err(ComposeError::InvalidConfig {
                        reason: format!("day trend at index {i} is not finite: {g}"),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self::new()
    }
}
