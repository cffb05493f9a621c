use std::path::PathBuf;

use serde::Deserialize;

/// Top-level aether configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AetherConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Composition settings.
    pub compose: ComposeToml,

    /// Anomaly windows, applied in order.
    #[serde(default)]
    pub anomaly: Vec<AnomalyToml>,

    /// Lognormal noise settings (absent = no noise columns).
    #[serde(default)]
    pub noise: Option<NoiseToml>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Path to the pattern-table CSV.
    pub patterns: Option<PathBuf>,
    /// Path for the output series CSV.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeToml {
    /// Ordered composition sequence.
    pub sequence: Vec<SegmentToml>,
    #[serde(default = "default_initial_thp_mbps")]
    pub initial_thp_mbps: f64,
    #[serde(default = "default_coeff_wknd")]
    pub coeff_wknd: f64,
    /// Week start offset (0 = Monday .. 6 = Sunday).
    #[serde(default)]
    pub week_start: Option<u8>,
    /// Explicit per-day growth fractions; overrides `annual_growth`.
    #[serde(default)]
    pub day_trend: Option<Vec<f64>>,
    /// Annual growth rate, expanded to a uniform per-day trend over the
    /// whole sequence.
    #[serde(default)]
    pub annual_growth: Option<f64>,
    #[serde(default = "default_smoothing_td")]
    pub smoothing_td: f64,
}

fn default_initial_thp_mbps() -> f64 {
    90.0
}
fn default_coeff_wknd() -> f64 {
    0.8
}
fn default_smoothing_td() -> f64 {
    2.0
}

/// One composition-sequence entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentToml {
    pub pattern: String,
    pub count: usize,
}

/// One anomaly window.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnomalyToml {
    pub amplitude: f64,
    pub start_day: f64,
    pub end_day: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseToml {
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    #[serde(default = "default_thp_max")]
    pub thp_max: f64,
}

fn default_sigma() -> f64 {
    0.1
}
fn default_thp_max() -> f64 {
    300.0
}
