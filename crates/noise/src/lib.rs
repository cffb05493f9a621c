//! Post-processing layers for composed traffic series.
//!
//! Two operations, both mutating a caller-supplied [`TrafficSeries`]
//! through an explicit `&mut` borrow (the one mutation discipline used
//! throughout):
//!
//! 1. **Anomaly injection** — adds a constant throughput offset over a
//!    strict day window, maintaining the cumulative `thp_a_mbps` column.
//! 2. **Lognormal variation** — derives `thp_var_mbps` (and
//!    `thp_a_var_mbps` when an anomaly exists) from the mean columns,
//!    with a configurable target standard deviation and a hard ceiling.
//!
//! [`TrafficSeries`]: aether_series::TrafficSeries

mod anomaly;
mod error;
mod lognormal;

pub use anomaly::{AnomalyWindow, add_anomaly};
pub use error::NoiseError;
pub use lognormal::add_lognormal;
