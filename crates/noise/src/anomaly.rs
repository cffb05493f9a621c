//! Additive traffic anomalies over bounded day intervals.

use aether_series::TrafficSeries;
use tracing::debug;

/// A day interval with strict bounds: a sample at day offset `t` is
/// affected iff `start_day < t < end_day`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyWindow {
    start_day: f64,
    end_day: f64,
}

impl AnomalyWindow {
    /// Creates a window from strict day bounds.
    pub fn new(start_day: f64, end_day: f64) -> Self {
        Self { start_day, end_day }
    }

    /// Returns the start bound (exclusive).
    pub fn start_day(&self) -> f64 {
        self.start_day
    }

    /// Returns the end bound (exclusive).
    pub fn end_day(&self) -> f64 {
        self.end_day
    }

    /// Returns `true` if the day offset lies strictly inside the window.
    pub fn contains(&self, t_day: f64) -> bool {
        t_day > self.start_day && t_day < self.end_day
    }
}

/// Adds a constant throughput offset over a day window.
///
/// The anomalous column `thp_a_mbps` is initialized as a copy of the
/// baseline on first use; `amplitude` is then added to every sample
/// strictly inside the window. Repeated calls accumulate onto the
/// anomalous column, never onto the baseline, so overlapping windows
/// stack their amplitudes.
pub fn add_anomaly(series: &mut TrafficSeries, amplitude: f64, window: &AnomalyWindow) {
    let hits: Vec<bool> = series.t_day().iter().map(|&t| window.contains(t)).collect();
    let n_hit = hits.iter().filter(|&&h| h).count();
    let column = series.ensure_anomalous();
    for (v, hit) in column.iter_mut().zip(hits) {
        if hit {
            *v += amplitude;
        }
    }
    debug!(
        amplitude,
        start_day = window.start_day(),
        end_day = window.end_day(),
        n_hit,
        "anomaly added",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Ten samples at one-day spacing, baseline 100.
    fn series() -> TrafficSeries {
        let t: Vec<f64> = (0..10).map(|i| i as f64).collect();
        TrafficSeries::new(t, vec![100.0; 10]).unwrap()
    }

    #[test]
    fn window_bounds_are_strict() {
        let w = AnomalyWindow::new(2.0, 5.0);
        assert!(!w.contains(2.0));
        assert!(w.contains(2.5));
        assert!(w.contains(4.999));
        assert!(!w.contains(5.0));
        assert!(!w.contains(6.0));
    }

    #[test]
    fn first_call_initializes_from_baseline() {
        let mut s = series();
        add_anomaly(&mut s, 20.0, &AnomalyWindow::new(2.0, 5.0));
        let anom = s.anomalous().unwrap();
        // Strict bounds: days 3 and 4 only.
        assert_relative_eq!(anom[2], 100.0);
        assert_relative_eq!(anom[3], 120.0);
        assert_relative_eq!(anom[4], 120.0);
        assert_relative_eq!(anom[5], 100.0);
        // Baseline untouched.
        assert!(s.thp().iter().all(|&v| v == 100.0));
    }

    #[test]
    fn overlapping_anomalies_accumulate() {
        let mut s = series();
        add_anomaly(&mut s, 20.0, &AnomalyWindow::new(1.0, 6.0));
        add_anomaly(&mut s, 5.0, &AnomalyWindow::new(3.0, 8.0));
        let anom = s.anomalous().unwrap();
        assert_relative_eq!(anom[2], 120.0); // first window only
        assert_relative_eq!(anom[4], 125.0); // overlap
        assert_relative_eq!(anom[5], 125.0); // overlap
        assert_relative_eq!(anom[7], 105.0); // second window only
        assert_relative_eq!(anom[0], 100.0); // outside both
    }

    #[test]
    fn negative_amplitude_allowed() {
        let mut s = series();
        add_anomaly(&mut s, -30.0, &AnomalyWindow::new(0.0, 3.0));
        let anom = s.anomalous().unwrap();
        assert_relative_eq!(anom[1], 70.0);
        assert_relative_eq!(anom[2], 70.0);
        assert_relative_eq!(anom[3], 100.0);
    }

    #[test]
    fn empty_window_copies_baseline_only() {
        let mut s = series();
        add_anomaly(&mut s, 50.0, &AnomalyWindow::new(5.0, 5.0));
        assert_eq!(s.anomalous().unwrap(), s.thp());
    }
}
