//! The composed traffic series and its derived columns.

use crate::error::SeriesError;

/// Day-offset column name.
pub const COL_T_DAY: &str = "t_day";
/// Baseline mean throughput column name.
pub const COL_THP: &str = "thp_mbps";
/// Anomalous mean throughput column name.
pub const COL_THP_ANOM: &str = "thp_a_mbps";
/// Lognormal-perturbed baseline column name.
pub const COL_THP_VAR: &str = "thp_var_mbps";
/// Lognormal-perturbed anomalous column name.
pub const COL_THP_ANOM_VAR: &str = "thp_a_var_mbps";

/// A time-indexed throughput series.
///
/// Built once by the composer with a day-offset axis and the baseline
/// mean throughput. Post-processing layers append derived columns: the
/// anomaly injector maintains `thp_a_mbps`, the noise layer writes
/// `thp_var_mbps` and (when the anomalous column exists)
/// `thp_a_var_mbps`. Derived columns never replace the mean columns they
/// are computed from.
#[derive(Debug, Clone)]
pub struct TrafficSeries {
    /// Day offsets, uniform step, starting at zero.
    t_day: Vec<f64>,
    /// Baseline mean throughput (Mbps).
    thp: Vec<f64>,
    /// Anomalous mean throughput; baseline plus accumulated anomaly offsets.
    thp_anomalous: Option<Vec<f64>>,
    /// Lognormal realization of the baseline.
    thp_noisy: Option<Vec<f64>>,
    /// Lognormal realization of the anomalous column.
    thp_anomalous_noisy: Option<Vec<f64>>,
}

impl TrafficSeries {
    /// Creates a series from a day-offset axis and a baseline column.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the two columns differ
    /// in length.
    pub fn new(t_day: Vec<f64>, thp: Vec<f64>) -> Result<Self, SeriesError> {
        if thp.len() != t_day.len() {
            return Err(SeriesError::LengthMismatch {
                expected: t_day.len(),
                got: thp.len(),
                field: COL_THP.to_string(),
            });
        }
        Ok(Self {
            t_day,
            thp,
            thp_anomalous: None,
            thp_noisy: None,
            thp_anomalous_noisy: None,
        })
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.t_day.len()
    }

    /// Returns `true` if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.t_day.is_empty()
    }

    /// Returns the day-offset axis.
    pub fn t_day(&self) -> &[f64] {
        &self.t_day
    }

    /// Returns the baseline mean throughput.
    pub fn thp(&self) -> &[f64] {
        &self.thp
    }

    /// Returns the anomalous mean throughput, if any anomaly was injected.
    pub fn anomalous(&self) -> Option<&[f64]> {
        self.thp_anomalous.as_deref()
    }

    /// Returns the lognormal realization of the baseline, if present.
    pub fn noisy(&self) -> Option<&[f64]> {
        self.thp_noisy.as_deref()
    }

    /// Returns the lognormal realization of the anomalous column, if present.
    pub fn anomalous_noisy(&self) -> Option<&[f64]> {
        self.thp_anomalous_noisy.as_deref()
    }

    /// Returns the anomalous column for mutation, initializing it as a
    /// copy of the baseline on first access.
    ///
    /// Subsequent calls return the previously accumulated column, so
    /// repeated anomaly injections stack.
    pub fn ensure_anomalous(&mut self) -> &mut [f64] {
        self.thp_anomalous.get_or_insert_with(|| self.thp.clone())
    }

    /// Sets the lognormal realization of the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the column length does
    /// not match the series length.
    pub fn set_noisy(&mut self, column: Vec<f64>) -> Result<(), SeriesError> {
        self.check_len(column.len(), COL_THP_VAR)?;
        self.thp_noisy = Some(column);
        Ok(())
    }

    /// Sets the lognormal realization of the anomalous column.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the column length does
    /// not match the series length.
    pub fn set_anomalous_noisy(&mut self, column: Vec<f64>) -> Result<(), SeriesError> {
        self.check_len(column.len(), COL_THP_ANOM_VAR)?;
        self.thp_anomalous_noisy = Some(column);
        Ok(())
    }

    fn check_len(&self, got: usize, field: &str) -> Result<(), SeriesError> {
        if got != self.len() {
            return Err(SeriesError::LengthMismatch {
                expected: self.len(),
                got,
                field: field.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> TrafficSeries {
        let t: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
        let thp = vec![90.0; n];
        TrafficSeries::new(t, thp).unwrap()
    }

    #[test]
    fn construction_checks_lengths() {
        let result = TrafficSeries::new(vec![0.0, 0.1], vec![1.0]);
        assert!(matches!(
            result,
            Err(SeriesError::LengthMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn empty_series_allowed() {
        let s = TrafficSeries::new(Vec::new(), Vec::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn derived_columns_absent_initially() {
        let s = series(4);
        assert!(s.anomalous().is_none());
        assert!(s.noisy().is_none());
        assert!(s.anomalous_noisy().is_none());
    }

    #[test]
    fn ensure_anomalous_copies_baseline_once() {
        let mut s = series(3);
        s.ensure_anomalous()[1] += 5.0;
        assert_eq!(s.anomalous().unwrap(), &[90.0, 95.0, 90.0]);
        // Second access must keep the accumulated values.
        s.ensure_anomalous()[1] += 5.0;
        assert_eq!(s.anomalous().unwrap(), &[90.0, 100.0, 90.0]);
        // Baseline stays untouched.
        assert_eq!(s.thp(), &[90.0, 90.0, 90.0]);
    }

    #[test]
    fn set_noisy_validates_length() {
        let mut s = series(3);
        assert!(s.set_noisy(vec![1.0; 2]).is_err());
        assert!(s.set_noisy(vec![1.0; 3]).is_ok());
        assert_eq!(s.noisy().unwrap(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn set_anomalous_noisy_validates_length() {
        let mut s = series(2);
        assert!(s.set_anomalous_noisy(vec![1.0; 5]).is_err());
        assert!(s.set_anomalous_noisy(vec![2.0; 2]).is_ok());
        assert_eq!(s.anomalous_noisy().unwrap(), &[2.0, 2.0]);
    }

    #[test]
    fn column_name_constants() {
        assert_eq!(COL_T_DAY, "t_day");
        assert_eq!(COL_THP, "thp_mbps");
        assert_eq!(COL_THP_ANOM, "thp_a_mbps");
        assert_eq!(COL_THP_VAR, "thp_var_mbps");
        assert_eq!(COL_THP_ANOM_VAR, "thp_a_var_mbps");
    }
}
