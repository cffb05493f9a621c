//! Periodic mean-throughput model for the aether traffic generator.
//!
//! Produces an area-type dependent diurnal mean curve (a constant term
//! plus up to three sinusoidal harmonics at 24, 12 and 8 hour cycles,
//! normalized to a unit peak) and one lognormal-perturbed realization of
//! it, clipped to a ceiling. Used for synthetic single-area generation,
//! independently of the pattern composer.

mod area;
mod error;

pub use area::{AreaProfile, AreaType};
pub use error::DiurnalError;

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, LogNormal};
use tracing::debug;

/// The noiseless mean curve and its stochastic realization.
#[derive(Debug, Clone)]
pub struct DiurnalCurves {
    mean: Vec<f64>,
    realization: Vec<f64>,
}

impl DiurnalCurves {
    /// Returns the normalized mean curve (peak exactly 1.0).
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Returns the clipped lognormal realization.
    pub fn realization(&self) -> &[f64] {
        &self.realization
    }

    /// Returns the number of samples in both curves.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Returns `true` if the curves are empty.
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Consumes self and returns `(mean, realization)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.mean, self.realization)
    }
}

/// Generates the diurnal mean-throughput curve and one lognormal
/// realization over the time axis `t` (in days).
///
/// The mean is normalized by its own maximum so its peak is exactly 1.0.
/// Each realization sample is drawn from a lognormal whose expectation
/// equals the mean value at that point (log-mean `ln(m) - sigma^2/2`)
/// with the area's fixed noise scale divided by 10 as the
/// underlying-normal sigma, then clipped to `thp_max`. Draws are
/// independent per sample; there is no temporal autocorrelation in the
/// noise.
///
/// # Errors
///
/// Returns [`DiurnalError::EmptyTime`] for an empty time axis and
/// [`DiurnalError::InvalidThpMax`] for a non-finite or non-positive
/// ceiling.
pub fn diurnal_throughput(
    t: &[f64],
    area: AreaType,
    thp_max: f64,
    rng: &mut impl Rng,
) -> Result<DiurnalCurves, DiurnalError> {
    if t.is_empty() {
        return Err(DiurnalError::EmptyTime);
    }
    if !thp_max.is_finite() || thp_max <= 0.0 {
        return Err(DiurnalError::InvalidThpMax { thp_max });
    }

    let profile = area.profile();

    // Harmonic k has a period of 24/(k+1) hours; t is in days.
    let mut mean: Vec<f64> = t
        .iter()
        .map(|&ti| {
            let mut v = profile.amplitudes[0];
            for (k, &phase) in profile.phases.iter().enumerate() {
                let omega = 24.0 * (k + 1) as f64 * PI / 12.0;
                v += profile.amplitudes[k + 1] * (omega * ti + phase).sin();
            }
            v
        })
        .collect();

    let peak = mean.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Every profile's constant term exceeds its summed harmonic
    // amplitudes, so the peak is strictly positive.
    debug_assert!(peak > 0.0);
    for v in &mut mean {
        *v /= peak;
    }

    let sigma = profile.noise_scale / 10.0;
    let mut realization = Vec::with_capacity(mean.len());
    for &m in &mean {
        let mu = m.ln() - 0.5 * sigma * sigma;
        let dist = LogNormal::new(mu, sigma).map_err(|e| DiurnalError::Distribution {
            message: e.to_string(),
        })?;
        let draw: f64 = dist.sample(rng);
        realization.push(draw.min(thp_max));
    }

    debug!(?area, n = t.len(), sigma, "diurnal curves generated");
    Ok(DiurnalCurves { mean, realization })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// One week of 10-minute samples in day units.
    fn week_axis() -> Vec<f64> {
        let dt = 10.0 / (60.0 * 24.0);
        (0..7 * 144).map(|i| i as f64 * dt).collect()
    }

    #[test]
    fn empty_time_axis_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = diurnal_throughput(&[], AreaType::Average, 10.0, &mut rng);
        assert!(matches!(result, Err(DiurnalError::EmptyTime)));
    }

    #[test]
    fn invalid_thp_max_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = week_axis();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = diurnal_throughput(&t, AreaType::Average, bad, &mut rng);
            assert!(
                matches!(result, Err(DiurnalError::InvalidThpMax { .. })),
                "thp_max {bad} accepted",
            );
        }
    }

    #[test]
    fn lengths_match_time_axis() {
        let mut rng = StdRng::seed_from_u64(2);
        let t = week_axis();
        let curves = diurnal_throughput(&t, AreaType::Park, 10.0, &mut rng).unwrap();
        assert_eq!(curves.len(), t.len());
        assert_eq!(curves.mean().len(), curves.realization().len());
    }

    #[test]
    fn mean_peak_is_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let t = week_axis();
        for area in [AreaType::Park, AreaType::Campus, AreaType::Cbd, AreaType::Average] {
            let curves = diurnal_throughput(&t, area, 10.0, &mut rng).unwrap();
            let peak = curves.mean().iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert_relative_eq!(peak, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn mean_is_positive_everywhere() {
        let mut rng = StdRng::seed_from_u64(4);
        let t = week_axis();
        for area in [AreaType::Park, AreaType::Campus, AreaType::Cbd, AreaType::Average] {
            let curves = diurnal_throughput(&t, area, 10.0, &mut rng).unwrap();
            assert!(curves.mean().iter().all(|&v| v > 0.0), "{area:?} mean dips to zero");
        }
    }

    #[test]
    fn realization_clipped_to_thp_max() {
        let mut rng = StdRng::seed_from_u64(5);
        let t = week_axis();
        // A tight ceiling guarantees some draws would exceed it.
        let thp_max = 0.9;
        let curves = diurnal_throughput(&t, AreaType::Campus, thp_max, &mut rng).unwrap();
        assert!(curves.realization().iter().all(|&v| v <= thp_max));
        assert!(curves.realization().iter().any(|&v| v == thp_max));
    }

    #[test]
    fn same_seed_reproduces_realization() {
        let t = week_axis();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let c1 = diurnal_throughput(&t, AreaType::Cbd, 10.0, &mut rng1).unwrap();
        let c2 = diurnal_throughput(&t, AreaType::Cbd, 10.0, &mut rng2).unwrap();
        assert_eq!(c1.realization(), c2.realization());
    }

    #[test]
    fn mean_is_deterministic() {
        let t = week_axis();
        let mut rng1 = StdRng::seed_from_u64(1);
        let mut rng2 = StdRng::seed_from_u64(99);
        let c1 = diurnal_throughput(&t, AreaType::Average, 10.0, &mut rng1).unwrap();
        let c2 = diurnal_throughput(&t, AreaType::Average, 10.0, &mut rng2).unwrap();
        assert_eq!(c1.mean(), c2.mean());
    }

    #[test]
    fn mean_has_daily_period() {
        // The harmonics are all multiples of one cycle per day, so the
        // mean repeats exactly after 144 samples.
        let mut rng = StdRng::seed_from_u64(6);
        let t = week_axis();
        let curves = diurnal_throughput(&t, AreaType::Average, 10.0, &mut rng).unwrap();
        let mean = curves.mean();
        for i in 0..144 {
            assert_relative_eq!(mean[i], mean[i + 144], epsilon = 1e-9);
        }
    }

    #[test]
    fn realization_tracks_mean_on_average() {
        // The lognormal is parameterized so its expectation equals the
        // mean; over a long axis the sample average stays close.
        let dt = 10.0 / (60.0 * 24.0);
        let t: Vec<f64> = (0..100 * 144).map(|i| i as f64 * dt).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let curves = diurnal_throughput(&t, AreaType::Average, 100.0, &mut rng).unwrap();
        let mean_avg: f64 = curves.mean().iter().sum::<f64>() / t.len() as f64;
        let real_avg: f64 = curves.realization().iter().sum::<f64>() / t.len() as f64;
        assert!(
            (mean_avg - real_avg).abs() / mean_avg < 0.01,
            "realization average {real_avg} drifts from mean average {mean_avg}",
        );
    }
}
