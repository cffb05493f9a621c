//! Lognormal variation around mean throughput columns.

use aether_series::TrafficSeries;
use rand::Rng;
use rand_distr::{Distribution, LogNormal};
use tracing::debug;

use crate::error::NoiseError;

/// Draws one lognormal variant of a mean column.
///
/// Per sample with mean `m`, the distribution is parameterized so its
/// expectation is `m` and its standard deviation corresponds to `sigma`:
/// `sigma_log = sqrt(ln((sigma/m)^2 + 1))`, `mu_log = ln(m) -
/// sigma_log^2 / 2`. Draws are clipped to `thp_max`.
fn perturb_column(
    mean: &[f64],
    sigma: f64,
    thp_max: f64,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, NoiseError> {
    // Degenerate contract: sigma == 0 reproduces the mean exactly, with
    // no draw and no clipping.
    if sigma == 0.0 {
        return Ok(mean.to_vec());
    }

    let mut out = Vec::with_capacity(mean.len());
    for (index, &m) in mean.iter().enumerate() {
        if !m.is_finite() || m <= 0.0 {
            return Err(NoiseError::NonPositiveMean { index, value: m });
        }
        let var_log = ((sigma / m).powi(2) + 1.0).ln();
        let mu_log = m.ln() - 0.5 * var_log;
        let dist = LogNormal::new(mu_log, var_log.sqrt()).map_err(|e| {
            NoiseError::Distribution {
                message: e.to_string(),
            }
        })?;
        let draw: f64 = dist.sample(rng);
        out.push(draw.min(thp_max));
    }
    Ok(out)
}

/// Adds lognormal variation columns to a traffic series.
///
/// Always writes `thp_var_mbps` from the baseline; when the anomalous
/// column `thp_a_mbps` exists, additionally writes `thp_a_var_mbps`
/// from it with independent draws. The mean columns are never modified.
///
/// # Errors
///
/// Returns [`NoiseError::InvalidSigma`] for a negative or non-finite
/// sigma, [`NoiseError::InvalidThpMax`] for an unusable ceiling, and
/// [`NoiseError::NonPositiveMean`] if any mean sample cannot
/// parameterize a lognormal.
#[tracing::instrument(skip(series, rng))]
pub fn add_lognormal(
    series: &mut TrafficSeries,
    sigma: f64,
    thp_max: f64,
    rng: &mut impl Rng,
) -> Result<(), NoiseError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(NoiseError::InvalidSigma { sigma });
    }
    if !thp_max.is_finite() || thp_max <= 0.0 {
        return Err(NoiseError::InvalidThpMax { thp_max });
    }

    let noisy = perturb_column(series.thp(), sigma, thp_max, rng)?;
    let anomalous_noisy = match series.anomalous() {
        Some(column) => Some(perturb_column(column, sigma, thp_max, rng)?),
        None => None,
    };

    series.set_noisy(noisy)?;
    if let Some(column) = anomalous_noisy {
        series.set_anomalous_noisy(column)?;
    }

    debug!(sigma, thp_max, n = series.len(), "lognormal variation added");
    Ok(())
}
