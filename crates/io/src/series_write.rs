//! CSV writers for traffic series and diurnal curves.

use std::path::Path;

use aether_series::{
    COL_T_DAY, COL_THP, COL_THP_ANOM, COL_THP_ANOM_VAR, COL_THP_VAR, TrafficSeries,
};
use tracing::info;

use crate::error::IoError;

/// Writes a traffic series to CSV.
///
/// The header always carries `t_day` and `thp_mbps`; the anomalous and
/// noisy columns appear only when present on the series, in the fixed
/// order `thp_a_mbps`, `thp_var_mbps`, `thp_a_var_mbps`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] on write failures.
pub fn write_series_csv(path: &Path, series: &TrafficSeries) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![COL_T_DAY, COL_THP];
    if series.anomalous().is_some() {
        header.push(COL_THP_ANOM);
    }
    if series.noisy().is_some() {
        header.push(COL_THP_VAR);
    }
    if series.anomalous_noisy().is_some() {
        header.push(COL_THP_ANOM_VAR);
    }
    writer.write_record(&header)?;

    for i in 0..series.len() {
        let mut row = vec![
            series.t_day()[i].to_string(),
            series.thp()[i].to_string(),
        ];
        if let Some(column) = series.anomalous() {
            row.push(column[i].to_string());
        }
        if let Some(column) = series.noisy() {
            row.push(column[i].to_string());
        }
        if let Some(column) = series.anomalous_noisy() {
            row.push(column[i].to_string());
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    info!(path = %path.display(), n = series.len(), columns = header.len(), "series written");
    Ok(())
}

/// Writes a diurnal mean curve and its realization to CSV with the
/// columns `t_day`, `thp_mean`, `thp_var`.
///
/// # Errors
///
/// Returns [`IoError::LengthMismatch`] if the three columns differ in
/// length, [`IoError::Csv`] or [`IoError::Io`] on write failures.
pub fn write_diurnal_csv(
    path: &Path,
    t_day: &[f64],
    mean: &[f64],
    realization: &[f64],
) -> Result<(), IoError> {
    for (column, name) in [(mean, "thp_mean"), (realization, "thp_var")] {
        if column.len() != t_day.len() {
            return Err(IoError::LengthMismatch {
                expected: t_day.len(),
                got: column.len(),
                field: name.to_string(),
            });
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([COL_T_DAY, "thp_mean", "thp_var"])?;
    for i in 0..t_day.len() {
        writer.write_record([
            t_day[i].to_string(),
            mean[i].to_string(),
            realization[i].to_string(),
        ])?;
    }
    writer.flush()?;
    info!(path = %path.display(), n = t_day.len(), "diurnal curves written");
    Ok(())
}
