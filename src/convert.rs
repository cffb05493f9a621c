//! Conversion from parsed TOML settings into library configuration types.

use anyhow::{Context, Result, bail};

use aether_catalog::{PatternCatalog, Weekday};
use aether_compose::{ComposeConfig, Segment, total_days};

use crate::config::{ComposeToml, SegmentToml};

pub fn build_segments(entries: &[SegmentToml]) -> Vec<Segment> {
    entries
        .iter()
        .map(|entry| Segment::new(entry.pattern.clone(), entry.count))
        .collect()
}

pub fn build_compose_config(
    compose: &ComposeToml,
    segments: &[Segment],
    catalog: &PatternCatalog,
) -> Result<ComposeConfig> {
    let mut config = ComposeConfig::new()
        .with_initial_thp_mbps(compose.initial_thp_mbps)
        .with_coeff_wknd(compose.coeff_wknd)
        .with_smoothing_td(compose.smoothing_td);

    if let Some(offset) = compose.week_start {
        let Some(weekday) = Weekday::from_offset(offset) else {
            bail!("week_start must be in 0..=6, got {offset}");
        };
        config = config.with_week_start(weekday);
    }

    if let Some(trend) = &compose.day_trend {
        config = config.with_day_trend(trend.clone());
    } else if let Some(annual) = compose.annual_growth {
        let n_days = total_days(segments, catalog)
            .context("resolving sequence length for annual_growth")?;
        config = config.with_day_trend(vec![annual / 365.0; n_days]);
    }

    config.validate().context("invalid compose settings")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toml_compose(week_start: Option<u8>, annual_growth: Option<f64>) -> ComposeToml {
        ComposeToml {
            sequence: vec![
                SegmentToml {
                    pattern: "wkdy_trinh17_1".into(),
                    count: 3,
                },
                SegmentToml {
                    pattern: "xu17_residential".into(),
                    count: 1,
                },
            ],
            initial_thp_mbps: 100.0,
            coeff_wknd: 0.75,
            week_start,
            day_trend: None,
            annual_growth,
            smoothing_td: 2.0,
        }
    }

    #[test]
    fn week_start_offset_maps_to_weekday() {
        let catalog = PatternCatalog::standard();
        let compose = toml_compose(Some(6), None);
        let segments = build_segments(&compose.sequence);
        let config = build_compose_config(&compose, &segments, &catalog).unwrap();
        assert_eq!(config.week_start(), Some(Weekday::Sun));
    }

    #[test]
    fn week_start_out_of_range_fails() {
        let catalog = PatternCatalog::standard();
        let compose = toml_compose(Some(7), None);
        let segments = build_segments(&compose.sequence);
        assert!(build_compose_config(&compose, &segments, &catalog).is_err());
    }

    #[test]
    fn annual_growth_expands_over_sequence_days() {
        let catalog = PatternCatalog::standard();
        let compose = toml_compose(None, Some(0.365));
        let segments = build_segments(&compose.sequence);
        let config = build_compose_config(&compose, &segments, &catalog).unwrap();
        // Three daily days plus one week: 10 days.
        let trend = config.day_trend().unwrap();
        assert_eq!(trend.len(), 10);
        assert!((trend[0] - 0.001).abs() < 1e-12);
    }
}
