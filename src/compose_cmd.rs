//! The `compose` subcommand: render a traffic series from a TOML recipe.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use aether_catalog::PatternCatalog;
use aether_compose::compose;
use aether_io::{read_pattern_csv, write_series_csv};
use aether_noise::{AnomalyWindow, add_anomaly, add_lognormal};

use crate::cli::ComposeArgs;
use crate::config::AetherConfig;
use crate::convert;

pub fn run(args: &ComposeArgs) -> Result<()> {
    let toml_str = fs::read_to_string(&args.config)
        .with_context(|| format!("reading config {}", args.config.display()))?;
    let config: AetherConfig = toml::from_str(&toml_str)
        .with_context(|| format!("parsing config {}", args.config.display()))?;

    let patterns_path = config
        .io
        .patterns
        .clone()
        .context("config is missing io.patterns")?;
    let output_path: PathBuf = match &args.output {
        Some(path) => path.clone(),
        None => config.io.output.clone().context("no output path: set io.output or pass --output")?,
    };

    // CLI seed wins over the config seed; neither means OS entropy.
    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let catalog = PatternCatalog::standard();
    let segments = convert::build_segments(&config.compose.sequence);
    if segments.is_empty() {
        bail!("compose.sequence is empty");
    }
    let compose_config = convert::build_compose_config(&config.compose, &segments, &catalog)?;

    let table = read_pattern_csv(&patterns_path)
        .with_context(|| format!("reading patterns {}", patterns_path.display()))?;

    let mut series = compose(&segments, &table, &catalog, &compose_config)
        .context("composing traffic series")?;
    info!(n = series.len(), "series composed");

    for anomaly in &config.anomaly {
        let window = AnomalyWindow::new(anomaly.start_day, anomaly.end_day);
        add_anomaly(&mut series, anomaly.amplitude, &window);
    }

    if let Some(noise) = &config.noise {
        add_lognormal(&mut series, noise.sigma, noise.thp_max, &mut rng)
            .context("adding lognormal variation")?;
    }

    write_series_csv(&output_path, &series)
        .with_context(|| format!("writing {}", output_path.display()))?;
    info!(path = %output_path.display(), "compose finished");
    Ok(())
}
