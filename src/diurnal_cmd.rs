//! The `diurnal` subcommand: render a standalone diurnal curve.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use aether_diurnal::{AreaType, diurnal_throughput};
use aether_io::write_diurnal_csv;
use aether_series::{DT_DAYS, SAMPLES_PER_DAY};

use crate::cli::DiurnalArgs;

pub fn run(args: &DiurnalArgs) -> Result<()> {
    let area = AreaType::parse(&args.area);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let t: Vec<f64> = (0..args.days * SAMPLES_PER_DAY)
        .map(|i| i as f64 * DT_DAYS)
        .collect();
    let curves = diurnal_throughput(&t, area, args.thp_max, &mut rng)
        .context("generating diurnal curves")?;

    let (mean, realization) = curves.into_parts();
    write_diurnal_csv(&args.output, &t, &mean, &realization)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(?area, days = args.days, path = %args.output.display(), "diurnal finished");
    Ok(())
}
