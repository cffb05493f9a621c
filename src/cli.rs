use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aether synthetic mobile-network traffic generator.
#[derive(Parser)]
#[command(
    name = "aether",
    version,
    about = "Synthetic mobile-network traffic generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compose a traffic series from daily/weekly patterns.
    Compose(ComposeArgs),
    /// Generate a standalone diurnal curve for one area type.
    Diurnal(DiurnalArgs),
}

/// Arguments for the `compose` subcommand.
#[derive(clap::Args)]
pub struct ComposeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aether.toml")]
    pub config: PathBuf,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `diurnal` subcommand.
#[derive(clap::Args)]
pub struct DiurnalArgs {
    /// Area type: park, campus, cbd, or average.
    #[arg(short, long, default_value = "average")]
    pub area: String,

    /// Number of days to generate at the 10-minute step.
    #[arg(short, long, default_value_t = 7)]
    pub days: usize,

    /// Clipping ceiling for the stochastic realization.
    #[arg(long = "thp-max", default_value_t = 10.0)]
    pub thp_max: f64,

    /// RNG seed for a reproducible realization.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path for the output CSV file.
    #[arg(short, long)]
    pub output: PathBuf,
}
