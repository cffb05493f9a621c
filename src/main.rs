mod cli;
mod compose_cmd;
mod config;
mod convert;
mod diurnal_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Compose(args) => compose_cmd::run(&args),
        Command::Diurnal(args) => diurnal_cmd::run(&args),
    }
}
