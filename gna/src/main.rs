mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::GnaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GnaConfig::load(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    commands::run(cli.command, &config, &mut stdout.lock())
}
