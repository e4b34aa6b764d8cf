use anyhow::{Context, Result};
use clap::Parser;

use unspool::cli::Cli;
use unspool::{Config, logging, orchestrator};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = Config::from_cli(&cli)?;
    orchestrator::run(&config).context("error finding matching files")?;

    Ok(())
}
