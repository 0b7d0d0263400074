use anyhow::{Context, Result};
use callable_traits::cli::Cli;
use callable_traits::{config, inspect};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let report = inspect::run(&cli, &config)?;
    print!("{report}");

    Ok(())
}
