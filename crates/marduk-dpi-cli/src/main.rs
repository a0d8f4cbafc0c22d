mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use marduk_dpi::logging::{init_logging, LoggingConfig};
use marduk_dpi::DpiConfig;

use crate::cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let config = DpiConfig::from_env().context("failed to resolve DPI configuration")?;
    config
        .install()
        .context("failed to install DPI configuration")?;
    log::debug!("running {:?} with DPI mode {}", cli.command, config.mode);

    let out = run(&cli.command, config)?;
    println!("{out}");

    Ok(())
}
