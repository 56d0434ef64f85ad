// src/bin/timewrap.rs

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::*;
use timewrap::{Reporter, cli::Cli, demo, system::config_loader};

/// The main entry point of the `timewrap` demo.
/// It sets up logging, parses arguments, runs the demo and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    if !cli.scale.is_finite() || cli.scale < 0.0 {
        bail!("--scale must be a non-negative number, got {}", cli.scale);
    }

    let config = config_loader::load_config(cli.config.as_deref())
        .context("Failed to load reporter configuration")?;
    let config = cli.apply_overrides(config);
    config_loader::validate(&config)?;
    log::debug!("Effective reporter config: {:?}", config);

    let reporter = Reporter::from_config(&config);

    if cli.run_async {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_time()
            .build()
            .context("Failed to start the async runtime")?;
        runtime.block_on(demo::run_async(&reporter, cli.scale));
    } else {
        demo::run(&reporter, cli.scale);
    }

    Ok(())
}
