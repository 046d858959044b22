//! Main entry point for the geoipdat CLI tool
//!
//! Resolves IPv4 addresses and host names against legacy GeoIP `.dat` files.

use anyhow::Context;
use clap::Parser;
use log::info;

use geoipdat::cli::Cli;
use geoipdat::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}, using defaults", e);
        let mut config = AppConfig::default();
        config.apply_env();
        config
    });

    // Initialize logging, RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level(&config))).init();

    info!("Starting geoipdat v{}", env!("CARGO_PKG_VERSION"));

    // Execute CLI logic
    cli.run(config).context("geoipdat failed")?;

    Ok(())
}
