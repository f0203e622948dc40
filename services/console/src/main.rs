//! Console CLI
//!
//! Command-line interface for the device claiming console service.

use std::path::PathBuf;

use clap::Parser;
use console::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "Device claiming console for the hackathon backend")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.endpoints.auth_server_url.is_empty() {
        tracing::warn!("No authServerUrl configured; clients will not be able to sign in");
    }

    tracing::info!("Starting console service");
    console::run(config).await?;

    Ok(())
}
