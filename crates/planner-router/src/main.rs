//! Planner Router CLI
//!
//! Starts the HTTP server for natural-language task creation.

use clap::Parser;
use planner_router::{config::RouterConfig, start_server, RouterError};
use std::path::PathBuf;
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Planner Router - Natural-language task service
///
/// The TOML config holds bind_address, bind_port, jwt_secret, optional
/// token_expiry_secs (default 3600), natural_language_enabled (default true)
/// and an optional [extractor] table of vocabulary overrides.
/// Set RUST_LOG to control verbosity (default: info).
#[derive(Debug, Parser)]
#[command(name = "planner-router")]
#[command(version, about)]
struct Args {
    /// Load configuration from a TOML file
    #[arg(short, long, env = "PLANNER_ROUTER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), RouterError> {
    let config = match args.config {
        Some(path) => RouterConfig::from_file(path)?,
        None => {
            warn!("No config file specified, using default test configuration");
            RouterConfig::default_test_config()
        }
    };

    start_server(config).await
}
