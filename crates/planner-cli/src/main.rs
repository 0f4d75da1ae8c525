//! Planner CLI - Turn free-text notes into structured tasks.

use clap::Parser;
use planner_cli::commands;
use planner_cli::{load_extractor_config, Cli, Command, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> planner_cli::Result<()> {
    let cli = Cli::parse();

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);
    let config = load_extractor_config(cli.config.as_deref().map(Path::new))?;

    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, config, &formatter)?,
        Command::Time(args) => commands::execute_time(args, &formatter)?,
        Command::Config => commands::execute_config(&config)?,
    }

    Ok(())
}
