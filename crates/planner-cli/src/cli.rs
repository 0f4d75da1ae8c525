//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Planner CLI - Turn free-text notes into structured tasks.
#[derive(Debug, Parser)]
#[command(name = "planner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Extractor configuration file path
    #[arg(short, long, global = true, env = "PLANNER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract task fields from free text
    Parse(ParseArgs),

    /// Normalize a time expression to HH:MM
    Time(TimeArgs),

    /// Print the effective extractor configuration
    Config,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Task text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Target list ID, passed through to the output
    #[arg(short, long)]
    pub list_id: Option<i64>,

    /// Date to resolve relative expressions against (YYYY-MM-DD)
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the time command.
#[derive(Debug, Parser)]
pub struct TimeArgs {
    /// Text containing a time such as "3pm" or "14:30"
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
