//! Planner CLI library.
//!
//! Command-line front end for the task extractor: parse free text into task
//! fields, normalize reminder times and inspect the active vocabulary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::{load_extractor_config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
