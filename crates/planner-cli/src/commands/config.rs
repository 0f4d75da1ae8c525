//! Config command implementation.

use crate::error::{CliError, Result};
use planner_extractor::ExtractorConfig;

/// Execute the config command.
pub fn execute_config(config: &ExtractorConfig) -> Result<()> {
    print!("{}", config.to_toml().map_err(CliError::Config)?);
    Ok(())
}
