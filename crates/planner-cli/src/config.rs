//! Configuration loading for the CLI.

use crate::error::{CliError, Result};
use planner_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Get the default extractor configuration path.
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".planner").join("extractor.toml"))
}

/// Load the extractor configuration.
///
/// An explicit path must exist. Without one the default path is used when
/// present, otherwise the built-in vocabulary.
pub fn load_extractor_config(explicit: Option<&Path>) -> Result<ExtractorConfig> {
    if let Some(path) = explicit {
        debug!("Loading extractor config from {}", path.display());
        return Ok(ExtractorConfig::from_file(path)?);
    }

    match default_path() {
        Ok(path) if path.exists() => {
            debug!("Loading extractor config from {}", path.display());
            Ok(ExtractorConfig::from_file(&path)?)
        }
        _ => {
            debug!("Using built-in extractor config");
            Ok(ExtractorConfig::default())
        }
    }
}
