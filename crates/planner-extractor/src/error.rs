//! Error types for the Extractor
//!
//! Extraction itself never fails; these errors come from building an
//! extractor out of a configuration.

use thiserror::Error;

/// Errors that can occur while setting up an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A vocabulary entry produced a pattern that does not compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Failed to read a configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
