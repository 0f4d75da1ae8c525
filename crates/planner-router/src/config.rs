//! Configuration file parsing for the Router.
//!
//! Loads settings from TOML files including bind address, JWT secret,
//! token expiry, the natural-language feature flag and the extractor
//! vocabulary.

use planner_extractor::ExtractorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Embedded extractor configuration is invalid
    #[error("Invalid extractor configuration: {0}")]
    Extractor(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// JWT secret for signing tokens
    pub jwt_secret: String,

    /// Token expiry in seconds (default: 3600 = 1 hour)
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: u64,

    /// Whether natural-language task entry is accepted (default: true)
    #[serde(default = "default_true")]
    pub natural_language_enabled: bool,

    /// Extractor vocabulary; defaults apply for anything omitted
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Default token expiry: 1 hour
fn default_token_expiry() -> u64 {
    3600
}

fn default_true() -> bool {
    true
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: RouterConfig = toml::from_str(&contents)?;

        // Validate required fields
        if config.jwt_secret.is_empty() {
            return Err(ConfigError::MissingField("jwt_secret".to_string()));
        }
        config.extractor.validate().map_err(ConfigError::Extractor)?;

        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        RouterConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            jwt_secret: "test-secret-key-do-not-use-in-production".to_string(),
            token_expiry_secs: 3600,
            natural_language_enabled: true,
            extractor: ExtractorConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default_test_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.token_expiry_secs, 3600);
        assert!(config.natural_language_enabled);
    }

    #[test]
    fn test_bind_addr() {
        let config = RouterConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            jwt_secret = "my-secret"
            token_expiry_secs = 7200
            natural_language_enabled = false

            [extractor.priority_keywords]
            high = ["now"]
            medium = ["next"]
            low = ["someday"]
        "#;

        let config: RouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.jwt_secret, "my-secret");
        assert_eq!(config.token_expiry_secs, 7200);
        assert!(!config.natural_language_enabled);
        assert_eq!(config.extractor.priority_keywords.high, vec!["now"]);
        assert_eq!(config.extractor.weekday_names.len(), 7);
    }

    #[test]
    fn test_from_file_requires_secret() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1\"\nbind_port = 8080\njwt_secret = \"\"").unwrap();

        let result = RouterConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_from_file_validates_extractor() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "bind_address = \"127.0.0.1\"\nbind_port = 8080\njwt_secret = \"s\"\n\n[extractor]\nmonth_names = [\"jan\"]"
        )
        .unwrap();

        let result = RouterConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Extractor(_))));
    }
}
