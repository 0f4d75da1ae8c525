//! Configuration for the Extractor
//!
//! Every vocabulary the matchers use lives here, so an alternate keyword set
//! can be loaded from TOML without touching the matching code.

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Keyword tiers used to infer priority
///
/// Tiers are searched high, then medium, then low. Matching is a
/// case-insensitive substring test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityKeywords {
    /// Keywords that mark a task as high priority
    pub high: Vec<String>,

    /// Keywords that mark a task as medium priority
    pub medium: Vec<String>,

    /// Keywords that mark a task as low priority
    pub low: Vec<String>,
}

impl Default for PriorityKeywords {
    fn default() -> Self {
        Self {
            high: words(&["urgent", "important", "critical", "asap", "priority", "immediately", "high"]),
            medium: words(&["soon", "moderate", "medium", "significant"]),
            low: words(&["eventually", "later", "whenever", "low", "optional", "task"]),
        }
    }
}

/// A word that names a day relative to today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDay {
    /// Word to look for (case-insensitive substring)
    pub word: String,

    /// Days to add to today when the word is found
    pub offset_days: i64,
}

impl RelativeDay {
    fn new(word: &str, offset_days: i64) -> Self {
        Self {
            word: word.to_string(),
            offset_days,
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Weekday names, Monday first
    pub weekday_names: Vec<String>,

    /// Month names, January first
    pub month_names: Vec<String>,

    /// Unit words converted to minutes by multiplying by 60
    pub hour_units: Vec<String>,

    /// Unit words taken as minutes
    pub minute_units: Vec<String>,

    /// Characters that split a first line into title and description
    pub title_separators: Vec<char>,

    /// Priority keyword tiers
    pub priority_keywords: PriorityKeywords,

    /// Relative day words, tried in order before any other date rule
    pub relative_days: Vec<RelativeDay>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            weekday_names: words(&[
                "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
            ]),
            month_names: words(&[
                "january", "february", "march", "april", "may", "june", "july", "august",
                "september", "october", "november", "december",
            ]),
            hour_units: words(&["hours", "hour", "hrs", "hr"]),
            minute_units: words(&["minutes", "minute", "mins", "min"]),
            title_separators: vec!['-', ':', '\u{2013}', '\u{2014}'],
            priority_keywords: PriorityKeywords::default(),
            relative_days: vec![
                RelativeDay::new("today", 0),
                RelativeDay::new("tomorrow", 1),
                RelativeDay::new("yesterday", -1),
            ],
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let tiers = [
            ("high", &self.priority_keywords.high),
            ("medium", &self.priority_keywords.medium),
            ("low", &self.priority_keywords.low),
        ];
        for (name, keywords) in tiers {
            if keywords.is_empty() {
                return Err(format!("priority_keywords.{} must not be empty", name));
            }
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(format!("priority_keywords.{} contains a blank keyword", name));
            }
        }
        if self.weekday_names.len() != 7 {
            return Err(format!(
                "weekday_names must list 7 days, got {}",
                self.weekday_names.len()
            ));
        }
        if self.month_names.len() != 12 {
            return Err(format!(
                "month_names must list 12 months, got {}",
                self.month_names.len()
            ));
        }
        if self.hour_units.is_empty() && self.minute_units.is_empty() {
            return Err("at least one estimate unit is required".to_string());
        }
        let named = self
            .weekday_names
            .iter()
            .chain(&self.month_names)
            .chain(&self.hour_units)
            .chain(&self.minute_units)
            .chain(self.relative_days.iter().map(|d| &d.word));
        for word in named {
            if word.trim().is_empty() {
                return Err("vocabulary entries must not be blank".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents).map_err(ExtractorError::Config)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}
