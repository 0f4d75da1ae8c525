//! Request and response types for extraction

use planner_domain::ExtractedTask;
use serde::{Deserialize, Serialize};

/// Request to extract task fields from text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Free text typed by the user
    pub text: String,

    /// Target list, passed through untouched
    #[serde(default)]
    pub list_id: Option<i64>,
}

impl ExtractionRequest {
    /// Create a request without a target list
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            list_id: None,
        }
    }

    /// Set the target list
    pub fn with_list_id(mut self, list_id: i64) -> Self {
        self.list_id = Some(list_id);
        self
    }
}

/// Result of an extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Target list from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,

    /// Extracted fields
    pub task: ExtractedTask,
}
