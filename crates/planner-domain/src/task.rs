//! Task module - extracted task fields and persisted tasks

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::Priority;

/// Unique identifier for a task based on UUIDv7
///
/// UUIDv7 keeps identifiers chronologically sortable, so listing tasks by id
/// also lists them in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u128);

impl TaskId {
    /// Generate a new UUIDv7-based TaskId
    ///
    /// # Examples
    ///
    /// ```
    /// use planner_domain::TaskId;
    ///
    /// let id = TaskId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a TaskId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a TaskId from its hyphenated UUID form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid task id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TaskId::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Workflow state of a task
///
/// Tasks created from free text always start out pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    Pending,
}

impl TaskStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
        }
    }
}

/// Structured fields derived from a free-text task description
///
/// Produced once per extraction and handed straight to the caller. It has
/// no identity of its own; persisting it yields a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedTask {
    /// Leading subject of the text
    pub title: String,

    /// Remaining detail after the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Inferred priority, [`Priority::None`] when no keyword matched
    #[serde(default)]
    pub priority: Priority,

    /// Referenced due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Time estimate in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u32>,

    /// Reminder times as 24-hour `HH:mm` strings
    #[serde(default)]
    pub reminders: Vec<String>,

    /// Initial status, always pending for freshly extracted tasks
    #[serde(default)]
    pub status: TaskStatus,
}

impl ExtractedTask {
    /// Whether the extracted title carries any content
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Fields required to create a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning user
    pub user_id: String,

    /// Target list, if any
    pub list_id: Option<i64>,

    /// Task fields
    pub fields: ExtractedTask,
}

impl NewTask {
    /// Create task input from extracted fields
    pub fn from_extracted(
        user_id: impl Into<String>,
        list_id: Option<i64>,
        fields: ExtractedTask,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            list_id,
            fields,
        }
    }
}

/// A persisted task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Owning user
    pub user_id: String,

    /// List the task belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,

    /// Title
    pub title: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Priority
    pub priority: Priority,

    /// Due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Estimate in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u32>,

    /// Reminder times (`HH:mm`)
    #[serde(default)]
    pub reminders: Vec<String>,

    /// Workflow state
    pub status: TaskStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Build a task from creation input with a fresh id
    pub fn create(new_task: NewTask, now: DateTime<Utc>) -> Self {
        let NewTask {
            user_id,
            list_id,
            fields,
        } = new_task;

        Self {
            id: TaskId::new(),
            user_id,
            list_id,
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
            due_date: fields.due_date,
            estimate: fields.estimate,
            reminders: fields.reminders,
            status: fields.status,
            created_at: now,
            updated_at: now,
        }
    }
}
