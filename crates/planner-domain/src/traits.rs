//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates.

use crate::{NewTask, Task};

/// Trait for storing and retrieving tasks
///
/// Implemented by the service layer (planner-router's in-memory store)
pub trait TaskStore {
    /// Error type for store operations
    type Error;

    /// Persist a new task and return it with identity and timestamps
    fn create_task(&self, task: NewTask) -> Result<Task, Self::Error>;

    /// List a user's tasks, oldest first
    fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, Self::Error>;

    /// Total number of stored tasks
    fn count(&self) -> Result<usize, Self::Error>;
}
