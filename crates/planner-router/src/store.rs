//! In-memory task storage.
//!
//! Backs the task service for the HTTP layer. Nothing is persisted across
//! restarts.

use chrono::Utc;
use planner_domain::{NewTask, Task, TaskStore};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::debug;

/// Store error
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock
    #[error("Task store lock poisoned")]
    Poisoned,
}

/// Task store holding everything in a shared vector
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Poison the lock by panicking while holding it
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let tasks = Arc::clone(&self.tasks);
        let _ = std::thread::spawn(move || {
            let _guard = tasks.write();
            panic!("poisoning task store");
        })
        .join();
    }
}

impl TaskStore for InMemoryTaskStore {
    type Error = StoreError;

    fn create_task(&self, task: NewTask) -> Result<Task, Self::Error> {
        let task = Task::create(task, Utc::now());
        let mut tasks = self.tasks.write().map_err(|_| StoreError::Poisoned)?;
        tasks.push(task.clone());
        debug!("Stored task {} for user '{}'", task.id, task.user_id);
        Ok(task)
    }

    fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, Self::Error> {
        let tasks = self.tasks.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tasks.iter().filter(|t| t.user_id == user_id).cloned().collect())
    }

    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.tasks.read().map_err(|_| StoreError::Poisoned)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_domain::{ExtractedTask, TaskStatus};

    fn new_task(user: &str, title: &str) -> NewTask {
        NewTask::from_extracted(
            user,
            None,
            ExtractedTask {
                title: title.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_new_store() {
        let store = InMemoryTaskStore::new();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_create_and_list() {
        let store = InMemoryTaskStore::new();
        let task = store.create_task(new_task("alice", "Buy milk")).unwrap();

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(store.list_tasks("alice").unwrap(), vec![task]);
        assert!(store.list_tasks("bob").unwrap().is_empty());
    }

    #[test]
    fn test_list_filters_by_user() {
        let store = InMemoryTaskStore::new();
        store.create_task(new_task("alice", "one")).unwrap();
        store.create_task(new_task("bob", "two")).unwrap();
        store.create_task(new_task("alice", "three")).unwrap();

        let titles: Vec<_> = store
            .list_tasks("alice")
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["one", "three"]);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_clones_share_storage() {
        let store = InMemoryTaskStore::new();
        let other = store.clone();
        store.create_task(new_task("alice", "shared")).unwrap();
        assert_eq!(other.count().unwrap(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = InMemoryTaskStore::new();
        store.poison();

        assert!(matches!(store.count(), Err(StoreError::Poisoned)));
        assert!(matches!(
            store.create_task(new_task("alice", "Buy milk")),
            Err(StoreError::Poisoned)
        ));
    }
}
