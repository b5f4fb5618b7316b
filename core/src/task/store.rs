//! Persistent task store
//!
//! Owns the ordered task list (newest first) and writes the whole list
//! through to the injected key-value store after every mutation.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use super::model::{Priority, Task};
use crate::storage::KvStore;
use crate::{Error, Result};

/// Storage key the serialized task list lives under.
pub const TASKS_KEY: &str = "tasks";

/// Task store with write-through persistence
///
/// Every mutation serializes the full list and hands it to the key-value
/// store. Write failures are logged and tolerated; the in-memory list
/// stays authoritative for the session.
pub struct TaskStore {
    kv: Arc<dyn KvStore>,
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Create a store hydrated from the key-value store
    ///
    /// A missing, unreadable, or structurally invalid stored value degrades
    /// to an empty list. This never fails.
    pub async fn load(kv: Arc<dyn KvStore>) -> Self {
        let tasks = match kv.get(TASKS_KEY).await {
            Ok(Some(content)) => match serde_json::from_str::<Vec<Task>>(&content) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!("Discarding malformed stored task list: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored task list: {}", e);
                Vec::new()
            }
        };

        Self {
            kv,
            tasks: RwLock::new(tasks),
        }
    }

    /// Add a new task with default priority
    ///
    /// The task is prepended, so the list stays ordered newest first.
    /// Callers validate the text before invoking this.
    pub async fn add(&self, text: impl Into<String>) -> Task {
        self.add_with_priority(text, Priority::None).await
    }

    /// Add a new task with the given priority
    ///
    /// Used when accepting an AI suggestion, where the priority is known
    /// before the task exists.
    pub async fn add_with_priority(&self, text: impl Into<String>, priority: Priority) -> Task {
        let task = Task::new(text).with_priority(priority);
        {
            let mut tasks = self.tasks.write().await;
            tasks.insert(0, task.clone());
        }
        self.persist().await;
        task
    }

    /// Flip the completed flag on the task with the given id
    pub async fn toggle(&self, id: Uuid) -> Result<Task> {
        let task = {
            let mut tasks = self.tasks.write().await;
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
            task.completed = !task.completed;
            task.clone()
        };
        self.persist().await;
        Ok(task)
    }

    /// Delete the task with the given id
    ///
    /// Returns false if no task matched; deleting an unknown id is a no-op.
    pub async fn delete(&self, id: Uuid) -> bool {
        let removed = {
            let mut tasks = self.tasks.write().await;
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            tasks.len() != before
        };
        if removed {
            self.persist().await;
        }
        removed
    }

    /// Set the priority of the task with the given id
    ///
    /// Accepts `Priority::None` so a priority can be cleared.
    pub async fn set_priority(&self, id: Uuid, priority: Priority) -> Result<Task> {
        let task = {
            let mut tasks = self.tasks.write().await;
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
            task.priority = priority;
            task.clone()
        };
        self.persist().await;
        Ok(task)
    }

    /// Get all tasks, newest first
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Get tasks whose text contains `needle`, case-insensitive
    ///
    /// An empty needle matches everything. Order is preserved.
    pub async fn filtered(&self, needle: &str) -> Vec<Task> {
        let needle = needle.to_lowercase();
        let tasks = self.tasks.read().await;
        tasks
            .iter()
            .filter(|t| t.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Get the not-yet-completed slice of the filtered view
    pub async fn pending(&self, needle: &str) -> Vec<Task> {
        let mut tasks = self.filtered(needle).await;
        tasks.retain(|t| !t.completed);
        tasks
    }

    /// Get the completed slice of the filtered view
    pub async fn completed(&self, needle: &str) -> Vec<Task> {
        let mut tasks = self.filtered(needle).await;
        tasks.retain(|t| t.completed);
        tasks
    }

    /// Write the full list through to the key-value store
    ///
    /// Failures are logged, not surfaced; the in-memory mutation stands.
    async fn persist(&self) {
        let content = {
            let tasks = self.tasks.read().await;
            match serde_json::to_string_pretty(&*tasks) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to serialize task list: {}", e);
                    return;
                }
            }
        };

        if let Err(e) = self.kv.set(TASKS_KEY, &content).await {
            warn!("Failed to persist task list: {}", e);
        }
    }
}
