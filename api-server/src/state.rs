//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use tm_core::ai::{SuggestClient, SuggestConfig};
use tm_core::storage::FileKvStore;
use tm_core::task::TaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: TaskStore,
    suggest: SuggestClient,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub async fn new(data_dir: PathBuf, suggest: SuggestConfig) -> tm_core::Result<Self> {
        let kv = Arc::new(FileKvStore::new(data_dir));
        let task_store = TaskStore::load(kv).await;
        let suggest = SuggestClient::new(suggest)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                task_store,
                suggest,
            }),
        })
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &TaskStore {
        &self.inner.task_store
    }

    /// Get reference to the suggestion client
    pub fn suggest(&self) -> &SuggestClient {
        &self.inner.suggest
    }
}
