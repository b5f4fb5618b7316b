//! Key-value store trait
//!
//! Defines the interface for persisting serialized values by key.

use async_trait::async_trait;

use crate::Result;

/// Interface for a persistent string key-value store
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if any
    async fn remove(&self, key: &str) -> Result<()>;
}
