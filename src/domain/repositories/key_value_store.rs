use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Durable string-keyed store the repositories persist into
///
/// Implementations must make a successful `set`/`remove` durable before
/// returning. No multi-key atomicity is assumed.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value under `key`, `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value under `key`
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Deletes `key`; deleting an absent key succeeds
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
