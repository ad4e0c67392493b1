use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::StorageError;
use crate::domain::repositories::KeyValueStore;

/// Reads a JSON array stored under `key`; an absent key is an empty collection
pub(crate) async fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Overwrites the whole collection under `key`
pub(crate) async fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items).map_err(StorageError::backend)?;
    store.set(key, raw).await
}
