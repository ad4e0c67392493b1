use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::StorageError;
use crate::domain::repositories::KeyValueStore;

/// Process-local store; contents are lost on exit
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_reads_as_none() {
        let store = InMemoryKeyValueStore::new();

        assert_eq!(store.get("groups").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let store = InMemoryKeyValueStore::new();

        store.set("groups", "[]".to_string()).await.unwrap();
        store.set("groups", r#"["Friday"]"#.to_string()).await.unwrap();

        assert_eq!(
            store.get("groups").await.unwrap().as_deref(),
            Some(r#"["Friday"]"#)
        );
    }

    #[tokio::test]
    async fn removing_absent_key_succeeds() {
        let store = InMemoryKeyValueStore::new();

        store.remove("players-Nobody").await.unwrap();
    }
}
