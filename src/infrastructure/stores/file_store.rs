use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::StorageError;
use crate::domain::repositories::KeyValueStore;

/// Store persisted as a single JSON object file
///
/// Every `set` and `remove` rewrites the file through a temporary sibling
/// and a rename, so a crash mid-write leaves the previous contents intact.
/// Reads go to disk each time; nothing is cached.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write of the file within this process
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Creates a store backed by `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
                key: self.path.display().to_string(),
                source,
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(StorageError::Backend(format!(
                "failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(StorageError::backend)?;
        let tmp = self.path.with_extension("tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Backend(format!("failed to create {}: {}", parent.display(), e)))?;
        }

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| StorageError::Backend(format!("failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::Backend(format!("failed to replace {}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries).await?;

        tracing::debug!(key = %key, path = %self.path.display(), "value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&entries).await?;

        tracing::debug!(key = %key, path = %self.path.display(), "value removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("roster.json"));

        assert_eq!(store.get("groups").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        FileKeyValueStore::new(&path)
            .set("groups", r#"["Friday"]"#.to_string())
            .await
            .unwrap();

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(
            reopened.get("groups").await.unwrap().as_deref(),
            Some(r#"["Friday"]"#)
        );
    }

    #[tokio::test]
    async fn remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("roster.json"));
        store.set("groups", "[]".to_string()).await.unwrap();
        store.set("players-Friday", "[]".to_string()).await.unwrap();

        store.remove("players-Friday").await.unwrap();

        assert!(store.get("players-Friday").await.unwrap().is_none());
        assert!(store.get("groups").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("nested/data/roster.json"));

        store.set("groups", "[]".to_string()).await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn garbage_file_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileKeyValueStore::new(&path).get("groups").await.unwrap_err();

        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
