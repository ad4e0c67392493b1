use std::sync::Arc;

use async_trait::async_trait;

use super::collection::{read_collection, write_collection};
use crate::domain::collections::{player_collection_key, GROUP_COLLECTION};
use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::repositories::{GroupRepository, KeyValueStore};

/// Key-value store implementation of GroupRepository
///
/// All group names live in one JSON array under [`GROUP_COLLECTION`]. Every
/// mutation rewrites that array whole.
#[derive(Clone)]
pub struct KvGroupRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvGroupRepository {
    /// Creates a new KvGroupRepository
    ///
    /// # Arguments
    /// * `store` - Store shared with the player repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> RosterResult<Vec<String>> {
        Ok(read_collection(self.store.as_ref(), GROUP_COLLECTION).await?)
    }
}

#[async_trait]
impl GroupRepository for KvGroupRepository {
    async fn create_group(&self, name: &str) -> RosterResult<()> {
        let mut groups = self.load().await?;

        if groups.iter().any(|existing| existing == name) {
            return Err(RosterError::DuplicateGroup {
                name: name.to_string(),
            });
        }

        groups.push(name.to_string());
        write_collection(self.store.as_ref(), GROUP_COLLECTION, &groups).await?;

        tracing::info!(group = %name, total = groups.len(), "group created");
        Ok(())
    }

    async fn list_groups(&self) -> RosterResult<Vec<String>> {
        self.load().await
    }

    async fn group_exists(&self, name: &str) -> RosterResult<bool> {
        Ok(self.load().await?.iter().any(|existing| existing == name))
    }

    async fn remove_group(&self, name: &str) -> RosterResult<()> {
        let groups: Vec<String> = self
            .load()
            .await?
            .into_iter()
            .filter(|existing| existing != name)
            .collect();

        write_collection(self.store.as_ref(), GROUP_COLLECTION, &groups).await?;

        // The list no longer references the group; a failure here leaves an
        // unreachable player collection behind.
        let players_key = player_collection_key(name);
        if let Err(err) = self.store.remove(&players_key).await {
            tracing::warn!(
                group = %name,
                key = %players_key,
                error = %err,
                "group removed but its player collection could not be deleted"
            );
            return Err(err.into());
        }

        tracing::info!(group = %name, "group removed");
        Ok(())
    }
}
