use async_trait::async_trait;

use crate::domain::errors::RosterResult;

/// Repository for the list of group names
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Appends a new group, failing with `DuplicateGroup` if the exact name exists
    async fn create_group(&self, name: &str) -> RosterResult<()>;

    /// All group names in creation order
    async fn list_groups(&self) -> RosterResult<Vec<String>>;

    /// True if a group with exactly this name exists
    async fn group_exists(&self, name: &str) -> RosterResult<bool>;

    /// Drops the group from the list, then deletes its player collection
    ///
    /// Removing an unknown group is not an error.
    async fn remove_group(&self, name: &str) -> RosterResult<()>;
}
