use async_trait::async_trait;

use crate::domain::errors::RosterResult;
use crate::domain::player::Player;

/// Repository for per-group player rosters
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Appends a player, failing with `DuplicatePlayerName` if the name is taken in the group
    async fn add_player(&self, group: &str, player: Player) -> RosterResult<()>;

    /// Every player of the group in insertion order
    async fn list_by_group(&self, group: &str) -> RosterResult<Vec<Player>>;

    /// Players of the group whose team matches exactly, in insertion order
    async fn list_by_group_and_team(&self, group: &str, team: &str) -> RosterResult<Vec<Player>>;

    /// Removes the named player; unknown names are a no-op
    async fn remove_player(&self, group: &str, player_name: &str) -> RosterResult<()>;

    /// Deletes the group's whole player collection
    async fn remove_all_by_group(&self, group: &str) -> RosterResult<()>;
}
