use std::sync::Arc;

use async_trait::async_trait;

use super::collection::{read_collection, write_collection};
use crate::domain::collections::player_collection_key;
use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::player::Player;
use crate::domain::repositories::{KeyValueStore, PlayerRepository};

/// Key-value store implementation of PlayerRepository
///
/// Each group's roster is a JSON array of `{name, team}` records under
/// `players-<group>`. Team listings and counts are always derived from a
/// fresh read of that array.
#[derive(Clone)]
pub struct KvPlayerRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvPlayerRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self, group: &str) -> RosterResult<Vec<Player>> {
        Ok(read_collection(self.store.as_ref(), &player_collection_key(group)).await?)
    }

    async fn save(&self, group: &str, players: &[Player]) -> RosterResult<()> {
        Ok(write_collection(self.store.as_ref(), &player_collection_key(group), players).await?)
    }
}

#[async_trait]
impl PlayerRepository for KvPlayerRepository {
    async fn add_player(&self, group: &str, player: Player) -> RosterResult<()> {
        let mut players = self.load(group).await?;

        if players.iter().any(|existing| existing.has_name(&player.name)) {
            return Err(RosterError::DuplicatePlayerName {
                group: group.to_string(),
                name: player.name,
            });
        }

        tracing::info!(group = %group, player = %player.name, team = %player.team, "player added");
        players.push(player);
        self.save(group, &players).await
    }

    async fn list_by_group(&self, group: &str) -> RosterResult<Vec<Player>> {
        self.load(group).await
    }

    async fn list_by_group_and_team(&self, group: &str, team: &str) -> RosterResult<Vec<Player>> {
        let players: Vec<Player> = self
            .load(group)
            .await?
            .into_iter()
            .filter(|player| player.is_on_team(team))
            .collect();

        tracing::debug!(group = %group, team = %team, count = players.len(), "players listed");
        Ok(players)
    }

    async fn remove_player(&self, group: &str, player_name: &str) -> RosterResult<()> {
        let players: Vec<Player> = self
            .load(group)
            .await?
            .into_iter()
            .filter(|player| !player.has_name(player_name))
            .collect();

        self.save(group, &players).await?;

        tracing::info!(group = %group, player = %player_name, "player removed");
        Ok(())
    }

    async fn remove_all_by_group(&self, group: &str) -> RosterResult<()> {
        self.store.remove(&player_collection_key(group)).await?;

        tracing::info!(group = %group, "player collection removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{TEAM_A, TEAM_B};
    use crate::infrastructure::stores::InMemoryKeyValueStore;

    fn repository() -> (KvPlayerRepository, Arc<InMemoryKeyValueStore>) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        (KvPlayerRepository::new(store.clone()), store)
    }

    #[tokio::test]
    async fn players_are_stored_under_derived_key() {
        let (repo, store) = repository();

        repo.add_player("Friday", Player::new("Bob", TEAM_A))
            .await
            .unwrap();

        let raw = store.get("players-Friday").await.unwrap().unwrap();
        assert_eq!(raw, r#"[{"name":"Bob","team":"Time A"}]"#);
    }

    #[tokio::test]
    async fn same_name_in_other_group_is_independent() {
        let (repo, _) = repository();

        repo.add_player("Friday", Player::new("Ana", TEAM_A))
            .await
            .unwrap();
        repo.add_player("Sunday", Player::new("Ana", TEAM_A))
            .await
            .unwrap();

        assert_eq!(repo.list_by_group("Friday").await.unwrap().len(), 1);
        assert_eq!(repo.list_by_group("Sunday").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn team_listing_preserves_insertion_order() {
        let (repo, _) = repository();
        for (name, team) in [("Bob", TEAM_A), ("Eve", TEAM_B), ("Ana", TEAM_A)] {
            repo.add_player("Friday", Player::new(name, team))
                .await
                .unwrap();
        }

        let team_a = repo.list_by_group_and_team("Friday", TEAM_A).await.unwrap();

        assert_eq!(
            team_a,
            vec![Player::new("Bob", TEAM_A), Player::new("Ana", TEAM_A)]
        );
    }

    #[tokio::test]
    async fn rejected_duplicate_does_not_write() {
        let (repo, store) = repository();
        repo.add_player("Friday", Player::new("Ana", TEAM_A))
            .await
            .unwrap();
        let before = store.get("players-Friday").await.unwrap();

        let err = repo
            .add_player("Friday", Player::new("Ana", TEAM_B))
            .await
            .unwrap_err();

        assert!(matches!(err, RosterError::DuplicatePlayerName { .. }));
        assert_eq!(store.get("players-Friday").await.unwrap(), before);
    }

    #[tokio::test]
    async fn remove_all_drops_the_key() {
        let (repo, store) = repository();
        repo.add_player("Friday", Player::new("Bob", TEAM_A))
            .await
            .unwrap();

        repo.remove_all_by_group("Friday").await.unwrap();

        assert!(store.get("players-Friday").await.unwrap().is_none());
        assert!(repo.list_by_group("Friday").await.unwrap().is_empty());
    }
}
