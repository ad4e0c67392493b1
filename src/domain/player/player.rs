use serde::{Deserialize, Serialize};

/// First of the two conventional team labels
pub const TEAM_A: &str = "Time A";

/// Second of the two conventional team labels
pub const TEAM_B: &str = "Time B";

/// Team assigned when the caller does not pick one
pub const DEFAULT_TEAM: &str = TEAM_A;

/// A player on a group's roster
///
/// Stored as `{"name": ..., "team": ...}` inside the group's player
/// collection. Names are unique within a group regardless of team; the team
/// is a free label and only ever compared by exact match.
///
/// # Example
/// ```
/// use roster_api::domain::player::{Player, TEAM_B};
///
/// let player = Player::new("Eve", TEAM_B);
/// assert!(player.is_on_team("Time B"));
/// assert!(!player.is_on_team("time b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
}

impl Player {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }

    /// Exact, case-sensitive team match
    pub fn is_on_team(&self, team: &str) -> bool {
        self.team == team
    }

    /// Exact, case-sensitive name match
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_name_and_team() {
        let player = Player::new("Bob", TEAM_A);
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json, serde_json::json!({"name": "Bob", "team": "Time A"}));
    }

    #[test]
    fn deserializes_stored_record() {
        let player: Player = serde_json::from_str(r#"{"name":"Eve","team":"Time B"}"#).unwrap();

        assert_eq!(player, Player::new("Eve", TEAM_B));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let player = Player::new("Ana", TEAM_A);

        assert!(player.has_name("Ana"));
        assert!(!player.has_name("ana"));
    }

    #[test]
    fn default_team_is_team_a() {
        assert_eq!(DEFAULT_TEAM, "Time A");
    }
}
