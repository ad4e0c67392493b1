// Collection keys used in the key-value store
//
// Every read and write of a collection goes through these, so the layout
// described by the keys cannot drift between call sites.

/// Key holding the ordered list of group names
pub const GROUP_COLLECTION: &str = "groups";

/// Base key for per-group player lists
pub const PLAYER_COLLECTION: &str = "players";

/// Derives the key holding the players of `group`
///
/// # Example
/// ```
/// use roster_api::domain::collections::player_collection_key;
///
/// assert_eq!(player_collection_key("Friday"), "players-Friday");
/// ```
pub fn player_collection_key(group: &str) -> String {
    format!("{}-{}", PLAYER_COLLECTION, group)
}
