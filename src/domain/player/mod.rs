// Player domain module
// Contains the player record and the conventional team labels

#![allow(clippy::module_inception)]

pub mod player;

// Re-export main types for convenience
pub use player::{Player, DEFAULT_TEAM, TEAM_A, TEAM_B};
