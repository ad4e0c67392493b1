//! Roster API Library
//!
//! Persistence for sports-team rosters: groups, the players in each group
//! split into teams, stored as JSON collections in a key-value store. The
//! repositories are exposed directly and through a small HTTP adapter.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
