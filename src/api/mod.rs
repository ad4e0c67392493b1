// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter over the repositories

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::domain::repositories::{GroupRepository, KeyValueStore, PlayerRepository};
use crate::infrastructure::repositories::{KvGroupRepository, KvPlayerRepository};
use handlers::{groups, health_check, players};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub groups: Arc<dyn GroupRepository>,
    pub players: Arc<dyn PlayerRepository>,
}

impl AppState {
    /// Wires both repositories onto one store
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            groups: Arc::new(KvGroupRepository::new(store.clone())),
            players: Arc::new(KvPlayerRepository::new(store)),
        }
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Group routes
        .route("/api/groups", get(groups::list_groups).post(groups::create_group))
        .route("/api/groups/:group", delete(groups::delete_group))
        // Player routes
        .route(
            "/api/groups/:group/players",
            get(players::list_players).post(players::add_player),
        )
        .route(
            "/api/groups/:group/players/:name",
            delete(players::remove_player),
        )
        .with_state(state)
}
