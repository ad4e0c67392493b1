use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::player::{Player, DEFAULT_TEAM};

/// Request body for adding a player to a group
#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
    pub team: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayersQuery {
    pub team: Option<String>,
}

/// Roster listing; `count` is the length of `players` as just read
#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub group: String,
    pub team: Option<String>,
    pub count: usize,
    pub players: Vec<Player>,
}

async fn require_group(state: &AppState, group: &str) -> Result<(), ApiError> {
    if state.groups.group_exists(group).await? {
        Ok(())
    } else {
        Err(ApiError::not_found(format!("Group not found: {}", group)))
    }
}

/// List the players of a group, optionally filtered by team
///
/// GET /api/groups/:group/players?team=Time%20A
pub async fn list_players(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Query(query): Query<PlayersQuery>,
) -> Result<Json<PlayersResponse>, ApiError> {
    require_group(&state, &group).await?;

    let players = match &query.team {
        Some(team) => state.players.list_by_group_and_team(&group, team).await?,
        None => state.players.list_by_group(&group).await?,
    };

    Ok(Json(PlayersResponse {
        group,
        team: query.team,
        count: players.len(),
        players,
    }))
}

/// Add a player to a group
///
/// POST /api/groups/:group/players
pub async fn add_player(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Json(req): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Provide the name of the person to add."));
    }
    require_group(&state, &group).await?;

    let player = Player::new(req.name, req.team.unwrap_or_else(|| DEFAULT_TEAM.to_string()));
    state.players.add_player(&group, player.clone()).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// Remove a player from a group
///
/// DELETE /api/groups/:group/players/:name
pub async fn remove_player(
    State(state): State<AppState>,
    Path((group, name)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    require_group(&state, &group).await?;
    state.players.remove_player(&group, &name).await?;

    Ok(StatusCode::NO_CONTENT)
}
