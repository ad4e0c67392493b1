use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;

/// Request body for creating a group
#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub name: String,
}

/// Create a new group
///
/// POST /api/groups
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Provide a name for the group."));
    }

    state.groups.create_group(&req.name).await?;

    Ok((StatusCode::CREATED, Json(GroupResponse { name: req.name })))
}

/// List all groups in creation order
///
/// GET /api/groups
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.groups.list_groups().await?))
}

/// Delete a group together with its players
///
/// DELETE /api/groups/:group
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.groups.remove_group(&group).await?;

    Ok(StatusCode::NO_CONTENT)
}
