use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::RosterError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

/// Validation failures keep their message; storage failures are logged and
/// replaced by the generic fallback.
impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        if err.is_validation() {
            return Self::conflict(err.user_message());
        }

        tracing::error!(error = %err, "storage failure");
        Self::internal_server_error(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{StorageError, GENERIC_FAILURE_MESSAGE};

    #[test]
    fn duplicate_group_maps_to_conflict() {
        let err = ApiError::from(RosterError::DuplicateGroup {
            name: "Friday".to_string(),
        });

        assert_eq!(err.status, StatusCode::CONFLICT);
        assert!(err.message.contains("Friday"));
    }

    #[test]
    fn storage_error_hides_cause() {
        let err = ApiError::from(RosterError::from(StorageError::backend(
            "connection refused",
        )));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
    }
}
