use axum::{Json, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    #[error("friend {friend_id} references unknown season {season_id}")]
    JoinIntegrity { friend_id: i64, season_id: i64 },

    #[error("malformed parameter: {0}")]
    MalformedParameter(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl AppError {
    // All failures are request-scoped; the handler boundary turns each one
    // into a 400 with a readable message.
    pub fn to_response(&self) -> (StatusCode, Json<ErrorMessage>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorMessage {
                message: self.to_string(),
            }),
        )
    }
}
