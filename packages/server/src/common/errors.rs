use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for the directory core.
///
/// `OrganizationNotFound` is a normal lookup outcome and is never logged as
/// an error. Store-level failures propagate unmodified — retry policy, if
/// any, belongs to the caller.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("organization not found")]
    OrganizationNotFound,

    #[error("activity depth cannot exceed 3 levels: parent is already at level {depth}")]
    ActivityDepthExceeded { depth: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            DirectoryError::InvalidFilter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            DirectoryError::OrganizationNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            DirectoryError::ActivityDepthExceeded { .. } => {
                (StatusCode::CONFLICT, self.to_string())
            }
            DirectoryError::Database(error) => {
                tracing::error!(error = %error, "Database error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
