use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::storage::StoreError;

#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed required field. Not retryable; the message is
    /// returned verbatim to the caller.
    Validation(String),
    /// Coordinates outside the permitted radius.
    OutOfBounds,
    Internal(String),
    Store(StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation: {msg}"),
            AppError::OutOfBounds => write!(f, "Out of bounds"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Store(err) => write!(f, "Storage Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::OutOfBounds => (
                StatusCode::FORBIDDEN,
                "You are not within the allowed location radius.".to_string(),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error. Please try again later.".to_string(),
                )
            }
            AppError::Store(err) => {
                tracing::error!("Error saving attendance: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error. Please try again later.".to_string(),
                )
            }
        };

        let body = json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
