use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{SubmissionRequest, acceptor, fields};

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let raw = fields::parse_body(content_type, &body).map_err(AppError::Validation)?;
    let request = SubmissionRequest::from_value(&raw).map_err(AppError::Validation)?;

    let message = acceptor::accept(&state, request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "message": message }))).into_response())
}
