use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sana_store::StoreError> for ApiError {
    fn from(e: sana_store::StoreError) -> Self {
        match e {
            sana_store::StoreError::NotFound(id) => {
                ApiError::NotFound(format!("submission not found: {id}"))
            }
            sana_store::StoreError::Conflict(id) => {
                ApiError::Conflict(format!("submission already exists: {id}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<sana_engine::EngineError> for ApiError {
    fn from(e: sana_engine::EngineError) -> Self {
        match e {
            sana_engine::EngineError::InvalidAnswer { .. } => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
