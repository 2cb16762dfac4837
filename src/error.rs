use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant is terminal for its request. Client mistakes and absent
/// keys map to 400, store failures to 500, and all of them render as
/// `{"error": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    /// `{key}` path segment could not be extracted (e.g. not UTF-8 once decoded)
    InvalidKey(String),
    /// Request body is not `{"value": string}`
    JsonError(serde_json::Error),
    /// Key not present in the store (reported as 400, not 404)
    KeyNotFound(String),
    /// Store unreachable or replied with an error
    StoreError(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidKey(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid key: {}", msg),
            ),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", err),
            ),
            ApiError::KeyNotFound(key) => (
                StatusCode::BAD_REQUEST,
                format!("Key not found: {}", key),
            ),
            ApiError::StoreError(err) => {
                tracing::error!("{}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidKey(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::StoreError(err)
    }
}
