use crate::error::{ApiError, ErrorResponse};
use crate::handlers::KeyPath;
use crate::models::ReadResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::Lookup;
use axum::{extract::State, http::StatusCode, Json};

/// GET /:key handler - Retrieve a value
#[utoipa::path(
    get,
    path = routes::KV_ITEM,
    params(
        ("key" = String, Path, description = "Key to read")
    ),
    responses(
        (status = 200, description = "Value found, keyed by the requested key", body = ReadResponse),
        (status = 400, description = "Key not found or not valid UTF-8", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn read_handler(
    State(state): State<AppState>,
    KeyPath(key): KeyPath,
) -> Result<(StatusCode, Json<ReadResponse>), ApiError> {
    match state.store.get(&key).await? {
        Lookup::Found(value) => {
            tracing::info!("Retrieved value for key: {}", key);
            Ok((StatusCode::OK, Json(ReadResponse::new(key, value))))
        }
        Lookup::Absent => {
            tracing::info!("Key not found: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
    }
}
