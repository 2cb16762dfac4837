use crate::error::{ApiError, ErrorResponse};
use crate::handlers::KeyPath;
use crate::routes;
use crate::state::AppState;
use crate::store::Lookup;
use axum::{extract::State, http::StatusCode, Json};

/// DELETE /:key handler - Remove a key
///
/// Responds with the bare number of keys removed. Redis reports a missing
/// key as a count of 0, which is passed through; only a nil reply is
/// treated as absence.
#[utoipa::path(
    delete,
    path = routes::KV_ITEM,
    params(
        ("key" = String, Path, description = "Key to delete")
    ),
    responses(
        (status = 200, description = "Number of keys deleted", body = i64),
        (status = 400, description = "Key not found or not valid UTF-8", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    KeyPath(key): KeyPath,
) -> Result<(StatusCode, Json<i64>), ApiError> {
    match state.store.delete(&key).await? {
        Lookup::Found(count) => {
            tracing::info!("Deleted key: {} (count: {})", key, count);
            Ok((StatusCode::OK, Json(count)))
        }
        Lookup::Absent => {
            tracing::info!("Key not found: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
    }
}
