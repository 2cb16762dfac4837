use crate::error::{ApiError, ErrorResponse};
use crate::handlers::KeyPath;
use crate::models::{WriteRequest, WRITE_ACK};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::Method, http::StatusCode, Json};

/// POST|PUT /:key handler - Create or overwrite a value
///
/// The body is parsed before the store is touched, so a malformed request
/// never mutates anything.
#[utoipa::path(
    method(post, put),
    path = routes::KV_ITEM,
    params(
        ("key" = String, Path, description = "Key to write")
    ),
    request_body = WriteRequest,
    responses(
        (status = 200, description = "Value stored", body = String),
        (status = 400, description = "Malformed body, missing `value` field or undecodable key", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn write_handler(
    State(state): State<AppState>,
    method: Method,
    KeyPath(key): KeyPath,
    body: Bytes,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    let request: WriteRequest = serde_json::from_slice(&body)?;

    state.store.set(&key, &request.value).await?;

    tracing::info!("{} stored value for key: {}", method, key);
    Ok((StatusCode::OK, Json(WRITE_ACK)))
}
