use crate::error::ApiError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The `{key}` path segment, percent-decoded
///
/// Wraps `Path<String>` so a segment that does not decode to UTF-8 is
/// reported through `ApiError` like every other client error.
#[derive(Debug)]
pub struct KeyPath(pub String);

impl<S> FromRequestParts<S> for KeyPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(key) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(KeyPath(key))
    }
}
