use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{ReadResponse, WriteRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-redis-kv API",
        version = "1.0.0",
        description = "HTTP front-end mapping CRUD verbs onto a Redis key-value store"
    ),
    paths(
        handlers::write::write_handler,
        handlers::read::read_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            WriteRequest,
            ReadResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "kv", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;
