use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body accepted by POST and PUT
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct WriteRequest {
    pub value: String,
}

/// Acknowledgement returned by a successful write
pub const WRITE_ACK: &str = "OK";

/// Response type for successful GET operations: `{"<key>": "<value>"}`
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(transparent)]
pub struct ReadResponse(pub HashMap<String, String>);

impl ReadResponse {
    pub fn new(key: String, value: String) -> Self {
        Self(HashMap::from([(key, value)]))
    }
}
