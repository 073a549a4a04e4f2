// Common DTOs for the public API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned on every failed request.
/// All server-side failures map to HTTP 500 with this shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
