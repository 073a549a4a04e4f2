// API error type
//
// Only one failure mode exists: something went wrong while producing a
// response. The detail is logged server-side; the wire carries a static
// message so presentation never leaks internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flashboard_contracts::ErrorBody;

pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("internal server error")),
        )
            .into_response()
    }
}
