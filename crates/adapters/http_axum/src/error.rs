//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use miniblog_domain::error::BlogError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BlogError`] to an HTTP response with appropriate status code.
///
/// Not-found is uniformly 404 with the entity name in the body; storage
/// failures are logged and surfaced as an opaque 500.
pub struct ApiError(BlogError);

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BlogError::NotFound(err) => {
                tracing::debug!(entity = err.entity, id = %err.id, "row not found");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            BlogError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
