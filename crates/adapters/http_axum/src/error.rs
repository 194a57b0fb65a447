//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rntly_domain::error::{RntlyError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RntlyError`] to an HTTP response with appropriate status code.
///
/// | Error        | Status |
/// |--------------|--------|
/// | `Validation` | 400    |
/// | `NotFound`   | 404    |
/// | `Conflict`   | 409    |
/// | `Storage`    | 500    |
#[derive(Debug)]
pub struct ApiError(RntlyError);

impl From<RntlyError> for ApiError {
    fn from(err: RntlyError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::InvalidBody(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RntlyError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RntlyError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            RntlyError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            RntlyError::Storage(err) => {
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
