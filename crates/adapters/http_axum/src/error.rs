//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use smartlaunch_domain::error::SmartLaunchError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SmartLaunchError`] to an HTTP response with appropriate status code.
pub struct ApiError(SmartLaunchError);

impl From<SmartLaunchError> for ApiError {
    fn from(err: SmartLaunchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SmartLaunchError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SmartLaunchError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SmartLaunchError::Storage(err) => {
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
