use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::warn;

/// HTTP-facing error; carries the status the service outcome maps to and
/// the `{"error": ...}` body the wire contract uses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "not found"),
            ServiceError::Unavailable(detail) => {
                warn!(error = %detail, "store unavailable");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Database not available")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}
