//! API error types with JSON `{"error": ...}` responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API-level errors with HTTP status mapping.
///
/// The display text is exactly what clients receive; storage detail is
/// logged by the handlers and never carried here.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid Json")]
    MalformedInput,
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Invalid or missing field: {0}")]
    InvalidField(&'static str),
    #[error("clinic_id is required")]
    MissingClinicId,
    #[error("Conflict: test_id exists")]
    Duplicate,
    #[error("Internal Error")]
    Internal,
    #[error("Internal server error")]
    FetchFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput | ApiError::InvalidField(_) | ApiError::MissingClinicId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Duplicate => StatusCode::CONFLICT,
            ApiError::Internal | ApiError::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
