//! Application error type mapping to HTTP status codes.
//!
//! Every failure body has the same shape: `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use advisor_types::chat::RelayFailure;
use advisor_types::error::RelayError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Relay failures (configuration, generation, empty transcript).
    Relay(RelayError),
    /// Request body could not be read as a relay request.
    Validation(String),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Relay(RelayError::EmptyTranscript) => StatusCode::BAD_REQUEST,
            AppError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::Relay(e) => e.to_string(),
            AppError::Validation(msg) => msg,
        };

        (status, Json(RelayFailure { error })).into_response()
    }
}
