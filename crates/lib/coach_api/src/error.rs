//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coach_core::provider::ProviderError;
use thiserror::Error;

use crate::models::ErrorResponse;

pub const MISSING_FIELDS: &str = "Missing message or section.";
pub const MISSING_OR_INVALID_SECTION: &str = "Missing message or invalid section.";
pub const NO_RESPONSE: &str = "No response from AI model.";
pub const NO_MESSAGE: &str = "AI model did not return a message.";
pub const UPSTREAM_FAILED: &str = "Something went wrong with the AI API.";

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(&'static str),

    #[error("Empty upstream response: {0}")]
    UpstreamEmpty(&'static str),

    /// `details` is only populated when the caller may see the raw error.
    #[error("Upstream call failed")]
    UpstreamCall { details: Option<String> },
}

impl AppError {
    /// Wraps a provider failure, keeping its message only when `expose` is set.
    pub fn upstream_call(e: &ProviderError, expose: bool) -> Self {
        AppError::UpstreamCall {
            details: expose.then(|| e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m, None),
            AppError::UpstreamEmpty(m) => (StatusCode::INTERNAL_SERVER_ERROR, m, None),
            AppError::UpstreamCall { details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILED, details)
            }
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });
        (status, body).into_response()
    }
}
