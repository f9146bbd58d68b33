//! API error types
//!
//! Internally the relay distinguishes failure classes (network, upstream
//! status, decode) for logging. The client-facing contract collapses them
//! all into a single generic error body, matching the upstream-agnostic
//! behavior the UI expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::WebhookError;

/// Generic client-facing error message for relay failures.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Upstream webhook request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    #[error("Upstream webhook returned status {0}")]
    UpstreamStatus(u16),

    #[error("Failed to decode upstream response: {0}")]
    UpstreamDecode(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<WebhookError> for ApiError {
    fn from(err: WebhookError) -> Self {
        match err {
            WebhookError::Http(e) => ApiError::UpstreamRequest(e),
            WebhookError::Status { code } => ApiError::UpstreamStatus(code),
            WebhookError::Decode(msg) => ApiError::UpstreamDecode(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the specific cause; the response body stays generic.
        match &self {
            ApiError::InvalidBody(msg) => {
                tracing::warn!(error = %msg, "Request body could not be parsed");
            }
            ApiError::UpstreamRequest(e) => {
                tracing::error!(error = %e, "Upstream webhook request failed");
            }
            ApiError::UpstreamStatus(code) => {
                tracing::error!(status = code, "Upstream webhook returned non-success status");
            }
            ApiError::UpstreamDecode(msg) => {
                tracing::error!(error = %msg, "Upstream webhook response was not valid JSON");
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Internal server error");
            }
        }

        let body = Json(ErrorBody {
            error: GENERIC_ERROR_MESSAGE.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}
