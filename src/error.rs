use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::story::GenerationError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid or missing prompt in request body.")]
    InvalidPrompt,

    /// The request body is not JSON, or is JSON `null`.
    #[error("Story generation failed: {0}")]
    UnreadableBody(String),

    #[error("Server configuration error: Missing API Key")]
    MissingApiKey,

    #[error("Story generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPrompt => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey | AppError::UnreadableBody(_) | AppError::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidPrompt => "INVALID_PROMPT",
            AppError::MissingApiKey => "MISSING_API_KEY",
            AppError::UnreadableBody(_) | AppError::Generation(_) => "GENERATION_FAILED",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - {}", code, message);
        } else {
            tracing::warn!("Request rejected: {} - {}", code, message);
        }

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

/// Startup configuration failures.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("Invalid listen address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::InvalidPrompt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingApiKey.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(GenerationError::EmptyResponse).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = AppError::UnreadableBody("expected value at line 1 column 1".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "GENERATION_FAILED");
    }

    #[test]
    fn test_generation_message_wraps_cause() {
        let err = AppError::from(GenerationError::Provider {
            status: 429,
            message: "Resource has been exhausted".into(),
        });
        let text = err.to_string();
        assert!(text.starts_with("Story generation failed: "));
        assert!(text.contains("Resource has been exhausted"));
    }

    #[test]
    fn test_missing_key_message() {
        assert_eq!(
            AppError::MissingApiKey.to_string(),
            "Server configuration error: Missing API Key"
        );
    }
}
