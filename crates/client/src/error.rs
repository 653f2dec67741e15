//! Error types for the Reddit client.

use thiserror::Error;

use crate::models::ApiErrorItem;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// Non-2xx responses are surfaced as [`ClientError::ApiError`] exactly as the
/// server reported them; the client does not retry or reinterpret them.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, TLS, body decoding).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Errors reported inside a successful response body (`json.errors`).
    #[error("API rejected the request: {}", format_api_errors(.0))]
    ApiException(Vec<ApiErrorItem>),

    /// Invalid or unexpected response format.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Arguments rejected before any request was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The operation needs an authenticated client.
    #[error("Authentication required: {0}")]
    AuthRequired(String),
}

fn format_api_errors(errors: &[ApiErrorItem]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ClientError {
    /// HTTP status of an [`ClientError::ApiError`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates missing or rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthRequired(_)) || matches!(self.status(), Some(401 | 403))
    }

    /// Check if the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
