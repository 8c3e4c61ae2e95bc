//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credential missing, invalid or expired (401)
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Backend rejected the request; `detail` is user-facing text
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Transport-level failure, as opposed to a response from the backend
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Server-reported detail message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } | Self::Unauthorized(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
