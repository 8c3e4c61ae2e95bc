//! Command error types

use rollcall_client::ClientError;
use thiserror::Error;

/// Dispatcher 错误类型
#[derive(Debug, Error)]
pub enum CommandError {
    /// Malformed command (unknown action name, bad arguments)
    #[error("Invalid command: {0}")]
    Validation(String),

    #[error("Session expired")]
    SessionExpired,

    /// Backend refused the request; the detail is shown verbatim
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl CommandError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

impl From<ClientError> for CommandError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized(_) => Self::SessionExpired,
            ClientError::Api { detail, .. } => Self::Rejected(detail),
            ClientError::Http(e) => Self::Transport(e.to_string()),
            other @ (ClientError::InvalidResponse(_) | ClientError::Serialization(_)) => {
                Self::Transport(other.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
