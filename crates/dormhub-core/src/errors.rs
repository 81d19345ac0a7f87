//! Client error taxonomy.
//!
//! Every failure an action can run into ends up as an [`ApiError`]:
//!
//! - [`ApiError::Transport`]: the request never produced a response
//! - [`ApiError::Server`]: the server answered with a non-2xx status
//! - [`ApiError::Decode`]: a 2xx body that does not match the expected shape
//! - [`ApiError::Cancelled`]: the owning screen was unmounted first
//! - [`ApiError::Precondition`]: a client-side check refused the action
//!
//! Screens never show these variants directly; they ask for
//! [`ApiError::user_message`] with a fallback specific to the action.

use serde::Deserialize;

/// Error body the server sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server responded with status {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("{0}")]
    Precondition(String),
}

impl ApiError {
    /// Builds a server error from a status code and raw response body.
    ///
    /// The body is expected to look like `{"error": "..."}`. Anything else
    /// (empty body, HTML error page, other JSON) yields no message.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .map(|msg| msg.trim().to_string())
            .filter(|msg| !msg.is_empty());

        Self::Server { status, message }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// The message to show the user: the server's own message when it sent
    /// one, the precondition text for client-side refusals, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Precondition(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
