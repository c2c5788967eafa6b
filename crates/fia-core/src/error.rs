//! Error types for fia-core.

use thiserror::Error;

/// Result type alias using fia-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for assistant operations
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure, timeout or non-2xx status on an outbound call
    #[error("Transport error: {0}")]
    Transport(String),

    /// The assistant reported a failure or answered with an unusable payload
    #[error("Assistant error: {0}")]
    Dispatch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a transport error from an HTTP status and response body
    pub fn status(url: &str, status: u16, body: impl AsRef<str>) -> Self {
        let body = body.as_ref().trim();
        if body.is_empty() {
            Self::Transport(format!("{} returned HTTP {}", url, status))
        } else {
            Self::Transport(format!("{} returned HTTP {}: {}", url, status, body))
        }
    }

    /// Whether this error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the assistant itself reported the failure
    pub fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Transport(format!("request timed out: {}", e))
        } else {
            Error::Transport(e.to_string())
        }
    }
}
