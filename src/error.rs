//! Unified error types for calcdriver

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for calcdriver
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level errors (HTTP failures, lost connection)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The application could not be launched or attached to
    #[error("Session start failed: {0}")]
    SessionStart(String),

    /// Element not found in the current UI tree
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unexpected payload or state from the remote endpoint
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl Error {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a new session start error
    pub fn session_start<S: Into<String>>(msg: S) -> Self {
        Error::SessionStart(msg.into())
    }

    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(id: S) -> Self {
        Error::ElementNotFound(id.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new protocol error
    pub fn protocol<S: Into<String>>(msg: S) -> Self {
        Error::Protocol(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}
