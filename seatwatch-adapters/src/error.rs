//! Error types for adapters.

use thiserror::Error;

/// Errors that can occur when reading a seat inventory.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// HTTP request failed or the service returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// Response body is not JSON or has no `monitors` mapping.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A monitor entry lacks a required field.
    #[error("Invalid monitor entry: {0}")]
    Schema(String),

    /// Reading a saved response failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`AdapterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Service unreachable, timed out, or answered with a non-success status.
    Network,
    /// Body is not valid JSON or lacks the `monitors` mapping.
    Parse,
    /// An entry is missing `ip` or `hostname`.
    Schema,
    /// Local file access.
    Io,
}

impl AdapterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdapterError::Http(_)
            | AdapterError::Auth(_)
            | AdapterError::Connection(_)
            | AdapterError::Timeout => ErrorKind::Network,
            AdapterError::Parse(_) => ErrorKind::Parse,
            AdapterError::Schema(_) => ErrorKind::Schema,
            AdapterError::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdapterError::Timeout
        } else if err.is_connect() {
            AdapterError::Connection(err.to_string())
        } else {
            AdapterError::Http(err.to_string())
        }
    }
}
