//! Structured error types for notify-cli
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations.

use thiserror::Error;

/// All possible errors in notify-cli
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotifyError {
    /// No message positional argument was given
    #[error("Missing required argument: message")]
    MissingMessage,

    /// The platform notification facility rejected or failed the request
    #[error("Desktop notification failed: {0}")]
    Display(String),
}

/// Convenience Result type using NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;

impl From<notify_rust::error::Error> for NotifyError {
    fn from(e: notify_rust::error::Error) -> Self {
        NotifyError::Display(e.to_string())
    }
}
