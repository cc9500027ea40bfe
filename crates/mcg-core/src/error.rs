//! Error types for the character roller.

use thiserror::Error;

/// Result type for roller operations.
pub type McgResult<T> = Result<T, McgError>;

/// Errors that can occur while driving the roll menu.
#[derive(Debug, Error)]
pub enum McgError {
    /// Menu input that is not an integer.
    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),

    /// Reading the menu selection or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
