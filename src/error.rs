//! # Error Types
//!
//! This module defines error types used throughout the dotprint library.

use thiserror::Error;

/// Main error type for dotprint operations
#[derive(Debug, Error)]
pub enum DotprintError {
    /// The outline font is missing or could not be parsed.
    ///
    /// Fatal for the rasterizer: the failure is remembered and every later
    /// render reports the same reason.
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// Invalid command or parameter (encoding contract violation)
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Preview image error
    #[error("Image error: {0}")]
    Image(String),

    /// Malformed job file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, DotprintError>;
