//! Error types for chimera_data.
//!
//! Covers decoding of transported profiles and structural validation of
//! genetic records handed in by upstream breeding logic.

use thiserror::Error;

/// Main error type for chimera_data operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// Hex transport string could not be decoded
    #[error("Invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty transport payload
    #[error("Empty payload")]
    Empty,

    /// A gene or mutation field is outside its documented range
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for chimera_data operations.
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
}
