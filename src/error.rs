//! VoxCmd Error Types
//!
//! Errors only arise while building tables and loading configuration.
//! Request-time operations are total and never fail.

use thiserror::Error;

/// Central error type for VoxCmd
#[derive(Error, Debug)]
pub enum VoxError {
    #[error("Invalid correction rule: {0}")]
    InvalidCorrection(String),

    #[error("Invalid catalog phrase for intent '{0}'")]
    InvalidPhrase(String),

    #[error("Phrase '{phrase}' assigned to both '{first}' and '{second}'")]
    DuplicatePhrase {
        phrase: String,
        first: String,
        second: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for VoxCmd operations
pub type VoxResult<T> = Result<T, VoxError>;
