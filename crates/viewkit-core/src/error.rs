//! Error types for setup and content bookkeeping.

use thiserror::Error;

/// Errors raised outside the per-frame widget path.
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Content slot {0} does not exist")]
    ContentIndex(usize),
}

/// Result type for viewkit operations.
pub type Result<T> = std::result::Result<T, GuiError>;
