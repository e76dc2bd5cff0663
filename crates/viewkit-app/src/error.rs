//! Host errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("GUI error: {0}")]
    Gui(#[from] viewkit_core::GuiError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
