//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or saved
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dotted field path does not name a form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// GUI failed to start or crashed
    #[error("UI error: {0}")]
    Ui(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a UI error with message
    pub fn ui(msg: impl Into<String>) -> Self {
        Self::Ui(msg.into())
    }
}
