//! Error types for the console

use thiserror::Error;

/// Errors raised at the browser boundary
#[derive(Debug, Error, Clone)]
pub enum UiError {
    /// Not running inside a browser window
    #[error("No browser window available")]
    NoWindow,

    /// localStorage could not be reached or read
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored configuration is not valid JSON for [`crate::UiConfig`]
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for UiError {
    fn from(e: serde_json::Error) -> Self {
        UiError::InvalidConfig(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
