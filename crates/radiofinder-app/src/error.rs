//! Error types for radiofinder app services
//!
//! Application-level errors that wrap engine errors and add app-specific variants.

use radiofinder::error::RadioError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] RadioError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    Duplicate(String),
}

impl AppError {
    /// Shorthand for a configuration (programmer) error
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Engine(RadioError::Configuration(msg.into()))
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Engine(e) => e.status(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Engine(RadioError::Network(e))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

/// Result type alias for radiofinder app services
pub type Result<T> = std::result::Result<T, AppError>;
