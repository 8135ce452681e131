//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fragmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Pattern catalog errors (unreadable or unparsable side file)
    #[error("Pattern catalog error: {message}")]
    Catalog {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors (input constraints, configured limits)
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a pattern catalog error with path context
    pub fn catalog(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Catalog {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Convenience result alias using the fragmap error type
pub type Result<T> = std::result::Result<T, Error>;
