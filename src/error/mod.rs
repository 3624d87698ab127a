//! Error handling for the case-view engine.
//!
//! Derivations (totals, timelines, task views) never fail: malformed input
//! degrades to zero or empty results. This error type only covers the
//! fallible edges around them, such as loading configuration or case files.

use std::path::PathBuf;

/// Specialized error type for the case-view engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file needed for an operation could not be used
    #[error("{message}: {}", path.display())]
    File {
        /// What went wrong
        message: String,
        /// The offending path
        path: PathBuf,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Misuse of the deferred scheduler
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a file error tied to a path
    pub fn file(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::File {
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Result type for case-view operations
pub type Result<T> = std::result::Result<T, Error>;
