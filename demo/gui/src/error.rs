//! Error types for the heatmap TUI.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal errors. Any of these ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal setup, read or write failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Command line values rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be created
    #[error("Cannot open log file {}: {source}", .path.display())]
    LogFile {
        /// Requested log file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl TuiError {
    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
