//! Diagnostics setup.
//!
//! The TUI owns the terminal, so tracing output never goes to stdout or
//! stderr. A subscriber is installed only when a log file is configured.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::SessionConfig;
use crate::error::TuiError;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(fallback_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns `Ok(false)` without touching global state when no log file is
/// set.
pub fn init(config: &SessionConfig) -> Result<bool, TuiError> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = File::create(path).map_err(|source| TuiError::LogFile {
        path: path.clone(),
        source,
    })?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(env_filter(&config.log_level.to_lowercase()))
        .try_init()
        .map_err(|e| TuiError::logging(e.to_string()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_no_log_file_is_noop() {
        let config = SessionConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let config = SessionConfig {
            log_file: Some(PathBuf::from("/nonexistent-dir/heatmap.log")),
            ..SessionConfig::default()
        };
        assert!(matches!(init(&config), Err(TuiError::LogFile { .. })));
    }
}
