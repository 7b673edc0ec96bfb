//! Command line and session configuration.
//!
//! Every flag has a default, so running the binary without arguments starts
//! the session at S=100, K=100, T=1, r=0.05, q=0.02, v=0.2.

use std::path::PathBuf;

use clap::Parser;
use pricer_models::analytical::BlackScholesParams;
use thiserror::Error;

/// Default spot price.
pub const DEFAULT_SPOT: f64 = 100.0;
/// Default strike.
pub const DEFAULT_STRIKE: f64 = 100.0;
/// Default time to maturity in years.
pub const DEFAULT_EXPIRY: f64 = 1.0;
/// Default continuously compounded risk-free rate.
pub const DEFAULT_RATE: f64 = 0.05;
/// Default continuous dividend yield.
pub const DEFAULT_DIVIDEND_YIELD: f64 = 0.02;
/// Default volatility.
pub const DEFAULT_VOLATILITY: f64 = 0.2;

/// Log levels accepted by `--log-level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Interactive Black-Scholes call/put heatmaps
#[derive(Debug, Parser)]
#[command(name = "option-heatmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Initial spot price (S)
    #[arg(long, default_value_t = DEFAULT_SPOT, allow_negative_numbers = true)]
    pub spot: f64,

    /// Initial strike (K)
    #[arg(long, default_value_t = DEFAULT_STRIKE, allow_negative_numbers = true)]
    pub strike: f64,

    /// Initial time to maturity in years (T)
    #[arg(long, default_value_t = DEFAULT_EXPIRY, allow_negative_numbers = true)]
    pub expiry: f64,

    /// Initial risk-free rate (r)
    #[arg(long, default_value_t = DEFAULT_RATE, allow_negative_numbers = true)]
    pub rate: f64,

    /// Initial dividend yield (q)
    #[arg(long, default_value_t = DEFAULT_DIVIDEND_YIELD, allow_negative_numbers = true)]
    pub dividend: f64,

    /// Initial volatility (v)
    #[arg(long, default_value_t = DEFAULT_VOLATILITY, allow_negative_numbers = true)]
    pub volatility: f64,

    /// Write diagnostics to this file; nothing is logged without it
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Initial pricing parameters
    pub params: BlackScholesParams,
    /// Optional diagnostics file
    pub log_file: Option<PathBuf>,
    /// Fallback log level
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            params: BlackScholesParams::new(
                DEFAULT_SPOT,
                DEFAULT_STRIKE,
                DEFAULT_EXPIRY,
                DEFAULT_RATE,
                DEFAULT_DIVIDEND_YIELD,
                DEFAULT_VOLATILITY,
            ),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        Self {
            params: BlackScholesParams::new(
                cli.spot,
                cli.strike,
                cli.expiry,
                cli.rate,
                cli.dividend,
                cli.volatility,
            ),
            log_file: cli.log_file,
            log_level: cli.log_level,
        }
    }
}

impl SessionConfig {
    /// Validate the configuration.
    ///
    /// Only NaN or infinite starting values are rejected. Zero or negative
    /// values are reachable by editing anyway and simply price to NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let p = &self.params;
        for (flag, value) in [
            ("spot", p.spot),
            ("strike", p.strike),
            ("expiry", p.expiry),
            ("rate", p.rate),
            ("dividend", p.dividend_yield),
            ("volatility", p.volatility),
        ] {
            if !value.is_finite() {
                errors.push(format!("--{} must be finite, got {}", flag, value));
            }
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Some(path) = &self.log_file {
            if path.as_os_str().is_empty() {
                errors.push("log_file cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more values failed validation
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
