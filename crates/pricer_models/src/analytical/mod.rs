//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics with dividend yield
//! - Standard normal CDF

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{price, BlackScholes, BlackScholesParams};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
