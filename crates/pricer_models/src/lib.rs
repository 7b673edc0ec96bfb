//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form pricing for European options.
//!
//! This crate provides:
//! - Payoff types (call, put)
//! - The Black-Scholes formula with continuous dividend yield
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **No hidden guards**: degenerate inputs (zero volatility or maturity)
//!   propagate as non-finite prices instead of being clamped
//! - **Opt-in validation** through [`analytical::BlackScholesParams::validate`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
