//! # Pricer Risk (L4: Application)
//!
//! Scenario sweeps over the Black-Scholes pricer.
//!
//! This crate provides:
//! - Linear sweep axes
//! - The spot × volatility scenario grid
//! - Call and put price surfaces computed over that grid
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/ - SweepAxis, SpotVolGrid,   │
//! │               PriceSurface, SurfacePair │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Closed-form Black-Scholes              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::BlackScholesParams;
//! use pricer_risk::scenarios::{compute_surfaces, GRID_POINTS};
//!
//! let params = BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2);
//! let surfaces = compute_surfaces(&params);
//!
//! assert_eq!(surfaces.call.rows(), GRID_POINTS);
//! assert_eq!(surfaces.put.cols(), GRID_POINTS);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;

// Re-export commonly used types
pub use scenarios::{compute_surfaces, PriceSurface, SpotVolGrid, SurfacePair, SweepAxis};
