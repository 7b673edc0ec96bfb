//! Scenario grids and price surfaces.
//!
//! This module provides infrastructure for:
//! - Linear parameter sweeps
//! - Spot × volatility scenario grids around a base parameter set
//! - Call/put price surfaces filled from the Black-Scholes pricer
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Grid                    │
//! ├──────────────────────────────────────────────┤
//! │  SweepAxis    - Evenly spaced parameter axis │
//! │  SpotVolGrid  - Spot rows × volatility cols  │
//! │  PriceSurface - Price matrix for one payoff  │
//! │  SurfacePair  - Call + put from one pass     │
//! └──────────────────────────────────────────────┘
//! ```

mod grid;
mod surface;

pub use grid::{
    compute_surfaces, SpotVolGrid, SweepAxis, GRID_POINTS, MIN_VOLATILITY, SPOT_DOWN_FACTOR,
    SPOT_UP_FACTOR, VOL_DOWN_FACTOR, VOL_UP_FACTOR,
};
pub use surface::{PriceSurface, SurfacePair};
