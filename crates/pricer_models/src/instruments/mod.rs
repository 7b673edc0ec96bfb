//! Instrument definitions.
//!
//! Only the payoff side of a European vanilla option is modelled here;
//! contract terms (strike, expiry) travel with
//! [`BlackScholesParams`](crate::analytical::BlackScholesParams).

mod payoff;

pub use payoff::PayoffType;
