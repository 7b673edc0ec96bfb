//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model with a continuous dividend
//! yield for pricing European call and put options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! No limiting cases are special-cased: σ = 0 or T = 0 divide by zero and
//! the resulting NaN/Inf is returned to the caller.

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::PayoffType;

/// Inputs to the Black-Scholes formula.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesParams;
///
/// let params = BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2);
/// assert!(params.validate().is_ok());
///
/// let flat = params.with_volatility(0.0);
/// assert!(flat.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesParams {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Risk-free interest rate (r)
    pub rate: f64,
    /// Continuous dividend yield (q)
    pub dividend_yield: f64,
    /// Volatility (σ)
    pub volatility: f64,
}

impl BlackScholesParams {
    /// Creates a parameter set. No validation is performed.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            dividend_yield,
            volatility,
        }
    }

    /// Returns a copy with a different spot price.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Checks that the closed form is well defined for these inputs.
    ///
    /// Pricing does not call this; it is for callers that want to report
    /// degenerate parameters.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFinite` if any input is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let named = [
            ("S", self.spot),
            ("K", self.strike),
            ("T", self.expiry),
            ("r", self.rate),
            ("q", self.dividend_yield),
            ("v", self.volatility),
        ];
        if let Some(&(name, value)) = named.iter().find(|(_, value)| !value.is_finite()) {
            return Err(AnalyticalError::NonFinite { name, value });
        }

        if self.spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }
        if self.strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike {
                strike: self.strike,
            });
        }
        if self.expiry <= 0.0 {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        if self.volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }

        Ok(())
    }
}

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholes, BlackScholesParams};
///
/// let params = BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2);
/// let bs = BlackScholes::new(params);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let forward = 100.0 * (-0.02_f64).exp() - 100.0 * (-0.05_f64).exp();
/// let parity = bs.price_call() - bs.price_put() - forward;
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: BlackScholesParams,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model for the given inputs.
    pub fn new(params: BlackScholesParams) -> Self {
        Self { params }
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        let log_moneyness = (p.spot / p.strike).ln();
        let drift = (p.rate - p.dividend_yield + 0.5 * p.volatility * p.volatility) * p.expiry;
        (log_moneyness + drift) / (p.volatility * p.expiry.sqrt())
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.params.volatility * self.params.expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self) -> f64 {
        let p = &self.params;
        let d1 = self.d1();
        let d2 = self.d2();
        p.spot * self.dividend_discount() * norm_cdf(d1) - p.strike * self.discount() * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn price_put(&self) -> f64 {
        let p = &self.params;
        let d1 = self.d1();
        let d2 = self.d2();
        p.strike * self.discount() * norm_cdf(-d2) - p.spot * self.dividend_discount() * norm_cdf(-d1)
    }

    /// Prices the option of the given payoff type.
    #[inline]
    pub fn price(&self, payoff: PayoffType) -> f64 {
        match payoff {
            PayoffType::Call => self.price_call(),
            PayoffType::Put => self.price_put(),
        }
    }

    /// e^(-rT)
    #[inline]
    fn discount(&self) -> f64 {
        (-self.params.rate * self.params.expiry).exp()
    }

    /// e^(-qT)
    #[inline]
    fn dividend_discount(&self) -> f64 {
        (-self.params.dividend_yield * self.params.expiry).exp()
    }
}

/// Prices a European option in one call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::PayoffType;
///
/// let call = price(100.0, 100.0, 1.0, 0.05, 0.02, 0.2, PayoffType::Call);
/// assert!((call - 9.227).abs() < 1e-3);
/// ```
#[inline]
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    payoff: PayoffType,
) -> f64 {
    BlackScholes::new(BlackScholesParams::new(
        spot,
        strike,
        expiry,
        rate,
        dividend_yield,
        volatility,
    ))
    .price(payoff)
}
