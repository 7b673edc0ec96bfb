//! Standard normal distribution function.

use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Φ(x) = (1/2) * (1 + erf(x / sqrt(2)))
///
/// Non-finite input yields the IEEE result of `erf` (NaN stays NaN).
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}
