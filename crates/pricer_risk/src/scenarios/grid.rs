//! Spot × volatility scenario grid.
//!
//! Rows sweep the spot price, columns sweep the volatility. Every other
//! Black-Scholes input is held at the base value.

use std::cmp::Ordering;

use pricer_models::analytical::{BlackScholes, BlackScholesParams};
use pricer_models::instruments::PayoffType;

use super::surface::{PriceSurface, SurfacePair};

/// Points on each axis of the default grid.
pub const GRID_POINTS: usize = 20;

/// Lowest spot as a multiple of the base spot.
pub const SPOT_DOWN_FACTOR: f64 = 0.8;

/// Highest spot as a multiple of the base spot.
pub const SPOT_UP_FACTOR: f64 = 1.2;

/// Lowest volatility as a multiple of the base volatility.
pub const VOL_DOWN_FACTOR: f64 = 0.8;

/// Highest volatility as a multiple of the base volatility.
pub const VOL_UP_FACTOR: f64 = 1.4;

/// Floor applied to the low end of the volatility axis.
pub const MIN_VOLATILITY: f64 = 0.01;

/// Evenly spaced sweep from `start` to `end`, both endpoints included.
///
/// # Examples
/// ```
/// use pricer_risk::scenarios::SweepAxis;
///
/// let axis = SweepAxis::linear(80.0, 120.0, 5);
/// let values: Vec<f64> = axis.values().collect();
/// assert_eq!(values, vec![80.0, 90.0, 100.0, 110.0, 120.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAxis {
    start: f64,
    end: f64,
    points: usize,
}

impl SweepAxis {
    /// Create a linear sweep with `points` samples.
    pub fn linear(start: f64, end: f64, points: usize) -> Self {
        Self { start, end, points }
    }

    /// First value on the axis.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last value on the axis.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points
    }

    /// True when the axis has no samples.
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    /// Distance between neighbouring samples; zero for fewer than two points.
    pub fn step(&self) -> f64 {
        if self.points < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.points - 1) as f64
        }
    }

    /// Value of the `index`-th sample.
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step()
    }

    /// Iterate over all samples in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.points).map(move |i| self.value(i))
    }

    /// True when the sweep is zero-width or runs backwards.
    pub fn is_degenerate(&self) -> bool {
        self.end.partial_cmp(&self.start) != Some(Ordering::Greater)
    }
}

/// Spot × volatility grid around a base parameter set.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesParams;
/// use pricer_risk::scenarios::SpotVolGrid;
///
/// let params = BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2);
/// let grid = SpotVolGrid::around(&params);
///
/// assert!((grid.spot_axis().start() - 80.0).abs() < 1e-12);
/// assert!((grid.vol_axis().end() - 0.28).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotVolGrid {
    spot_axis: SweepAxis,
    vol_axis: SweepAxis,
}

impl SpotVolGrid {
    /// Create a grid from explicit axes.
    pub fn new(spot_axis: SweepAxis, vol_axis: SweepAxis) -> Self {
        Self {
            spot_axis,
            vol_axis,
        }
    }

    /// The default 20 × 20 grid around `params`.
    ///
    /// Spot runs from 0.8·S to 1.2·S. Volatility runs from
    /// max(0.8·v, 0.01) to 1.4·v; the upper end is not floored, so v <= 0
    /// yields a degenerate volatility axis.
    pub fn around(params: &BlackScholesParams) -> Self {
        let spot_axis = SweepAxis::linear(
            params.spot * SPOT_DOWN_FACTOR,
            params.spot * SPOT_UP_FACTOR,
            GRID_POINTS,
        );
        let vol_axis = SweepAxis::linear(
            (params.volatility * VOL_DOWN_FACTOR).max(MIN_VOLATILITY),
            params.volatility * VOL_UP_FACTOR,
            GRID_POINTS,
        );
        Self::new(spot_axis, vol_axis)
    }

    /// Spot axis (rows).
    pub fn spot_axis(&self) -> &SweepAxis {
        &self.spot_axis
    }

    /// Volatility axis (columns).
    pub fn vol_axis(&self) -> &SweepAxis {
        &self.vol_axis
    }

    /// Price every cell for both payoffs in a single pass.
    ///
    /// Cell `(i, j)` is priced at spot `i` and volatility `j`; strike,
    /// expiry, rate and dividend yield come from `params`.
    pub fn compute(&self, params: &BlackScholesParams) -> SurfacePair {
        let mut call_rows = Vec::with_capacity(self.spot_axis.len());
        let mut put_rows = Vec::with_capacity(self.spot_axis.len());

        for spot in self.spot_axis.values() {
            let mut call_row = Vec::with_capacity(self.vol_axis.len());
            let mut put_row = Vec::with_capacity(self.vol_axis.len());

            for volatility in self.vol_axis.values() {
                let bs = BlackScholes::new(params.with_spot(spot).with_volatility(volatility));
                call_row.push(bs.price_call());
                put_row.push(bs.price_put());
            }

            call_rows.push(call_row);
            put_rows.push(put_row);
        }

        SurfacePair {
            call: PriceSurface::from_rows(PayoffType::Call, call_rows),
            put: PriceSurface::from_rows(PayoffType::Put, put_rows),
            grid: *self,
        }
    }
}

/// Compute call and put surfaces on the default grid around `params`.
pub fn compute_surfaces(params: &BlackScholesParams) -> SurfacePair {
    SpotVolGrid::around(params).compute(params)
}
