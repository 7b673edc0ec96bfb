//! Price surfaces produced by a scenario grid.

use pricer_models::instruments::PayoffType;

use super::grid::SpotVolGrid;

/// Row-major price matrix for a single payoff.
///
/// Rows follow the spot axis, columns follow the volatility axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSurface {
    payoff: PayoffType,
    values: Vec<Vec<f64>>,
}

impl PriceSurface {
    /// Wrap a matrix of prices.
    pub fn from_rows(payoff: PayoffType, values: Vec<Vec<f64>>) -> Self {
        Self { payoff, values }
    }

    /// Payoff this surface was priced for.
    pub fn payoff(&self) -> PayoffType {
        self.payoff
    }

    /// Number of rows (spot samples).
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// Number of columns (volatility samples); zero for an empty surface.
    pub fn cols(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Price at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// All rows, for renderers that take a plain matrix.
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.values
    }
}

/// Call and put surfaces from the same computation pass.
///
/// The pair is only ever built whole by
/// [`SpotVolGrid::compute`], so the two surfaces always share a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePair {
    /// Call prices
    pub call: PriceSurface,
    /// Put prices
    pub put: PriceSurface,
    /// Grid both surfaces were priced on
    pub grid: SpotVolGrid,
}

impl SurfacePair {
    /// Surface for the given payoff.
    pub fn surface(&self, payoff: PayoffType) -> &PriceSurface {
        match payoff {
            PayoffType::Call => &self.call,
            PayoffType::Put => &self.put,
        }
    }
}
