//! Integration tests for the spot × volatility surface engine.

use approx::assert_relative_eq;
use pricer_models::analytical::BlackScholesParams;
use pricer_risk::scenarios::{compute_surfaces, GRID_POINTS};
use proptest::prelude::*;

fn default_params() -> BlackScholesParams {
    BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2)
}

#[test]
fn test_surfaces_are_twenty_by_twenty() {
    let pair = compute_surfaces(&default_params());
    assert_eq!(GRID_POINTS, 20);
    for surface in [&pair.call, &pair.put] {
        assert_eq!(surface.rows(), 20);
        assert_eq!(surface.cols(), 20);
        assert!(surface.as_rows().iter().all(|row| row.len() == 20));
    }
}

#[test]
fn test_spot_axis_endpoints() {
    let params = default_params().with_spot(250.0);
    let pair = compute_surfaces(&params);
    let spot = pair.grid.spot_axis();
    assert_relative_eq!(spot.value(0), 0.8 * 250.0, epsilon = 1e-9);
    assert_relative_eq!(spot.value(19), 1.2 * 250.0, epsilon = 1e-9);
}

#[test]
fn test_recompute_is_bit_identical() {
    let params = default_params();
    let first = compute_surfaces(&params);
    let second = compute_surfaces(&params);

    for (a, b) in [(&first.call, &second.call), (&first.put, &second.put)] {
        for (row_a, row_b) in a.as_rows().iter().zip(b.as_rows()) {
            for (x, y) in row_a.iter().zip(row_b) {
                assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }
}

#[test]
fn test_zero_volatility_still_yields_full_grid() {
    let pair = compute_surfaces(&default_params().with_volatility(0.0));
    assert!(pair.grid.vol_axis().is_degenerate());
    assert_eq!(pair.call.rows(), 20);
    assert_eq!(pair.put.cols(), 20);
    assert_eq!(pair.grid.vol_axis().start(), 0.01);
    assert_eq!(pair.grid.vol_axis().end(), 0.0);
    // First column sits on the 0.01 floor and prices normally.
    assert!(pair.call.get(10, 0).is_some_and(f64::is_finite));
}

proptest! {
    #[test]
    fn prop_shape_and_parity_hold_on_every_cell(
        spot in 10.0f64..300.0,
        strike in 10.0f64..300.0,
        volatility in 0.02f64..1.0,
    ) {
        let params = BlackScholesParams::new(spot, strike, 1.0, 0.05, 0.02, volatility);
        let pair = compute_surfaces(&params);
        prop_assert_eq!(pair.call.rows(), GRID_POINTS);
        prop_assert_eq!(pair.put.cols(), GRID_POINTS);

        let discount = (-0.05f64).exp();
        let dividend_discount = (-0.02f64).exp();
        for (i, s) in pair.grid.spot_axis().values().enumerate() {
            let forward = s * dividend_discount - strike * discount;
            for j in 0..GRID_POINTS {
                let call = pair.call.get(i, j).unwrap();
                let put = pair.put.get(i, j).unwrap();
                prop_assert!((call - put - forward).abs() < 1e-8 * (1.0 + s + strike));
            }
        }
    }
}
