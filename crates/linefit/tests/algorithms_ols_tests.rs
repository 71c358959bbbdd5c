#![cfg(feature = "dev")]
//! Tests for the OLS internals.
//!
//! These tests reach through the `dev` internals to verify the moment
//! accumulation and the closed-form solution directly:
//! - Population (divide-by-N) scaling of variance and covariance
//! - Order independence of the accumulated moments
//! - Exact zero variance for constant axes

use approx::assert_relative_eq;

use linefit::internals::algorithms::ols::{accumulate_moments, pearson_r, solve_line};
use linefit::internals::engine::validator::Validator;
use linefit::internals::primitives::errors::FitError;

// ============================================================================
// Moment Accumulation Tests
// ============================================================================

/// Population scaling divides by N, matching `np.cov(x, y, bias=True)`.
#[test]
fn test_population_scaling() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.0, 1.0, 4.0, 3.0];
    let m = accumulate_moments(&x, &y);
    assert_relative_eq!(m.var_x, 1.25);
    assert_relative_eq!(m.var_y, 1.25);
    assert_relative_eq!(m.cov_xy, 0.75);
}

/// The fit is order-independent: moments are symmetric sums.
#[test]
fn test_order_independence() {
    let forward = accumulate_moments(&[1.0, 2.0, 3.0], &[4.0, 6.0, 5.0]);
    let backward = accumulate_moments(&[3.0, 2.0, 1.0], &[5.0, 6.0, 4.0]);
    assert_relative_eq!(forward.cov_xy, backward.cov_xy, max_relative = 1e-15);
    assert_relative_eq!(forward.var_x, backward.var_x, max_relative = 1e-15);
    let a = solve_line(&forward);
    let b = solve_line(&backward);
    assert_relative_eq!(a.slope, b.slope, max_relative = 1e-15);
    assert_relative_eq!(a.intercept, b.intercept, max_relative = 1e-15);
}

/// Two-pass accumulation makes a constant axis exactly zero-variance,
/// which the validator turns into an explicit error.
#[test]
fn test_constant_axis_is_exactly_degenerate() {
    let m = accumulate_moments(&[7.5, 7.5, 7.5], &[1.0, 2.0, 3.0]);
    assert_eq!(m.var_x, 0.0);
    assert_eq!(
        Validator::validate_variances(&m),
        Err(FitError::DegenerateVariance { axis: "x" })
    );
}

// ============================================================================
// Correlation Tests
// ============================================================================

/// Correlation is scale- and shift-invariant.
#[test]
fn test_correlation_invariance() {
    let x = [1.0, 2.0, 3.0, 5.0];
    let y = [2.0, 2.5, 4.0, 4.5];
    let r_raw = pearson_r(&accumulate_moments(&x, &y));

    let x_t: Vec<f64> = x.iter().map(|v| 3.0 * v - 10.0).collect();
    let y_t: Vec<f64> = y.iter().map(|v| 0.5 * v + 7.0).collect();
    let r_t = pearson_r(&accumulate_moments(&x_t, &y_t));

    assert_relative_eq!(r_raw, r_t, max_relative = 1e-12);
}

/// Negating one axis negates the correlation.
#[test]
fn test_correlation_sign() {
    let x = [1.0, 2.0, 3.0, 5.0];
    let y = [2.0, 2.5, 4.0, 4.5];
    let r = pearson_r(&accumulate_moments(&x, &y));

    let y_neg: Vec<f64> = y.iter().map(|v| -v).collect();
    let r_neg = pearson_r(&accumulate_moments(&x, &y_neg));

    assert_relative_eq!(r, -r_neg, max_relative = 1e-12);
    assert!(r > 0.0 && r <= 1.0);
}
