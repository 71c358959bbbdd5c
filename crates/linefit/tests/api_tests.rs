//! Tests for the public line-fit API.
//!
//! These tests exercise the fluent builder, input validation, and the fit
//! figures through the prelude only.

use approx::assert_relative_eq;
use linefit::prelude::*;
use num_traits::Signed;

// ============================================================================
// Exactness Tests
// ============================================================================

/// The canonical perfect line: slope 1, intercept 0, r = 1, rmse = 0,
/// all exact.
#[test]
fn test_perfect_diagonal_is_exact() {
    let result = LinearFit::new()
        .build()
        .unwrap()
        .fit_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])
        .unwrap();
    assert_eq!(result.slope, 1.0);
    assert_eq!(result.intercept, 0.0);
    assert_eq!(result.r, 1.0);
    assert_eq!(result.rmse, 0.0);
    assert_eq!(result.len, 3);
}

/// A shifted, scaled line is still recovered exactly.
#[test]
fn test_affine_line_recovered() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 5.0, 7.0]; // y = 2x + 1
    let result = LinearFit::new().build().unwrap().fit(&x, &y).unwrap();
    assert_eq!(result.slope, 2.0);
    assert_eq!(result.intercept, 1.0);
    assert_relative_eq!(result.r, 1.0, max_relative = 1e-12);
    assert_relative_eq!(result.rmse, 0.0, epsilon = 1e-12);
}

/// Prediction uses the fitted coefficients.
#[test]
fn test_predict_on_fitted_line() {
    let result = LinearFit::new()
        .build()
        .unwrap()
        .fit(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0])
        .unwrap();
    assert_eq!(result.predict(10.0), 21.0);
}

// ============================================================================
// Scattered Data Tests
// ============================================================================

/// Scattered data keeps r in [-1, 1] and rmse non-negative.
#[test]
fn test_scattered_data_bounds() {
    let result = LinearFit::new()
        .build()
        .unwrap()
        .fit_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.5), (0.5, 1.0), (3.0, 0.25)])
        .unwrap();
    assert!(result.r >= -1.0 && result.r <= 1.0);
    assert!(result.rmse >= 0.0);
}

/// Reference figures computed against numpy (bias=True covariance):
/// points (1,2), (2,1), (3,4), (4,3).
#[test]
fn test_reference_figures() {
    let result = LinearFit::new()
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0, 4.0], &[2.0, 1.0, 4.0, 3.0])
        .unwrap();
    assert_relative_eq!(result.slope, 0.6, max_relative = 1e-12);
    assert_relative_eq!(result.intercept, 1.0, max_relative = 1e-12);
    assert_relative_eq!(result.r, 0.6, max_relative = 1e-12);
    assert_relative_eq!(result.rmse, (0.8_f64).sqrt(), max_relative = 1e-12);
}

/// Fitting twice yields bit-identical results; the fit is a pure function.
#[test]
fn test_fit_is_idempotent() {
    let x = [0.3, 1.7, 2.2, 4.9, 5.1];
    let y = [1.1, 2.3, 2.2, 5.6, 4.9];
    let model = LinearFit::new().residuals().build().unwrap();
    let first = model.fit(&x, &y).unwrap();
    let second = model.fit(&x, &y).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Fewer than two points cannot define a line.
#[test]
fn test_too_few_points() {
    let model = LinearFit::new().build().unwrap();
    assert_eq!(
        model.fit::<f64>(&[], &[]),
        Err(FitError::EmptyInput)
    );
    assert_eq!(
        model.fit(&[1.0], &[1.0]),
        Err(FitError::TooFewPoints { got: 1, min: 2 })
    );
}

/// Mismatched input lengths are rejected with both lengths reported.
#[test]
fn test_mismatched_lengths() {
    let model = LinearFit::new().build().unwrap();
    assert_eq!(
        model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(FitError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
}

/// A vertical point set (all x equal) is an explicit error, not NaN.
#[test]
fn test_degenerate_x_variance() {
    let model = LinearFit::new().build().unwrap();
    let err = model.fit_points(&[(1.0, 1.0), (1.0, 2.0)]).unwrap_err();
    assert_eq!(err, FitError::DegenerateVariance { axis: "x" });
}

/// A horizontal point set (all y equal) has undefined correlation.
#[test]
fn test_degenerate_y_variance() {
    let model = LinearFit::new().build().unwrap();
    let err = model.fit(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap_err();
    assert_eq!(err, FitError::DegenerateVariance { axis: "y" });
}

/// Non-finite samples are rejected with their index.
#[test]
fn test_non_finite_samples() {
    let model = LinearFit::new().build().unwrap();
    let err = model.fit(&[0.0, f64::NAN], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, FitError::InvalidNumericValue(_)));
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

/// Residual squares carry |residual| sides and their summed area matches
/// n * rmse^2.
#[test]
fn test_residual_square_diagnostics() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.2, 0.9, 2.1, 2.8];
    let result = LinearFit::new()
        .residuals()
        .residual_squares()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let residuals = result.residuals.as_ref().unwrap();
    let squares = result.residual_squares.as_ref().unwrap();
    assert_eq!(residuals.len(), 4);
    assert_eq!(squares.len(), 4);

    for (r, sq) in residuals.iter().zip(squares) {
        assert_eq!(sq.residual, *r);
        assert_eq!(sq.side, r.abs());
    }

    let total = result.sum_of_square_areas().unwrap();
    assert_relative_eq!(total, 4.0 * result.rmse * result.rmse, max_relative = 1e-12);
}

/// Squares sit on the correct side of the regression line.
#[test]
fn test_residual_square_orientation() {
    let result = LinearFit::new()
        .residual_squares()
        .build()
        .unwrap()
        .fit(&[0.0, 1.0, 2.0, 3.0], &[0.5, 0.5, 2.5, 2.5])
        .unwrap();

    for sq in result.residual_squares.as_ref().unwrap() {
        let corners = sq.corners();
        let anchor = corners[0];
        assert_eq!(anchor, (sq.x, sq.predicted));
        if sq.residual > 0.0 {
            // Above the line: corners never dip below the prediction.
            assert!(corners.iter().all(|&(_, cy)| cy >= sq.predicted));
        } else {
            assert!(corners.iter().all(|&(_, cy)| cy <= sq.predicted));
        }
    }
}

/// Duplicate builder flags are rejected.
#[test]
fn test_duplicate_flag_detected() {
    let err = LinearFit::new().residuals().residuals().build().unwrap_err();
    assert_eq!(
        err,
        FitError::DuplicateParameter {
            parameter: "residuals"
        }
    );
}

/// The Display report carries the fitted equation.
#[test]
fn test_display_report() {
    let result = LinearFit::new()
        .build()
        .unwrap()
        .fit(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0])
        .unwrap();
    let text = format!("{result}");
    assert!(text.contains("y = 2.0000x + 1.0000"));
    assert!(text.contains("RMSE"));
}

/// f32 precision works end to end.
#[test]
fn test_f32_precision() {
    let result = LinearFit::new()
        .build()
        .unwrap()
        .fit(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 1.0, 2.0])
        .unwrap();
    assert_eq!(result.slope, 1.0_f32);
    assert_eq!(result.r, 1.0_f32);
}
