//! Fit execution engine.
//!
//! ## Purpose
//!
//! This module runs a complete fit: validation, moment accumulation,
//! degeneracy checks, the line solution, correlation, RMSE, and any
//! requested diagnostics.
//!
//! ## Design notes
//!
//! * **Pipeline Order**: Cheap shape checks run before any arithmetic;
//!   variance checks run on the accumulated moments before any division.
//! * **Purity**: No state survives a call. The same inputs always produce
//!   bit-identical results.
//!
//! ## Non-goals
//!
//! * This module does not expose configuration; the API layer owns that.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::{accumulate_moments, pearson_r, solve_line};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::evaluation::residuals::{residual_squares, residuals, rmse};
use crate::primitives::errors::FitError;

// ============================================================================
// Fit Configuration
// ============================================================================

/// Which optional diagnostics a fit should attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitConfig {
    /// Attach per-point residuals.
    pub compute_residuals: bool,

    /// Attach residual-square geometry.
    pub compute_residual_squares: bool,
}

// ============================================================================
// Fit Executor
// ============================================================================

/// Executor for ordinary least-squares fits.
pub struct FitExecutor;

impl FitExecutor {
    /// Run a complete fit over paired samples.
    pub fn run<T: Float>(x: &[T], y: &[T], config: &FitConfig) -> Result<FitResult<T>, FitError> {
        Validator::validate_inputs(x, y)?;

        let moments = accumulate_moments(x, y);
        Validator::validate_variances(&moments)?;

        let line = solve_line(&moments);
        let r = pearson_r(&moments);
        let rmse = rmse(x, y, &line);

        Ok(FitResult {
            slope: line.slope,
            intercept: line.intercept,
            r,
            rmse,
            len: moments.n,
            residuals: config
                .compute_residuals
                .then(|| residuals(x, y, &line)),
            residual_squares: config
                .compute_residual_squares
                .then(|| residual_squares(x, y, &line)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_line_is_exact() {
        let result =
            FitExecutor::run(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &FitConfig::default()).unwrap();
        assert_eq!(result.slope, 1.0);
        assert_eq!(result.intercept, 0.0);
        assert_eq!(result.r, 1.0);
        assert_eq!(result.rmse, 0.0);
    }

    #[test]
    fn degenerate_x_is_an_error_not_nan() {
        let err = FitExecutor::run(&[1.0, 1.0], &[1.0, 2.0], &FitConfig::default()).unwrap_err();
        assert_eq!(err, FitError::DegenerateVariance { axis: "x" });
    }

    #[test]
    fn diagnostics_only_appear_when_requested() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.1, 0.9, 2.2, 2.8];

        let bare = FitExecutor::run(&x, &y, &FitConfig::default()).unwrap();
        assert!(bare.residuals.is_none());
        assert!(bare.residual_squares.is_none());

        let full = FitExecutor::run(
            &x,
            &y,
            &FitConfig {
                compute_residuals: true,
                compute_residual_squares: true,
            },
        )
        .unwrap();
        assert_eq!(full.residuals.as_ref().unwrap().len(), 4);
        assert_eq!(full.residual_squares.as_ref().unwrap().len(), 4);
    }
}
