//! Input validation for line fitting.
//!
//! ## Purpose
//!
//! This module provides validation functions for the input point set and
//! for the accumulated moments: array shape, minimum cardinality, finite
//! values, and nonzero variance.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Inputs that pass `validate_inputs` have equal lengths, at least two
//!   points, and only finite values.
//! * Moments that pass `validate_variances` divide safely in the line
//!   solution and the correlation.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::Moments;
use crate::primitives::errors::FitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for line-fit inputs.
///
/// Provides static methods returning `Result<(), FitError>` that fail fast
/// upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate input arrays for a regression fit.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(FitError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for a line
        if n < 2 {
            return Err(FitError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate accumulated moments: both axes must vary for the slope and
    /// the correlation to be defined.
    pub fn validate_variances<T: Float>(moments: &Moments<T>) -> Result<(), FitError> {
        if moments.var_x <= T::zero() {
            return Err(FitError::DegenerateVariance { axis: "x" });
        }
        if moments.var_y <= T::zero() {
            return Err(FitError::DegenerateVariance { axis: "y" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::ols::accumulate_moments;

    #[test]
    fn rejects_short_and_mismatched_inputs() {
        assert_eq!(
            Validator::validate_inputs::<f64>(&[], &[]),
            Err(FitError::EmptyInput)
        );
        assert_eq!(
            Validator::validate_inputs(&[1.0], &[1.0, 2.0]),
            Err(FitError::MismatchedInputs { x_len: 1, y_len: 2 })
        );
        assert_eq!(
            Validator::validate_inputs(&[1.0], &[1.0]),
            Err(FitError::TooFewPoints { got: 1, min: 2 })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Validator::validate_inputs(&[0.0, f64::NAN], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, FitError::InvalidNumericValue(_)));

        let err = Validator::validate_inputs(&[0.0, 1.0], &[0.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, FitError::InvalidNumericValue(_)));
    }

    #[test]
    fn flags_zero_variance_axes() {
        let vertical = accumulate_moments(&[1.0, 1.0], &[1.0, 2.0]);
        assert_eq!(
            Validator::validate_variances(&vertical),
            Err(FitError::DegenerateVariance { axis: "x" })
        );

        let horizontal = accumulate_moments(&[1.0, 2.0], &[3.0, 3.0]);
        assert_eq!(
            Validator::validate_variances(&horizontal),
            Err(FitError::DegenerateVariance { axis: "y" })
        );
    }
}
