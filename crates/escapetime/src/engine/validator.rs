//! Input validation for escape-time configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for scan configuration
//! parameters: grid dimensions, the escape bound, the iteration budget, the
//! viewport ranges, and the iteration rule's structure.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A configuration that passes validation can never divide by zero or
//!   loop unboundedly during a scan.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not run the scan itself.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::rule::IterationRule;
use crate::primitives::errors::EscapeError;
use crate::primitives::grid::Viewport;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for escape-time configuration.
///
/// Provides static methods returning `Result<(), EscapeError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate grid dimensions: both axes need at least one sample.
    pub fn validate_dimensions(width: usize, height: usize) -> Result<(), EscapeError> {
        if width == 0 || height == 0 {
            return Err(EscapeError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Validate the escape bound: finite and strictly positive.
    pub fn validate_bound<T: Float>(bound: T) -> Result<(), EscapeError> {
        if !bound.is_finite() || bound <= T::zero() {
            return Err(EscapeError::InvalidBound(bound.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the iteration budget: at least one application.
    pub fn validate_max_iterations(max_iterations: u32) -> Result<(), EscapeError> {
        if max_iterations == 0 {
            return Err(EscapeError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the viewport: finite ranges with min strictly below max.
    pub fn validate_viewport<T: Float>(viewport: &Viewport<T>) -> Result<(), EscapeError> {
        let axes = [
            ("re", viewport.re_min, viewport.re_max),
            ("im", viewport.im_min, viewport.im_max),
        ];
        for (axis, min, max) in axes {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(EscapeError::InvalidViewport {
                    axis,
                    min: min.to_f64().unwrap_or(f64::NAN),
                    max: max.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Validate the iteration rule's structure.
    pub fn validate_rule<T: Float>(rule: &IterationRule<T>) -> Result<(), EscapeError> {
        rule.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Validator::validate_dimensions(0, 10).is_err());
        assert!(Validator::validate_dimensions(10, 0).is_err());
        assert!(Validator::validate_dimensions(1, 1).is_ok());
    }

    #[test]
    fn rejects_nonpositive_bound() {
        assert_eq!(
            Validator::validate_bound(0.0_f64),
            Err(EscapeError::InvalidBound(0.0))
        );
        assert_eq!(
            Validator::validate_bound(-2.0_f64),
            Err(EscapeError::InvalidBound(-2.0))
        );
        assert!(Validator::validate_bound(f64::NAN).is_err());
        assert!(Validator::validate_bound(2.0_f64).is_ok());
    }

    #[test]
    fn rejects_inverted_viewport() {
        let v = Viewport::new(1.0_f64, -1.0, -1.0, 1.0);
        assert!(matches!(
            Validator::validate_viewport(&v),
            Err(EscapeError::InvalidViewport { axis: "re", .. })
        ));
    }
}
