//! Iteration rules for escape-time scans.
//!
//! ## Purpose
//!
//! This module defines the map applied once per orbit step,
//! `z_{k+1} = rule(z_k, c)`. The default rule is the Mandelbrot map
//! `z^2 + c`; generalized power maps `z^n + c` and arbitrary closed
//! expressions are also supported.
//!
//! ## Design notes
//!
//! * **Fast Path**: Exponent 2 squares by direct multiplication; other
//!   integer exponents use exact repeated multiplication.
//! * **Structural Validation**: Custom expressions must read both `z` and
//!   `c`, checked once at configuration time rather than per cell.
//! * **Fallible Application**: Non-finite results abort with
//!   `RuleEvaluation` so a scan can never fill a partial map silently.
//!
//! ## Invariants
//!
//! * `apply` is a pure function of `(rule, z, c)`.
//! * A rule that passes `validate` has a finite, nonzero exponent at every
//!   `Pow` node and reads both variables.
//!
//! ## Non-goals
//!
//! * This module does not iterate orbits (handled by the engine executor).
//! * This module does not parse formula text.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// Internal dependencies
use crate::math::expr::{complex_pow, Expr, Var};
use crate::primitives::errors::EscapeError;

// ============================================================================
// Iteration Rule
// ============================================================================

/// The map applied once per orbit step.
#[derive(Debug, Clone, PartialEq)]
pub enum IterationRule<T> {
    /// `z^n + c` for a real exponent `n` (the Mandelbrot map when `n = 2`).
    PowerMap {
        /// Exponent of the power map.
        exponent: T,
    },

    /// Arbitrary closed expression over `z` and `c`.
    Expression(Expr<T>),
}

impl<T: Float> Default for IterationRule<T> {
    fn default() -> Self {
        Self::mandelbrot()
    }
}

impl<T: Float> IterationRule<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// The classic Mandelbrot map `z^2 + c`.
    pub fn mandelbrot() -> Self {
        Self::PowerMap {
            exponent: T::from(2.0).unwrap(),
        }
    }

    /// The generalized power map `z^n + c`.
    pub fn power_map(exponent: T) -> Self {
        Self::PowerMap { exponent }
    }

    /// A custom closed-expression rule.
    pub fn expression(expr: Expr<T>) -> Self {
        Self::Expression(expr)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the rule's structure once, before any scan.
    pub fn validate(&self) -> Result<(), EscapeError> {
        match self {
            Self::PowerMap { exponent } => {
                if !exponent.is_finite() || *exponent == T::zero() {
                    return Err(EscapeError::InvalidExponent(
                        exponent.to_f64().unwrap_or(f64::NAN),
                    ));
                }
                Ok(())
            }
            Self::Expression(expr) => {
                if !expr.depends_on(Var::Z) {
                    return Err(EscapeError::IncompleteRule { missing: "z" });
                }
                if !expr.depends_on(Var::C) {
                    return Err(EscapeError::IncompleteRule { missing: "c" });
                }
                let mut bad = None;
                expr.for_each_exponent(&mut |e: T| {
                    if bad.is_none() && !e.is_finite() {
                        bad = Some(e);
                    }
                });
                if let Some(e) = bad {
                    return Err(EscapeError::InvalidExponent(e.to_f64().unwrap_or(f64::NAN)));
                }
                Ok(())
            }
        }
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Apply the rule once: `rule(z, c)`.
    #[inline]
    pub fn apply(&self, z: Complex<T>, c: Complex<T>) -> Result<Complex<T>, EscapeError> {
        match self {
            Self::PowerMap { exponent } => {
                let two = T::from(2.0).unwrap();
                let powered = if *exponent == two {
                    z * z
                } else {
                    complex_pow(z, *exponent)
                };
                let next = powered + c;
                if next.re.is_finite() && next.im.is_finite() {
                    Ok(next)
                } else {
                    Err(EscapeError::RuleEvaluation(format!(
                        "power map produced a non-finite value at c={}+{}i",
                        c.re.to_f64().unwrap_or(f64::NAN),
                        c.im.to_f64().unwrap_or(f64::NAN),
                    )))
                }
            }
            Self::Expression(expr) => expr.eval(z, c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_is_the_mandelbrot_map() {
        let rule: IterationRule<f64> = IterationRule::default();
        let c = Complex::new(0.25, 0.5);
        let z = Complex::new(-1.0, 1.0);
        assert_eq!(rule.apply(z, c).unwrap(), z * z + c);
    }

    #[test]
    fn power_map_matches_expression_form() {
        let rule = IterationRule::power_map(3.0);
        let expr = IterationRule::expression(Expr::z().pow(3.0).add(Expr::c()));
        let c = Complex::new(0.1, 0.2);
        let z = Complex::new(0.3, -0.4);
        let a = rule.apply(z, c).unwrap();
        let b = expr.apply(z, c).unwrap();
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn expression_must_read_both_variables() {
        let z_only: IterationRule<f64> = IterationRule::expression(Expr::z().pow(2.0));
        assert_eq!(
            z_only.validate(),
            Err(EscapeError::IncompleteRule { missing: "c" })
        );

        let c_only: IterationRule<f64> = IterationRule::expression(Expr::c());
        assert_eq!(
            c_only.validate(),
            Err(EscapeError::IncompleteRule { missing: "z" })
        );
    }

    #[test]
    fn zero_exponent_is_rejected() {
        let rule: IterationRule<f64> = IterationRule::power_map(0.0);
        assert_eq!(rule.validate(), Err(EscapeError::InvalidExponent(0.0)));
    }
}
