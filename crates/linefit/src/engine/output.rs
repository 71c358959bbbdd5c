//! Output types for fit operations.
//!
//! ## Purpose
//!
//! This module defines the [`FitResult`] struct: the fitted line, its
//! correlation and error figures, and any requested diagnostics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>` and are
//!   only populated when requested at build time.
//! * **Ergonomics**: Implements `Display` rendering the fitted equation,
//!   r, and RMSE, in the style of the classic report
//!   (`y = 2.00x + 1.00`).
//! * **Purity**: A result is a plain value; nothing is cached between
//!   fits, and refitting the same data reproduces it bit for bit.
//!
//! ## Invariants
//!
//! * `r` lies in `[-1, 1]` up to rounding; `rmse >= 0`.
//! * Populated diagnostic vectors have one entry per input point.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not plot anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::residuals::ResidualSquare;

// ============================================================================
// Fit Result
// ============================================================================

/// Ordinary least-squares fit of a point set.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Pearson product-moment correlation of x and y.
    pub r: T,

    /// Root-mean-square error of the fit.
    pub rmse: T,

    /// Number of points fitted.
    pub len: usize,

    /// Per-point residuals, when requested.
    pub residuals: Option<Vec<T>>,

    /// Residual-square geometry, when requested.
    pub residual_squares: Option<Vec<ResidualSquare<T>>>,
}

impl<T: Float> FitResult<T> {
    /// Predicted y-value on the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Sum of the residual-square areas, when squares were requested.
    ///
    /// Equals `len * rmse^2` up to rounding.
    pub fn sum_of_square_areas(&self) -> Option<T> {
        self.residual_squares.as_ref().map(|squares| {
            squares
                .iter()
                .fold(T::zero(), |acc, square| acc + square.area())
        })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sign = if self.intercept >= T::zero() { '+' } else { '-' };
        writeln!(f, "Linear fit ({} points):", self.len)?;
        writeln!(
            f,
            "  y = {:.4}x {} {:.4}",
            self.slope,
            sign,
            self.intercept.abs()
        )?;
        writeln!(f, "  r:    {:.4}", self.r)?;
        writeln!(f, "  RMSE: {:.4}", self.rmse)?;
        Ok(())
    }
}
