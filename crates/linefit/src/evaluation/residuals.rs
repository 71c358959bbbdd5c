//! Residuals, RMSE, and residual-square geometry.
//!
//! ## Purpose
//!
//! This module computes per-point residuals against a fitted line, the
//! root-mean-square error, and the geometry of the diagnostic squares a
//! renderer draws on the residuals ("least squares" made literal).
//!
//! ## Design notes
//!
//! * **Residual-based**: Everything derives from `y_i - (slope*x_i + b)`.
//! * **Square Convention**: Each square has side `|residual|`, is anchored
//!   at the prediction `(x_i, y_hat_i)`, and extends up-and-left of the
//!   anchor for positive residuals, down-and-right for negative ones, so
//!   exactly one corner touches the regression line. This matches the
//!   reference renderer and must not be mirrored.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `rmse >= 0` for any input.
//! * `square.side == square.residual.abs()`.
//! * The sum of square areas equals `n * rmse^2` up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not draw anything; it only emits coordinates.
//! * This module does not fit the line (algorithms layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::LineCoefficients;

// ============================================================================
// Residuals and RMSE
// ============================================================================

/// Per-point residuals `y_i - y_hat_i` against a fitted line.
pub fn residuals<T: Float>(x: &[T], y: &[T], line: &LineCoefficients<T>) -> Vec<T> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| yi - (line.slope * xi + line.intercept))
        .collect()
}

/// Root-mean-square error of a fitted line over the input points.
pub fn rmse<T: Float>(x: &[T], y: &[T], line: &LineCoefficients<T>) -> T {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return T::zero();
    }
    let n_t = T::from(x.len()).unwrap();
    let mut ss = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let r = yi - (line.slope * xi + line.intercept);
        ss = ss + r * r;
    }
    (ss / n_t).sqrt()
}

// ============================================================================
// Residual Squares
// ============================================================================

/// Geometry of one diagnostic residual square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSquare<T> {
    /// Observed x-value.
    pub x: T,

    /// Observed y-value.
    pub y: T,

    /// Predicted y-value on the fitted line.
    pub predicted: T,

    /// Signed residual `y - predicted`.
    pub residual: T,

    /// Side length of the square, `|residual|`.
    pub side: T,
}

impl<T: Float> ResidualSquare<T> {
    /// Area of the square, the point's squared error.
    #[inline]
    pub fn area(&self) -> T {
        self.side * self.side
    }

    /// The four corner coordinates of the square, starting at the anchor
    /// `(x, predicted)` on the regression line and winding along the
    /// vertical residual edge.
    ///
    /// Positive residuals extend up-and-left of the anchor; negative (and
    /// zero) residuals extend down-and-right.
    pub fn corners(&self) -> [(T, T); 4] {
        let (cx, cy) = (self.x, self.predicted);
        let s = self.side;
        if self.residual > T::zero() {
            [(cx, cy), (cx, cy + s), (cx - s, cy + s), (cx - s, cy)]
        } else {
            [(cx, cy), (cx, cy - s), (cx + s, cy - s), (cx + s, cy)]
        }
    }
}

/// Residual squares for every input point.
pub fn residual_squares<T: Float>(
    x: &[T],
    y: &[T],
    line: &LineCoefficients<T>,
) -> Vec<ResidualSquare<T>> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let predicted = line.slope * xi + line.intercept;
            let residual = yi - predicted;
            ResidualSquare {
                x: xi,
                y: yi,
                predicted,
                residual,
                side: residual.abs(),
            }
        })
        .collect()
}
