//! Ordinary least-squares moments and line solution.
//!
//! ## Purpose
//!
//! This module accumulates the second-order moments of a point set and
//! solves the closed-form ordinary least-squares line through them, plus
//! the Pearson product-moment correlation.
//!
//! ## Design notes
//!
//! * **Population Moments**: Variance and covariance divide by N, not
//!   N - 1. The slope is `Cov(x,y) / Var(x)` with both population-scaled,
//!   which reproduces the reference figures exactly (the scale factors
//!   cancel in the slope, but the convention is kept explicit).
//! * **Two-Pass Accumulation**: Means first, then centered products. All
//!   x-values identical therefore yields an exact zero variance, which is
//!   what the degeneracy check relies on.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `var_x >= 0`, `var_y >= 0` for any input.
//! * `pearson_r` is only called with both variances nonzero and lies in
//!   `[-1, 1]` up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the engine validator).
//! * This module does not compute residual diagnostics (evaluation layer).

// External dependencies
use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Population moments of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Number of points.
    pub n: usize,

    /// Mean of the x-values.
    pub mean_x: T,

    /// Mean of the y-values.
    pub mean_y: T,

    /// Population variance of the x-values.
    pub var_x: T,

    /// Population variance of the y-values.
    pub var_y: T,

    /// Population covariance of x and y.
    pub cov_xy: T,
}

/// Accumulate population moments over paired samples.
///
/// Two passes: means, then centered second moments. Callers guarantee
/// equal, nonzero lengths.
pub fn accumulate_moments<T: Float>(x: &[T], y: &[T]) -> Moments<T> {
    debug_assert_eq!(x.len(), y.len());
    debug_assert!(!x.is_empty());

    let n = x.len();
    let n_t = T::from(n).unwrap();

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    for i in 0..n {
        sum_x = sum_x + x[i];
        sum_y = sum_y + y[i];
    }
    let mean_x = sum_x / n_t;
    let mean_y = sum_y / n_t;

    let mut ss_x = T::zero();
    let mut ss_y = T::zero();
    let mut ss_xy = T::zero();
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        ss_x = ss_x + dx * dx;
        ss_y = ss_y + dy * dy;
        ss_xy = ss_xy + dx * dy;
    }

    Moments {
        n,
        mean_x,
        mean_y,
        var_x: ss_x / n_t,
        var_y: ss_y / n_t,
        cov_xy: ss_xy / n_t,
    }
}

// ============================================================================
// Line Solution
// ============================================================================

/// Coefficients of the fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCoefficients<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,
}

/// Solve the ordinary least-squares line from accumulated moments.
///
/// Callers guarantee `var_x != 0`.
#[inline]
pub fn solve_line<T: Float>(moments: &Moments<T>) -> LineCoefficients<T> {
    debug_assert!(moments.var_x > T::zero());
    let slope = moments.cov_xy / moments.var_x;
    let intercept = moments.mean_y - slope * moments.mean_x;
    LineCoefficients { slope, intercept }
}

/// Pearson product-moment correlation from accumulated moments.
///
/// Callers guarantee both variances are nonzero.
#[inline]
pub fn pearson_r<T: Float>(moments: &Moments<T>) -> T {
    debug_assert!(moments.var_x > T::zero() && moments.var_y > T::zero());
    moments.cov_xy / (moments.var_x * moments.var_y).sqrt()
}
