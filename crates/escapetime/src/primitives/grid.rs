//! Complex-plane viewport and sample-grid geometry.
//!
//! ## Purpose
//!
//! This module defines the rectangular window of the complex plane that a
//! scan samples, and the mapping from integer grid coordinates to complex
//! sample points.
//!
//! ## Design notes
//!
//! * **Linspace Semantics**: Each axis is sampled at `n` evenly spaced
//!   points including both endpoints; a 1-wide axis samples the range start.
//! * **Immutability**: A viewport is plain data and never changes after
//!   construction.
//! * **Generics**: Coordinates are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `re_min < re_max` and `im_min < im_max` for any validated viewport.
//! * `sample(row, col)` for `row < height`, `col < width` always lands
//!   inside the closed viewport rectangle.
//!
//! ## Non-goals
//!
//! * This module does not validate ranges (handled by the engine validator).
//! * This module does not iterate orbits or classify cells.

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// ============================================================================
// Viewport
// ============================================================================

/// Rectangular sampling window over the complex plane.
///
/// The default window is the square `[-2, 2] x [-2, 2]`, which contains the
/// Mandelbrot set with comfortable margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport<T> {
    /// Lower end of the real axis range.
    pub re_min: T,

    /// Upper end of the real axis range.
    pub re_max: T,

    /// Lower end of the imaginary axis range.
    pub im_min: T,

    /// Upper end of the imaginary axis range.
    pub im_max: T,
}

impl<T: Float> Default for Viewport<T> {
    fn default() -> Self {
        let two = T::from(2.0).unwrap();
        Self {
            re_min: -two,
            re_max: two,
            im_min: -two,
            im_max: two,
        }
    }
}

impl<T: Float> Viewport<T> {
    /// Create a viewport from explicit axis ranges.
    pub fn new(re_min: T, re_max: T, im_min: T, im_max: T) -> Self {
        Self {
            re_min,
            re_max,
            im_min,
            im_max,
        }
    }
}

// ============================================================================
// Sample Grid
// ============================================================================

/// A `width x height` sampling of a viewport.
///
/// Row `i`, column `j` maps to the complex point `re[j] + i*im[i]` where
/// `re` and `im` are linspace samplings of the viewport axis ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid<T> {
    /// Viewport being sampled.
    pub viewport: Viewport<T>,

    /// Samples along the real axis (columns).
    pub width: usize,

    /// Samples along the imaginary axis (rows).
    pub height: usize,
}

impl<T: Float> SampleGrid<T> {
    /// Create a sample grid over a viewport.
    pub fn new(viewport: Viewport<T>, width: usize, height: usize) -> Self {
        Self {
            viewport,
            width,
            height,
        }
    }

    /// Linspace coordinate: `min + (max - min) * i / (n - 1)`.
    ///
    /// A single-sample axis yields the range start, matching numpy's
    /// `linspace(a, b, 1) == [a]`.
    #[inline]
    fn axis_value(min: T, max: T, i: usize, n: usize) -> T {
        if n <= 1 {
            return min;
        }
        let t = T::from(i).unwrap() / T::from(n - 1).unwrap();
        min + (max - min) * t
    }

    /// Real coordinate of column `col`.
    #[inline]
    pub fn re_at(&self, col: usize) -> T {
        Self::axis_value(self.viewport.re_min, self.viewport.re_max, col, self.width)
    }

    /// Imaginary coordinate of row `row`.
    #[inline]
    pub fn im_at(&self, row: usize) -> T {
        Self::axis_value(self.viewport.im_min, self.viewport.im_max, row, self.height)
    }

    /// Complex sample point at grid coordinates `(row, col)`.
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> Complex<T> {
        Complex::new(self.re_at(col), self.im_at(row))
    }

    /// Total number of samples in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid contains no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
