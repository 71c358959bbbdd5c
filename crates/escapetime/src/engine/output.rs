//! Output types for escape-time scans.
//!
//! ## Purpose
//!
//! This module defines the [`EscapeMap`] struct: the row-major matrix of
//! per-cell classifications produced by a scan, together with the
//! configuration that produced it.
//!
//! ## Design notes
//!
//! * **Row-Major**: Cell `(row, col)` lives at `row * width + col`, so the
//!   map can be handed to a raster renderer without reshaping.
//! * **Self-Describing**: The map carries the bound and iteration budget
//!   used, so a colormap can normalize against the budget.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `cells.len() == width * height`.
//! * Every `Escaped(k)` cell satisfies `1 <= k < max_iterations`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not map cells to colors or pixels.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ScanConfig;
use crate::primitives::cell::Escape;
use crate::primitives::grid::Viewport;

// ============================================================================
// Escape Map
// ============================================================================

/// Row-major matrix of escape classifications for one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeMap<T> {
    width: usize,
    height: usize,
    cells: Vec<Escape>,

    /// Viewport the scan sampled.
    pub viewport: Viewport<T>,

    /// Escape bound the scan used.
    pub bound: T,

    /// Iteration budget the scan used.
    pub max_iterations: u32,
}

impl<T: Float> EscapeMap<T> {
    /// Package scanned cells with their configuration.
    pub(crate) fn new(config: &ScanConfig<T>, cells: Vec<Escape>) -> Self {
        debug_assert_eq!(cells.len(), config.grid.len());
        Self {
            width: config.grid.width,
            height: config.grid.height,
            cells,
            viewport: config.grid.viewport,
            bound: config.bound,
            max_iterations: config.max_iterations,
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Grid width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Classification of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range; use [`Self::get`] for a
    /// checked lookup.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Escape {
        assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Checked lookup of cell `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Escape> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Escape]> {
        self.cells.chunks(self.width)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Escape] {
        &self.cells
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Number of cells whose orbit escaped within the budget.
    pub fn escaped_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_escaped()).count()
    }

    /// Number of cells whose orbit stayed bounded.
    pub fn bounded_count(&self) -> usize {
        self.cells.len() - self.escaped_count()
    }

    /// Largest escape count in the map, if any cell escaped.
    pub fn max_escape_iterations(&self) -> Option<u32> {
        self.cells.iter().filter_map(|cell| cell.iterations()).max()
    }

    /// Export the legacy raster convention: bounded cells as 0, escaped
    /// cells as their iteration count, row-major.
    pub fn to_iteration_counts(&self) -> Vec<u32> {
        self.cells.iter().map(|cell| cell.to_index()).collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for EscapeMap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Escape map:")?;
        writeln!(f, "  Grid: {}x{}", self.width, self.height)?;
        writeln!(
            f,
            "  Viewport: [{}, {}] x [{}, {}]",
            self.viewport.re_min, self.viewport.re_max, self.viewport.im_min, self.viewport.im_max
        )?;
        writeln!(f, "  Bound: {}", self.bound)?;
        writeln!(f, "  Max iterations: {}", self.max_iterations)?;
        writeln!(
            f,
            "  Escaped: {}/{} cells",
            self.escaped_count(),
            self.cells.len()
        )?;
        Ok(())
    }
}
