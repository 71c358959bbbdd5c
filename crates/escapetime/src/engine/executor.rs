//! Grid-scan execution engine.
//!
//! ## Purpose
//!
//! This module runs the escape-time iteration over every cell of the sample
//! grid and collects the per-cell classifications into an [`EscapeMap`].
//!
//! ## Design notes
//!
//! * **Independence**: No cell depends on another; rows are scanned over
//!   disjoint `&mut` slices of the output buffer, so no synchronization is
//!   needed beyond final assembly.
//! * **Parallelism**: With the `parallel` feature, rows are distributed
//!   across CPU cores via `rayon`; completion order is irrelevant because
//!   each row writes only its own slice and grid coordinates are preserved.
//! * **Abort Semantics**: The first rule-evaluation failure cancels the
//!   whole scan; a partial map is never returned.
//! * **Termination**: The iteration budget hard-bounds every orbit, so no
//!   timeout is needed.
//!
//! ## Key concepts
//!
//! * **Escape Loop**: `z = 0`; while `|z| < bound` and fewer than
//!   `max_iterations` applications, apply the rule. Cells that exhaust the
//!   budget are `Bounded`; all others record the application count at which
//!   the orbit first left the bound.
//!
//! ## Invariants
//!
//! * Sequential and parallel scans produce identical maps.
//! * The output buffer is row-major: cell `(row, col)` lives at
//!   `row * width + col`.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not color or render cells.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::rule::IterationRule;
use crate::engine::output::EscapeMap;
use crate::primitives::cell::Escape;
use crate::primitives::errors::EscapeError;
use crate::primitives::grid::SampleGrid;

// ============================================================================
// Scan Configuration
// ============================================================================

/// Fully validated configuration for one escape-time scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig<T> {
    /// Sample grid over the viewport.
    pub grid: SampleGrid<T>,

    /// Escape bound on the orbit modulus.
    pub bound: T,

    /// Maximum number of rule applications per cell.
    pub max_iterations: u32,

    /// Iteration rule applied per orbit step.
    pub rule: IterationRule<T>,
}

// ============================================================================
// Scan Executor
// ============================================================================

/// Executor for escape-time scans.
pub struct ScanExecutor;

impl ScanExecutor {
    /// Run a scan with the best available strategy.
    ///
    /// Uses the row-parallel path when the `parallel` feature is enabled,
    /// the sequential path otherwise. Both produce identical maps.
    #[cfg(feature = "parallel")]
    pub fn run<T>(config: &ScanConfig<T>) -> Result<EscapeMap<T>, EscapeError>
    where
        T: Float + Send + Sync,
    {
        let width = config.grid.width;
        let mut cells = vec![Escape::Bounded; config.grid.len()];

        cells
            .par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(row, out)| scan_row(config, row, out))?;

        Ok(EscapeMap::new(config, cells))
    }

    /// Run a scan with the best available strategy.
    #[cfg(not(feature = "parallel"))]
    pub fn run<T>(config: &ScanConfig<T>) -> Result<EscapeMap<T>, EscapeError>
    where
        T: Float,
    {
        Self::run_sequential(config)
    }

    /// Run a scan strictly sequentially, row by row.
    pub fn run_sequential<T>(config: &ScanConfig<T>) -> Result<EscapeMap<T>, EscapeError>
    where
        T: Float,
    {
        let width = config.grid.width;
        let mut cells = vec![Escape::Bounded; config.grid.len()];

        for (row, out) in cells.chunks_mut(width).enumerate() {
            scan_row(config, row, out)?;
        }

        Ok(EscapeMap::new(config, cells))
    }
}

// ============================================================================
// Row and Cell Scans
// ============================================================================

/// Scan one grid row into its output slice.
fn scan_row<T: Float>(
    config: &ScanConfig<T>,
    row: usize,
    out: &mut [Escape],
) -> Result<(), EscapeError> {
    let im = config.grid.im_at(row);
    for (col, cell) in out.iter_mut().enumerate() {
        let c = Complex::new(config.grid.re_at(col), im);
        *cell = scan_cell(config, c)?;
    }
    Ok(())
}

/// Iterate a single orbit and classify its cell.
///
/// Moduli are compared squared to avoid a square root per step.
#[inline]
fn scan_cell<T: Float>(config: &ScanConfig<T>, c: Complex<T>) -> Result<Escape, EscapeError> {
    let bound_sq = config.bound * config.bound;
    let mut z = Complex::new(T::zero(), T::zero());
    let mut applied = 0u32;

    while z.norm_sqr() < bound_sq && applied < config.max_iterations {
        z = config.rule.apply(z, c)?;
        applied += 1;
    }

    // Exhausting the budget classifies as bounded even if the final
    // application happened to cross the bound.
    if applied < config.max_iterations {
        Ok(Escape::Escaped(applied))
    } else {
        Ok(Escape::Bounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::grid::Viewport;

    fn config(width: usize, height: usize, bound: f64, max_iterations: u32) -> ScanConfig<f64> {
        ScanConfig {
            grid: SampleGrid::new(Viewport::default(), width, height),
            bound,
            max_iterations,
            rule: IterationRule::mandelbrot(),
        }
    }

    #[test]
    fn origin_never_escapes_under_the_classic_map() {
        // A 3x3 grid over the default viewport puts c = 0 at the center.
        let map = ScanExecutor::run_sequential(&config(3, 3, 2.0, 200)).unwrap();
        assert_eq!(map.cell(1, 1), Escape::Bounded);
    }

    #[test]
    fn far_corners_escape_immediately() {
        // c = -2 - 2i has |c| > 2, so the orbit crosses the bound after the
        // first application.
        let map = ScanExecutor::run_sequential(&config(3, 3, 2.0, 50)).unwrap();
        assert_eq!(map.cell(0, 0), Escape::Escaped(1));
    }

    #[test]
    fn every_escape_count_is_within_budget() {
        let max_iterations = 40;
        let map = ScanExecutor::run_sequential(&config(16, 16, 2.0, max_iterations)).unwrap();
        for row in map.rows() {
            for cell in row {
                if let Escape::Escaped(k) = cell {
                    assert!(*k >= 1 && *k < max_iterations);
                }
            }
        }
    }

    #[test]
    fn growing_the_bound_never_lowers_an_escape_count() {
        let small = ScanExecutor::run_sequential(&config(12, 12, 2.0, 60)).unwrap();
        let large = ScanExecutor::run_sequential(&config(12, 12, 8.0, 60)).unwrap();
        for row in 0..12 {
            for col in 0..12 {
                match (small.cell(row, col), large.cell(row, col)) {
                    (Escape::Escaped(a), Escape::Escaped(b)) => assert!(b >= a),
                    (Escape::Bounded, Escape::Escaped(_)) => {
                        panic!("bounded cell escaped under a larger bound")
                    }
                    _ => {}
                }
            }
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_and_sequential_scans_agree() {
        let cfg = config(32, 24, 2.0, 80);
        let seq = ScanExecutor::run_sequential(&cfg).unwrap();
        let par = ScanExecutor::run(&cfg).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn rule_failure_aborts_the_whole_scan() {
        use crate::math::expr::Expr;

        // Scaling c by MAX twice overflows on the very first application,
        // while z is still at the origin and inside the bound.
        let rule = IterationRule::expression(
            Expr::c()
                .mul(Expr::real(f64::MAX))
                .mul(Expr::real(f64::MAX))
                .add(Expr::z()),
        );
        let cfg = ScanConfig {
            grid: SampleGrid::new(Viewport::default(), 4, 4),
            bound: 2.0,
            max_iterations: 10,
            rule,
        };
        let err = ScanExecutor::run_sequential(&cfg).unwrap_err();
        assert!(matches!(err, EscapeError::RuleEvaluation(_)));
    }
}
