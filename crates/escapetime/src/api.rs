//! High-level API for escape-time scans.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder for configuring a scan and an immutable
//! model that runs it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters (an 800x800 Mandelbrot over the ±2 square).
//! * **Validated**: All parameters are checked when `build()` is called;
//!   a model can never hold an invalid configuration.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Fractal::new()` → chain setters → `build()`
//!   → [`FractalModel::render`].
//! * **Duplicate Detection**: Setting the same parameter twice is reported
//!   as an error at `build()` time rather than silently last-write-wins.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::rule::IterationRule;
use crate::engine::executor::{ScanConfig, ScanExecutor};
use crate::engine::validator::Validator;
use crate::math::expr::Expr;
use crate::primitives::grid::{SampleGrid, Viewport};

// Publicly re-exported types
pub use crate::engine::output::EscapeMap;
pub use crate::primitives::cell::Escape;
pub use crate::primitives::errors::EscapeError;

// ============================================================================
// Fractal Builder
// ============================================================================

/// Fluent builder for configuring an escape-time scan.
#[derive(Debug, Clone)]
pub struct FractalBuilder<T> {
    /// Grid width in samples.
    pub width: Option<usize>,

    /// Grid height in samples.
    pub height: Option<usize>,

    /// Escape bound on the orbit modulus.
    pub bound: Option<T>,

    /// Iteration budget per cell.
    pub max_iterations: Option<u32>,

    /// Iteration rule.
    pub rule: Option<IterationRule<T>>,

    /// Complex-plane viewport.
    pub viewport: Option<Viewport<T>>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FractalBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FractalBuilder<T> {
    /// Create a builder with every parameter unset.
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            bound: None,
            max_iterations: None,
            rule: None,
            viewport: None,
            duplicate_param: None,
        }
    }

    fn note_duplicate(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    // ========================================================================
    // Configuration Methods
    // ========================================================================

    /// Grid width in samples (default: 800).
    pub fn width(mut self, width: usize) -> Self {
        self.note_duplicate(self.width.is_some(), "width");
        self.width = Some(width);
        self
    }

    /// Grid height in samples (default: 800).
    pub fn height(mut self, height: usize) -> Self {
        self.note_duplicate(self.height.is_some(), "height");
        self.height = Some(height);
        self
    }

    /// Escape bound on the orbit modulus (default: 2).
    pub fn bound(mut self, bound: T) -> Self {
        self.note_duplicate(self.bound.is_some(), "bound");
        self.bound = Some(bound);
        self
    }

    /// Iteration budget per cell (default: 100).
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.note_duplicate(self.max_iterations.is_some(), "max_iterations");
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Iteration rule (default: the Mandelbrot map `z^2 + c`).
    pub fn rule(mut self, rule: IterationRule<T>) -> Self {
        self.note_duplicate(self.rule.is_some(), "rule");
        self.rule = Some(rule);
        self
    }

    /// Power-map exponent shorthand: sets the rule to `z^n + c`.
    pub fn exponent(self, exponent: T) -> Self {
        self.rule(IterationRule::power_map(exponent))
    }

    /// Custom closed-expression rule shorthand.
    pub fn expression(self, expr: Expr<T>) -> Self {
        self.rule(IterationRule::expression(expr))
    }

    /// Complex-plane viewport (default: `[-2, 2] x [-2, 2]`).
    pub fn viewport(mut self, viewport: Viewport<T>) -> Self {
        self.note_duplicate(self.viewport.is_some(), "viewport");
        self.viewport = Some(viewport);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and produce an immutable model.
    pub fn build(self) -> Result<FractalModel<T>, EscapeError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(EscapeError::DuplicateParameter { parameter });
        }

        let width = self.width.unwrap_or(800);
        let height = self.height.unwrap_or(800);
        let bound = self.bound.unwrap_or_else(|| T::from(2.0).unwrap());
        let max_iterations = self.max_iterations.unwrap_or(100);
        let rule = self.rule.unwrap_or_default();
        let viewport = self.viewport.unwrap_or_default();

        Validator::validate_dimensions(width, height)?;
        Validator::validate_bound(bound)?;
        Validator::validate_max_iterations(max_iterations)?;
        Validator::validate_viewport(&viewport)?;
        Validator::validate_rule(&rule)?;

        Ok(FractalModel {
            config: ScanConfig {
                grid: SampleGrid::new(viewport, width, height),
                bound,
                max_iterations,
                rule,
            },
        })
    }
}

// ============================================================================
// Fractal Model
// ============================================================================

/// A validated, immutable escape-time scan configuration.
#[derive(Debug, Clone)]
pub struct FractalModel<T> {
    config: ScanConfig<T>,
}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> FractalModel<T> {
    /// Run the scan and produce the escape map.
    ///
    /// Pure and stateless: rendering twice yields identical maps.
    pub fn render(&self) -> Result<EscapeMap<T>, EscapeError> {
        ScanExecutor::run(&self.config)
    }
}

#[cfg(not(feature = "parallel"))]
impl<T: Float> FractalModel<T> {
    /// Run the scan and produce the escape map.
    ///
    /// Pure and stateless: rendering twice yields identical maps.
    pub fn render(&self) -> Result<EscapeMap<T>, EscapeError> {
        ScanExecutor::run(&self.config)
    }
}

impl<T: Float> FractalModel<T> {
    /// Grid width in samples.
    pub fn width(&self) -> usize {
        self.config.grid.width
    }

    /// Grid height in samples.
    pub fn height(&self) -> usize {
        self.config.grid.height
    }

    /// Escape bound on the orbit modulus.
    pub fn bound(&self) -> T {
        self.config.bound
    }

    /// Iteration budget per cell.
    pub fn max_iterations(&self) -> u32 {
        self.config.max_iterations
    }
}
