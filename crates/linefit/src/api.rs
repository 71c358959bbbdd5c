//! High-level API for line fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate:
//! a fluent builder selecting optional diagnostics, and an immutable model
//! whose `fit` runs the ordinary least-squares pipeline.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Diagnostics are off by default and enabled with flag
//!   methods, so the minimal call stays minimal.
//! * **Validated**: Builder misuse (setting a flag twice) is reported at
//!   `build()` time.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `LinearFit::new()` → flag methods → `build()`
//!   → [`FitModel::fit`].
//! * **Point Sets**: `fit` takes paired slices; `fit_points` accepts
//!   `(x, y)` tuples for callers holding points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitConfig, FitExecutor};

// Publicly re-exported types
pub use crate::engine::output::FitResult;
pub use crate::evaluation::residuals::ResidualSquare;
pub use crate::primitives::errors::FitError;

// ============================================================================
// Linear Fit Builder
// ============================================================================

/// Fluent builder for configuring a least-squares fit.
#[derive(Debug, Clone, Default)]
pub struct LinearFitBuilder {
    /// Whether to attach per-point residuals.
    pub compute_residuals: bool,

    /// Whether to attach residual-square geometry.
    pub compute_residual_squares: bool,

    /// Tracks if any flag was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl LinearFitBuilder {
    /// Create a builder with all diagnostics disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach per-point residuals to the result.
    pub fn residuals(mut self) -> Self {
        if self.compute_residuals && self.duplicate_param.is_none() {
            self.duplicate_param = Some("residuals");
        }
        self.compute_residuals = true;
        self
    }

    /// Attach residual-square geometry to the result.
    pub fn residual_squares(mut self) -> Self {
        if self.compute_residual_squares && self.duplicate_param.is_none() {
            self.duplicate_param = Some("residual_squares");
        }
        self.compute_residual_squares = true;
        self
    }

    /// Validate the configuration and produce an immutable model.
    pub fn build(self) -> Result<FitModel, FitError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(FitError::DuplicateParameter { parameter });
        }
        Ok(FitModel {
            config: FitConfig {
                compute_residuals: self.compute_residuals,
                compute_residual_squares: self.compute_residual_squares,
            },
        })
    }
}

// ============================================================================
// Fit Model
// ============================================================================

/// A validated, immutable fit configuration.
#[derive(Debug, Clone)]
pub struct FitModel {
    config: FitConfig,
}

impl FitModel {
    /// Fit the least-squares line through paired samples.
    ///
    /// Pure and stateless: fitting the same data twice yields bit-identical
    /// results.
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, FitError> {
        FitExecutor::run(x, y, &self.config)
    }

    /// Fit the least-squares line through `(x, y)` tuples.
    pub fn fit_points<T: Float>(&self, points: &[(T, T)]) -> Result<FitResult<T>, FitError> {
        let x: Vec<T> = points.iter().map(|&(xi, _)| xi).collect();
        let y: Vec<T> = points.iter().map(|&(_, yi)| yi).collect();
        self.fit(&x, &y)
    }
}
