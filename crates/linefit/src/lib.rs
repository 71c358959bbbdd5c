//! # linefit — ordinary least-squares line fitting
//!
//! Fit the best straight line through a set of 2D points and report the
//! figures a scatter-plot diagnostic needs: slope, intercept, Pearson
//! correlation, RMSE, and optionally the per-point residuals and the
//! "least squares" geometry (one square per point, side `|residual|`,
//! anchored on the regression line).
//!
//! The engine is a pure function from points to numbers: it draws nothing
//! and performs no I/O. Parsing point text and plotting belong to the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let model = LinearFit::new().build()?;
//! let result = model.fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0])?;
//!
//! assert_eq!(result.slope, 1.0);
//! assert_eq!(result.intercept, 0.0);
//! assert_eq!(result.r, 1.0);
//! assert_eq!(result.rmse, 0.0);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Diagnostics
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let model = LinearFit::new()
//!     .residuals()
//!     .residual_squares()
//!     .build()?;
//!
//! let result = model.fit_points(&[(0.0, 0.2), (1.0, 0.9), (2.0, 2.1), (3.0, 2.9)])?;
//!
//! println!("{result}");
//! for square in result.residual_squares.as_deref().unwrap_or_default() {
//!     let _corners = square.corners(); // hand these to a plotting layer
//! }
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fewer than two points, mismatched arrays, non-finite samples, and
//! zero-variance axes (all x equal, or all y equal) are reported as
//! [`prelude::FitError`] values — never as NaN smuggled through the
//! result.
//!
//! ## Conventions
//!
//! Covariance and variance use the population (divide-by-N) scaling, so
//! the reported figures match the classic numpy reference
//! (`np.cov(x, y, bias=True)`).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors.
mod primitives;

// Layer 2: Algorithms - moments and the line solution.
mod algorithms;

// Layer 3: Evaluation - residual diagnostics.
mod evaluation;

// Layer 4: Engine - validation, fit execution, output types.
mod engine;

// High-level fluent API for line fitting.
mod api;

// Standard linefit prelude.
pub mod prelude {
    pub use crate::api::{
        FitError, FitModel, FitResult, LinearFitBuilder as LinearFit, ResidualSquare,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
