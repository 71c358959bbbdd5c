//! # escapetime — escape-time fractal engine
//!
//! An escape-time fractal engine: iterate a polynomial map over a grid of
//! complex-plane samples and classify each cell by how quickly its orbit
//! leaves an escape bound. The classic Mandelbrot set is the default
//! configuration; generalized power maps `z^n + c` and custom closed-form
//! expressions over `z` and `c` are also supported.
//!
//! The engine is a pure function from configuration to an [`prelude::EscapeMap`]:
//! it produces no pixels and performs no I/O. Coloring and display belong
//! to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use escapetime::prelude::*;
//!
//! // The classic Mandelbrot map over the default ±2 viewport.
//! let model = Fractal::new()
//!     .width(200)
//!     .height(200)
//!     .bound(2.0)
//!     .max_iterations(100)
//!     .build()?;
//!
//! let map = model.render()?;
//!
//! // Cells either escaped at a known iteration or stayed bounded.
//! assert_eq!(map.width(), 200);
//! assert!(map.escaped_count() > 0);
//! assert!(map.bounded_count() > 0);
//! # Result::<(), EscapeError>::Ok(())
//! ```
//!
//! ### Custom Formulas
//!
//! User-supplied formulas are closed expression trees, never executable
//! code:
//!
//! ```rust
//! use escapetime::prelude::*;
//!
//! // z^3 + c*z + c
//! let rule = Expr::z()
//!     .pow(3.0)
//!     .add(Expr::c().mul(Expr::z()))
//!     .add(Expr::c());
//!
//! let model = Fractal::new()
//!     .width(64)
//!     .height(64)
//!     .expression(rule)
//!     .build()?;
//!
//! let map = model.render()?;
//! assert_eq!(map.to_iteration_counts().len(), 64 * 64);
//! # Result::<(), EscapeError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `build()` and `render()` both return `Result`; invalid configuration
//! (non-positive bound, zero-sized grid, a formula that never reads `z`)
//! and rule-evaluation failures are reported as [`prelude::EscapeError`]
//! values, never as partially filled maps.
//!
//! ## Parallelism
//!
//! With the default `parallel` feature, grid rows are scanned across CPU
//! cores; each row owns a disjoint slice of the output buffer, and the
//! result is bit-identical to the sequential scan.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - grid geometry, cell classification, errors.
mod primitives;

// Layer 2: Math - closed expression type and evaluator.
mod math;

// Layer 3: Algorithms - iteration rules.
mod algorithms;

// Layer 4: Engine - validation, scan execution, output types.
mod engine;

// High-level fluent API for escape-time scans.
mod api;

// Standard escapetime prelude.
pub mod prelude {
    pub use crate::algorithms::rule::IterationRule;
    pub use crate::api::{Escape, EscapeError, EscapeMap, FractalBuilder as Fractal, FractalModel};
    pub use crate::math::expr::{Expr, Var};
    pub use crate::primitives::grid::Viewport;
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
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
