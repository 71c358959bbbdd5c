//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit diagnostics: residuals, the root-mean-square
//! error, and the residual-square geometry used by scatter-plot renderers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residuals, RMSE, and residual-square geometry.
pub mod residuals;
