//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: it validates the input points, runs the
//! moment accumulation and line solution, attaches requested diagnostics,
//! and packages the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for fit operations.
pub mod output;
