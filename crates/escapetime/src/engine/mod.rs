//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the escape-time scan: it validates configuration,
//! runs the per-cell iteration loop over the sample grid, and packages the
//! classified cells into the output map.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Grid-scan execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for escape-time scans.
pub mod output;
