//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core least-squares arithmetic: moment
//! accumulation and the closed-form line solution.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ordinary least-squares moments and line solution.
pub mod ols;
