//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the iteration rules applied per orbit step. It builds
//! on the math layer's expression type and is consumed by the engine's scan
//! executor.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Iteration rules (`z <- rule(z, c)`).
pub mod rule;
