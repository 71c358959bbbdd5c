//! Error types for escape-time computations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running an escape-time scan, covering parameter validation, iteration
//! rule structure, and rule evaluation failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., the rejected
//!   bound or exponent).
//! * **Deferred**: Builder misuse is caught and stored during configuration,
//!   then surfaced at `build()` time.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors are reported as `f64` regardless of the
//!   working precision.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for escape-time operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EscapeError {
    /// Grid dimensions must both be at least 1 pixel.
    InvalidDimensions {
        /// Requested grid width in samples.
        width: usize,
        /// Requested grid height in samples.
        height: usize,
    },

    /// Escape bound must be finite and strictly positive.
    InvalidBound(f64),

    /// Iteration budget must be at least 1.
    InvalidMaxIterations(u32),

    /// Viewport axis range must be finite with min strictly below max.
    InvalidViewport {
        /// Axis name ("re" or "im").
        axis: &'static str,
        /// Lower end of the rejected range.
        min: f64,
        /// Upper end of the rejected range.
        max: f64,
    },

    /// Power-map exponent must be finite and nonzero.
    InvalidExponent(f64),

    /// A custom iteration rule must reference both `z` and `c`.
    IncompleteRule {
        /// Name of the variable the expression never reads.
        missing: &'static str,
    },

    /// The iteration rule produced a non-finite value during evaluation.
    RuleEvaluation(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EscapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Grid dimensions must be positive, got {width}x{height}")
            }
            Self::InvalidBound(b) => {
                write!(f, "Escape bound must be finite and positive, got {b}")
            }
            Self::InvalidMaxIterations(n) => {
                write!(f, "Iteration budget must be at least 1, got {n}")
            }
            Self::InvalidViewport { axis, min, max } => {
                write!(f, "Viewport {axis} range must satisfy min < max, got [{min}, {max}]")
            }
            Self::InvalidExponent(e) => {
                write!(f, "Power-map exponent must be finite and nonzero, got {e}")
            }
            Self::IncompleteRule { missing } => {
                write!(f, "Iteration rule never references '{missing}'")
            }
            Self::RuleEvaluation(msg) => write!(f, "Rule evaluation failed: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(f, "Parameter '{parameter}' was set multiple times")
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for EscapeError {}
