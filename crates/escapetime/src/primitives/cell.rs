//! Per-cell escape classification.
//!
//! ## Purpose
//!
//! This module defines the result recorded for a single grid cell: either
//! the orbit left the escape bound after a known number of rule
//! applications, or it stayed bounded for the whole iteration budget.
//!
//! ## Design notes
//!
//! * **Explicit States**: A sum type replaces the classic `0` sentinel,
//!   which conflates "never escaped" with a zero iteration count.
//! * **Raster Compatibility**: `to_index` recovers the legacy convention
//!   (bounded cells map to 0) for colormap consumers that expect it.
//!
//! ## Invariants
//!
//! * `Escaped(k)` always has `k >= 1`: the orbit starts at the origin,
//!   strictly inside any positive bound, so at least one rule application
//!   precedes every escape.

// ============================================================================
// Escape Classification
// ============================================================================

/// Classification of a single grid cell after an escape-time scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Escape {
    /// The orbit's modulus reached the bound after this many rule
    /// applications.
    Escaped(u32),

    /// The orbit stayed below the bound for the whole iteration budget.
    Bounded,
}

impl Escape {
    /// Whether the orbit escaped within the budget.
    #[inline]
    pub fn is_escaped(&self) -> bool {
        matches!(self, Self::Escaped(_))
    }

    /// Whether the orbit stayed bounded for the whole budget.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }

    /// Escape iteration, if any.
    #[inline]
    pub fn iterations(&self) -> Option<u32> {
        match self {
            Self::Escaped(k) => Some(*k),
            Self::Bounded => None,
        }
    }

    /// Legacy raster index: bounded cells map to 0, escaped cells to their
    /// iteration count.
    #[inline]
    pub fn to_index(&self) -> u32 {
        match self {
            Self::Escaped(k) => *k,
            Self::Bounded => 0,
        }
    }
}
