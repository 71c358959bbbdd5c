//! Closed algebraic expression type over `z` and `c`.
//!
//! ## Purpose
//!
//! This module provides a small expression tree for describing custom
//! iteration formulas such as `z^2 + c` or `z^3 + c*z + c`, evaluated by a
//! safe interpreter. It replaces dynamic evaluation of user-typed formula
//! text: only the closed node set `{Add, Mul, Pow, Const, Var}` exists, so
//! no arbitrary code can ever run.
//!
//! ## Design notes
//!
//! * **Closed Node Set**: Exactly the five node kinds; subtraction and
//!   negation are expressed through multiplication by a constant.
//! * **Principal Powers**: Integer exponents use exact repeated complex
//!   multiplication; fractional exponents use the principal complex power.
//! * **Fallible Evaluation**: A non-finite intermediate (overflow, domain
//!   error) aborts evaluation with an error instead of propagating NaN.
//! * **Generics**: Coefficients and exponents are generic over `Float`.
//!
//! ## Key concepts
//!
//! * **Variables**: `z` is the orbit value, `c` is the grid sample point.
//! * **Structural Checks**: `depends_on` walks the tree so callers can
//!   require that a formula actually reads both variables.
//!
//! ## Invariants
//!
//! * Evaluation never panics and never returns a non-finite value.
//! * `eval` is a pure function of `(expr, z, c)`.
//!
//! ## Non-goals
//!
//! * This module does not parse formula text.
//! * This module does not simplify or rewrite expressions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EscapeError;

// ============================================================================
// Variables
// ============================================================================

/// The two variables an iteration formula may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    /// Current orbit value.
    Z,

    /// Grid sample point (the additive constant of the classic map).
    C,
}

// ============================================================================
// Expression Tree
// ============================================================================

/// Algebraic expression over `z` and `c`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<T> {
    /// Complex constant.
    Const(Complex<T>),

    /// Variable reference.
    Var(Var),

    /// Sum of two subexpressions.
    Add(Box<Expr<T>>, Box<Expr<T>>),

    /// Product of two subexpressions.
    Mul(Box<Expr<T>>, Box<Expr<T>>),

    /// Subexpression raised to a real exponent.
    Pow(Box<Expr<T>>, T),
}

impl<T: Float> Expr<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// The orbit variable `z`.
    pub fn z() -> Self {
        Self::Var(Var::Z)
    }

    /// The sample-point variable `c`.
    pub fn c() -> Self {
        Self::Var(Var::C)
    }

    /// A complex constant `re + i*im`.
    pub fn constant(re: T, im: T) -> Self {
        Self::Const(Complex::new(re, im))
    }

    /// A real constant.
    pub fn real(re: T) -> Self {
        Self::constant(re, T::zero())
    }

    /// Sum of `self` and `rhs`.
    pub fn add(self, rhs: Self) -> Self {
        Self::Add(Box::new(self), Box::new(rhs))
    }

    /// Difference `self - rhs`, expressed as `self + (-1) * rhs`.
    pub fn sub(self, rhs: Self) -> Self {
        self.add(Self::real(-T::one()).mul(rhs))
    }

    /// Product of `self` and `rhs`.
    pub fn mul(self, rhs: Self) -> Self {
        Self::Mul(Box::new(self), Box::new(rhs))
    }

    /// `self` raised to a real exponent.
    pub fn pow(self, exponent: T) -> Self {
        Self::Pow(Box::new(self), exponent)
    }

    // ========================================================================
    // Structural Queries
    // ========================================================================

    /// Whether the expression reads the given variable anywhere.
    pub fn depends_on(&self, var: Var) -> bool {
        match self {
            Self::Const(_) => false,
            Self::Var(v) => *v == var,
            Self::Add(a, b) | Self::Mul(a, b) => a.depends_on(var) || b.depends_on(var),
            Self::Pow(a, _) => a.depends_on(var),
        }
    }

    /// All exponents appearing in the expression, for validation.
    pub(crate) fn for_each_exponent(&self, f: &mut impl FnMut(T)) {
        match self {
            Self::Const(_) | Self::Var(_) => {}
            Self::Add(a, b) | Self::Mul(a, b) => {
                a.for_each_exponent(f);
                b.for_each_exponent(f);
            }
            Self::Pow(a, e) => {
                f(*e);
                a.for_each_exponent(f);
            }
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the expression at `(z, c)`.
    ///
    /// Fails with [`EscapeError::RuleEvaluation`] if any intermediate value
    /// is non-finite.
    pub fn eval(&self, z: Complex<T>, c: Complex<T>) -> Result<Complex<T>, EscapeError> {
        let value = match self {
            Self::Const(k) => *k,
            Self::Var(Var::Z) => z,
            Self::Var(Var::C) => c,
            Self::Add(a, b) => a.eval(z, c)? + b.eval(z, c)?,
            Self::Mul(a, b) => a.eval(z, c)? * b.eval(z, c)?,
            Self::Pow(a, e) => complex_pow(a.eval(z, c)?, *e),
        };

        if value.re.is_finite() && value.im.is_finite() {
            Ok(value)
        } else {
            Err(EscapeError::RuleEvaluation(format!(
                "non-finite value at z={}+{}i, c={}+{}i",
                z.re.to_f64().unwrap_or(f64::NAN),
                z.im.to_f64().unwrap_or(f64::NAN),
                c.re.to_f64().unwrap_or(f64::NAN),
                c.im.to_f64().unwrap_or(f64::NAN),
            )))
        }
    }
}

// ============================================================================
// Complex Exponentiation
// ============================================================================

/// Raise a complex base to a real exponent.
///
/// Integer exponents in `i32` range use exact repeated multiplication;
/// everything else uses the principal complex power.
#[inline]
pub fn complex_pow<T: Float>(base: Complex<T>, exponent: T) -> Complex<T> {
    if exponent.fract() == T::zero() {
        if let Some(k) = exponent.to_i32() {
            return base.powi(k);
        }
    }
    base.powf(exponent)
}
