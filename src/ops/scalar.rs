//! Elementary scalar arithmetic
//!
//! Plain `f64` functions with no validation. Invalid inputs (e.g. `log` of a
//! non-positive value, `inv` of zero) produce whatever IEEE-754 arithmetic
//! produces. See [`crate::ops::checked`] for variants that report errors.

/// Multiplication: x * y
#[inline]
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

/// Identity: returns x unchanged
#[inline]
pub fn id(x: f64) -> f64 {
    x
}

/// Addition: x + y
#[inline]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// Negation: -x
#[inline]
pub fn neg(x: f64) -> f64 {
    -x
}

/// Natural logarithm: ln(x)
///
/// Returns NaN for negative inputs and negative infinity for zero.
#[inline]
pub fn log(x: f64) -> f64 {
    x.ln()
}

/// Exponential: e^x
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Reciprocal: 1/x
///
/// Division by zero yields a signed infinity.
#[inline]
pub fn inv(x: f64) -> f64 {
    1.0 / x
}
