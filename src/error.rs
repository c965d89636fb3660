//! Error types for gradops
//!
//! The scalar operators themselves never fail: they follow IEEE-754 `f64`
//! semantics and let NaN or infinity propagate. These errors are only
//! produced by the opt-in validating variants in [`crate::ops::checked`].

use thiserror::Error;

/// Result type alias using gradops' Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked operators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input lies outside the mathematical domain of the operation
    #[error("Domain error in '{op}': input {value} is outside the domain")]
    Domain {
        /// The operation name
        op: &'static str,
        /// The rejected input
        value: f64,
    },

    /// Operation would divide by zero
    #[error("Division by zero in '{op}'")]
    DivisionByZero {
        /// The operation name
        op: &'static str,
    },

    /// Element-wise operation over sequences of different lengths
    #[error("Length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch {
        /// Length of the left-hand sequence
        left: usize,
        /// Length of the right-hand sequence
        right: usize,
    },
}
