//! Scalar operations
//!
//! This module defines the elementary operators every higher-level
//! autodiff component is built from. All of them are free functions over
//! `f64` with no state and no side effects.
//!
//! ```text
//! ops
//!   ├── mul, id, add, neg, log, exp, inv   (arithmetic)
//!   ├── lt, eq, max, is_close              (comparison)
//!   ├── sigmoid, relu                      (activations)
//!   ├── UnaryOp, BinaryOp                  (operation kinds)
//!   └── checked::try_*                     (validating variants)
//! ```
//!
//! # Float semantics
//!
//! Nothing here validates its input. `log(0.0)` is `-inf`, `log(-1.0)` is NaN,
//! `inv(0.0)` is `inf`, and NaN propagates as IEEE-754 arithmetic dictates.
//! Use [`checked`] when an error is preferable to a non-finite result.

mod activation;
mod arithmetic;
pub mod checked;
mod compare;
mod scalar;

pub use activation::*;
pub use arithmetic::*;
pub use compare::*;
pub use scalar::*;
