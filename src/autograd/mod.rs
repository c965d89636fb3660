//! Automatic differentiation helpers
//!
//! Local chain-rule steps for the scalar operators in [`crate::ops`]. A
//! reverse-mode engine records which forward op produced each value and
//! calls the matching helper with the saved forward input and the incoming
//! gradient.
//!
//! ```text
//! forward:   z = log(x)
//! backward:  dL/dx = log_back(x, dL/dz)
//! ```
//!
//! Gradient tapes and graph traversal are left to the consumer.

mod backward;

pub use backward::{inv_back, log_back, relu_back};
