//! # gradops
//!
//! **Scalar operators and functional combinators for automatic differentiation.**
//!
//! gradops is the leaf layer of an autodiff stack: the elementary `f64`
//! operators a tensor library applies element-wise, the chain-rule helpers
//! its backward pass needs, and the generic map / zip / fold combinators
//! everything else is assembled from.
//!
//! ## Contents
//!
//! - **Operators** ([`ops`]): `mul`, `add`, `neg`, `log`, `exp`, `inv`,
//!   `sigmoid`, `relu`, comparisons, and `UnaryOp` / `BinaryOp` kinds
//! - **Backward helpers** ([`autograd`]): `log_back`, `inv_back`, `relu_back`
//! - **Combinators** ([`functional`]): lazy `map` and `zip_with`, left-fold `reduce`
//! - **List helpers** ([`functional::list`]): `neg_list`, `add_lists`, `sum`, `prod`
//!
//! ## Quick Start
//!
//! ```rust
//! use gradops::prelude::*;
//!
//! let xs = [1.0, -2.0, 3.0];
//! assert_eq!(neg_list(&xs), vec![-1.0, 2.0, -3.0]);
//! assert_eq!(sum(&xs), 2.0);
//!
//! // One reverse-mode step through z = ln(x)
//! let grad = log_back(2.0, 1.0);
//! assert_eq!(grad, 0.5);
//! ```
//!
//! ## Float Semantics
//!
//! Operators never validate their inputs; NaN and infinity propagate as in
//! plain `f64` arithmetic. The [`ops::checked`] module offers variants that
//! return [`error::Error`] instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod autograd;
pub mod error;
pub mod functional;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::autograd::{inv_back, log_back, relu_back};
    pub use crate::error::{Error, Result};
    pub use crate::functional::list::{add_lists, neg_list, prod, sum};
    pub use crate::functional::{map, reduce, zip_with};
    pub use crate::ops::{
        BinaryOp, Tolerance, UnaryOp, add, eq, exp, id, inv, is_close, log, lt, max, mul, neg,
        relu, sigmoid,
    };
}
