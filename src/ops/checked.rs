//! Validating variants of the partial operators
//!
//! The plain operators never inspect their inputs. These wrappers reject
//! inputs that would produce NaN or infinity and return an [`Error`]
//! instead. On valid input the result is bit-identical to the plain operator.

use super::scalar::{inv, log};
use crate::autograd::{inv_back, log_back};
use crate::error::{Error, Result};
use crate::functional::list::add_lists;

/// Natural logarithm, rejecting `x <= 0` and NaN
pub fn try_log(x: f64) -> Result<f64> {
    // NaN fails `x > 0.0`, so it is rejected too
    if x > 0.0 {
        Ok(log(x))
    } else {
        tracing::debug!(op = "log", value = x, "rejected input outside domain");
        Err(Error::Domain { op: "log", value: x })
    }
}

/// Reciprocal, rejecting zero
pub fn try_inv(x: f64) -> Result<f64> {
    ensure_nonzero("inv", x)?;
    Ok(inv(x))
}

/// Backward of `log`, rejecting `x == 0`
pub fn try_log_back(x: f64, d: f64) -> Result<f64> {
    ensure_nonzero("log_back", x)?;
    Ok(log_back(x, d))
}

/// Backward of `inv`, rejecting `x == 0`
pub fn try_inv_back(x: f64, d: f64) -> Result<f64> {
    ensure_nonzero("inv_back", x)?;
    Ok(inv_back(x, d))
}

/// Element-wise sum that requires equal lengths instead of truncating
pub fn try_add_lists(left: &[f64], right: &[f64]) -> Result<Vec<f64>> {
    if left.len() != right.len() {
        tracing::debug!(
            op = "add_lists",
            left = left.len(),
            right = right.len(),
            "rejected sequences of different lengths"
        );
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(add_lists(left, right))
}

fn ensure_nonzero(op: &'static str, x: f64) -> Result<()> {
    if x == 0.0 {
        tracing::debug!(op, value = x, "rejected division by zero");
        return Err(Error::DivisionByZero { op });
    }
    Ok(())
}
