//! Eager list operations
//!
//! Convenience wrappers that run a combinator from [`crate::functional`]
//! with a scalar operator and materialize the result.

use super::{map, reduce, zip_with};
use crate::ops::{add, mul, neg};

/// Negate every element
pub fn neg_list(values: &[f64]) -> Vec<f64> {
    map(neg, values.iter().copied()).collect()
}

/// Element-wise sum, truncated to the shorter input
pub fn add_lists(left: &[f64], right: &[f64]) -> Vec<f64> {
    zip_with(add, left.iter().copied(), right.iter().copied()).collect()
}

/// Sum of all elements (0.0 for an empty slice)
pub fn sum(values: &[f64]) -> f64 {
    reduce(add, values.iter().copied(), 0.0)
}

/// Product of all elements (1.0 for an empty slice)
pub fn prod(values: &[f64]) -> f64 {
    reduce(mul, values.iter().copied(), 1.0)
}
