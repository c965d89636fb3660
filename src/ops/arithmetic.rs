//! Operation kinds
//!
//! Enum handles for the scalar operators, for consumers that need to store
//! or dispatch on an operation (e.g. a tape entry recording which forward op
//! produced a value). The derivative side of each kind lives in
//! [`crate::autograd`].

use super::activation::{relu, sigmoid};
use super::compare::max;
use super::scalar::{add, exp, id, inv, log, mul, neg};
use crate::functional::reduce;

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Multiplication: a * b
    Mul,
    /// Maximum: a if a > b else b
    Max,
}

impl BinaryOp {
    /// Apply the operation to two scalars
    #[inline]
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => add(x, y),
            BinaryOp::Mul => mul(x, y),
            BinaryOp::Max => max(x, y),
        }
    }

    /// Identity element: `apply(identity, x) == x` for every non-NaN `x`
    #[inline]
    pub fn identity(self) -> f64 {
        match self {
            BinaryOp::Add => 0.0,
            BinaryOp::Mul => 1.0,
            BinaryOp::Max => f64::NEG_INFINITY,
        }
    }

    /// Left-fold a slice starting from the identity element
    ///
    /// Returns the identity for an empty slice.
    pub fn fold(self, values: &[f64]) -> f64 {
        reduce(|acc, x| self.apply(acc, x), values.iter().copied(), self.identity())
    }

    /// Operation name
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Mul => "mul",
            BinaryOp::Max => "max",
        }
    }
}

/// Unary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Identity: a
    Id,
    /// Negation: -a
    Neg,
    /// Sigmoid: 1 / (1 + exp(-a))
    Sigmoid,
    /// ReLU: max(0, a)
    Relu,
    /// Natural log: ln(a)
    Log,
    /// Exponential: e^a
    Exp,
    /// Reciprocal: 1/a
    Inv,
}

impl UnaryOp {
    /// Apply the operation to a scalar
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOp::Id => id(x),
            UnaryOp::Neg => neg(x),
            UnaryOp::Sigmoid => sigmoid(x),
            UnaryOp::Relu => relu(x),
            UnaryOp::Log => log(x),
            UnaryOp::Exp => exp(x),
            UnaryOp::Inv => inv(x),
        }
    }

    /// Operation name
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_apply() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(BinaryOp::Mul.apply(2.0, 3.0), 6.0);
        assert_eq!(BinaryOp::Max.apply(2.0, 3.0), 3.0);
    }

    #[test]
    fn test_binary_fold() {
        assert_eq!(BinaryOp::Add.fold(&[1.0, 2.0, 3.0, 4.0]), 10.0);
        assert_eq!(BinaryOp::Mul.fold(&[1.0, 2.0, 3.0, 4.0]), 24.0);
        assert_eq!(BinaryOp::Max.fold(&[1.0, 7.0, 3.0]), 7.0);

        // Empty input returns the identity
        assert_eq!(BinaryOp::Add.fold(&[]), 0.0);
        assert_eq!(BinaryOp::Mul.fold(&[]), 1.0);
        assert_eq!(BinaryOp::Max.fold(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_unary_apply_matches_free_functions() {
        let x = 0.75;
        assert_eq!(UnaryOp::Id.apply(x), x);
        assert_eq!(UnaryOp::Neg.apply(x), -x);
        assert_eq!(UnaryOp::Sigmoid.apply(x), sigmoid(x));
        assert_eq!(UnaryOp::Relu.apply(-x), 0.0);
        assert_eq!(UnaryOp::Log.apply(x), x.ln());
        assert_eq!(UnaryOp::Exp.apply(x), x.exp());
        assert_eq!(UnaryOp::Inv.apply(x), 1.0 / x);
    }

    #[test]
    fn test_names() {
        assert_eq!(BinaryOp::Max.name(), "max");
        assert_eq!(UnaryOp::Sigmoid.name(), "sigmoid");
    }
}
