//! Backward (chain-rule) helpers for scalar operators
//!
//! Each helper takes the forward input `x` and the upstream gradient `d`
//! and returns `d * f'(x)`, the contribution to the gradient of `x`.

use crate::ops::{BinaryOp, UnaryOp, exp, neg, sigmoid};

/// Backward for log: z = ln(x)
///
/// Gradient: dL/dx = d / x
#[inline]
pub fn log_back(x: f64, d: f64) -> f64 {
    d / x
}

/// Backward for reciprocal: z = 1/x
///
/// Gradient: dL/dx = -d / x²
#[inline]
pub fn inv_back(x: f64, d: f64) -> f64 {
    -d / (x * x)
}

/// Backward for ReLU: z = max(0, x)
///
/// Gradient: dL/dx = d if x > 0, 0 otherwise
#[inline]
pub fn relu_back(x: f64, d: f64) -> f64 {
    if x > 0.0 { d } else { 0.0 }
}

impl UnaryOp {
    /// Gradient of the input given forward input `x` and upstream gradient `d`
    pub fn backward(self, x: f64, d: f64) -> f64 {
        match self {
            UnaryOp::Id => d,
            UnaryOp::Neg => neg(d),
            UnaryOp::Sigmoid => {
                // sigmoid'(x) = s * (1 - s)
                let s = sigmoid(x);
                d * s * (1.0 - s)
            }
            UnaryOp::Relu => relu_back(x, d),
            UnaryOp::Log => log_back(x, d),
            UnaryOp::Exp => d * exp(x),
            UnaryOp::Inv => inv_back(x, d),
        }
    }
}

impl BinaryOp {
    /// Gradients of both inputs given forward inputs and upstream gradient `d`
    ///
    /// For `Max` the gradient flows to the input the forward pass selected,
    /// so ties route it to `y`.
    pub fn backward(self, x: f64, y: f64, d: f64) -> (f64, f64) {
        match self {
            BinaryOp::Add => (d, d),
            BinaryOp::Mul => (d * y, d * x),
            BinaryOp::Max => {
                if x > y {
                    (d, 0.0)
                } else {
                    (0.0, d)
                }
            }
        }
    }
}
