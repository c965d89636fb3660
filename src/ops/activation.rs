//! Activation functions

/// Sigmoid: 1 / (1 + exp(-x))
///
/// Evaluated in the branch that keeps the exponent non-positive, so the
/// intermediate `exp` never overflows:
///
/// - `x >= 0`: `1 / (1 + exp(-x))`
/// - `x < 0`: `exp(x) / (1 + exp(x))`
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let exp_x = x.exp();
        exp_x / (1.0 + exp_x)
    }
}

/// ReLU: x if x > 0, otherwise 0.0
#[inline]
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}
