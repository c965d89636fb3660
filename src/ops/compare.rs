//! Comparison operations
//!
//! Exact comparisons (`lt`, `eq`, `max`) and an absolute-tolerance closeness
//! check.

/// Absolute tolerance used by [`is_close`]
pub const DEFAULT_CLOSE_TOLERANCE: f64 = 1e-2;

/// Less than: x < y
#[inline]
pub fn lt(x: f64, y: f64) -> bool {
    x < y
}

/// Exact equality: x == y (no epsilon)
#[inline]
pub fn eq(x: f64, y: f64) -> bool {
    x == y
}

/// Maximum: x if x > y, otherwise y
///
/// Ties return `y`. Unlike `f64::max`, NaN is not ignored: `max(NaN, 1.0)` is
/// `1.0` but `max(1.0, NaN)` is NaN.
#[inline]
pub fn max(x: f64, y: f64) -> f64 {
    if x > y { x } else { y }
}

/// Check whether |x - y| < 0.01
#[inline]
pub fn is_close(x: f64, y: f64) -> bool {
    Tolerance::default().is_close(x, y)
}

/// Absolute tolerance for closeness checks.
///
/// There is no relative term: two values are close when their absolute
/// difference is strictly below `atol`.
///
/// # Default
///
/// [`DEFAULT_CLOSE_TOLERANCE`] (0.01).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    atol: f64,
}

impl Tolerance {
    /// Create a tolerance with the given absolute bound
    pub const fn new(atol: f64) -> Self {
        Self { atol }
    }

    /// The absolute bound
    #[inline]
    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// Check whether |x - y| < atol
    #[inline]
    pub fn is_close(&self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.atol
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSE_TOLERANCE)
    }
}
