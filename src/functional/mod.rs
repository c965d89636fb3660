//! Higher-order sequence combinators
//!
//! [`map`] and [`zip_with`] return lazy adaptors that pull from their sources
//! on demand; [`reduce`] is an eager left fold. The adaptors hold nothing but
//! the source iterators and the function, so they are `Clone` (and therefore
//! restartable) exactly when those parts are.
//!
//! The eager, `Vec`-producing wrappers built on top live in [`list`].

use std::iter::FusedIterator;

pub mod list;

/// Lazily apply `f` to every element of `iter`
///
/// The output has the same length and order as the input.
///
/// # Example
///
/// ```
/// use gradops::functional::map;
/// use gradops::ops::neg;
///
/// let out: Vec<f64> = map(neg, [1.0, 2.0, 3.0]).collect();
/// assert_eq!(out, vec![-1.0, -2.0, -3.0]);
/// ```
pub fn map<I, F, U>(f: F, iter: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    Map {
        iter: iter.into_iter(),
        f,
    }
}

/// Lazily combine two sequences element-wise with `f`
///
/// Stops at the end of the shorter input; extra elements of the longer one
/// are never consumed by `f`.
///
/// # Example
///
/// ```
/// use gradops::functional::zip_with;
/// use gradops::ops::add;
///
/// let out: Vec<f64> = zip_with(add, [1.0, 2.0, 3.0], [4.0, 5.0]).collect();
/// assert_eq!(out, vec![5.0, 7.0]);
/// ```
pub fn zip_with<L, R, F, U>(f: F, left: L, right: R) -> ZipWith<L::IntoIter, R::IntoIter, F>
where
    L: IntoIterator,
    R: IntoIterator,
    F: FnMut(L::Item, R::Item) -> U,
{
    ZipWith {
        left: left.into_iter(),
        right: right.into_iter(),
        f,
    }
}

/// Left fold: `f(...f(f(start, e0), e1)..., en)`
///
/// Returns `start` for an empty sequence. Elements are combined strictly in
/// sequence order, which matters for floating-point accumulation.
pub fn reduce<I, F, A>(mut f: F, iter: I, start: A) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = start;
    for value in iter {
        acc = f(acc, value);
    }
    acc
}

/// Lazy adaptor returned by [`map`]
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, U> ExactSizeIterator for Map<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> U,
{
}

impl<I, F, U> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
{
}

/// Lazy adaptor returned by [`zip_with`]
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWith<L, R, F> {
    left: L,
    right: R,
    f: F,
}

impl<L, R, F, U> Iterator for ZipWith<L, R, F>
where
    L: Iterator,
    R: Iterator,
    F: FnMut(L::Item, R::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        let l = self.left.next()?;
        let r = self.right.next()?;
        Some((self.f)(l, r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l_lo, l_hi) = self.left.size_hint();
        let (r_lo, r_hi) = self.right.size_hint();
        let lo = l_lo.min(r_lo);
        let hi = match (l_hi, r_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        (lo, hi)
    }
}

impl<L, R, F, U> ExactSizeIterator for ZipWith<L, R, F>
where
    L: ExactSizeIterator,
    R: ExactSizeIterator,
    F: FnMut(L::Item, R::Item) -> U,
{
}

impl<L, R, F, U> FusedIterator for ZipWith<L, R, F>
where
    L: FusedIterator,
    R: FusedIterator,
    F: FnMut(L::Item, R::Item) -> U,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{add, mul, neg};

    #[test]
    fn test_map() {
        let out: Vec<f64> = map(neg, [1.0, 2.0, 3.0]).collect();
        assert_eq!(out, vec![-1.0, -2.0, -3.0]);

        let empty: Vec<f64> = map(neg, Vec::<f64>::new()).collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_map_changes_element_type() {
        let out: Vec<bool> = map(|x: f64| x > 1.0, [0.5, 1.5]).collect();
        assert_eq!(out, vec![false, true]);
    }

    #[test]
    fn test_map_clone_restarts() {
        let values = [1.0, 2.0, 3.0];
        let it = map(neg, values.iter().copied());
        let first: Vec<f64> = it.clone().collect();
        let second: Vec<f64> = it.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_map_is_lazy() {
        let mut calls = 0;
        let mut it = map(
            |x: f64| {
                calls += 1;
                x * 2.0
            },
            [1.0, 2.0, 3.0],
        );
        assert_eq!(it.next(), Some(2.0));
        drop(it);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_zip_with_truncates() {
        let out: Vec<f64> = zip_with(add, [1.0, 2.0, 3.0], [4.0, 5.0]).collect();
        assert_eq!(out, vec![5.0, 7.0]);

        let out: Vec<f64> = zip_with(add, [1.0], [4.0, 5.0, 6.0]).collect();
        assert_eq!(out, vec![5.0]);
    }

    #[test]
    fn test_zip_with_size_hint() {
        let it = zip_with(mul, [1.0, 2.0, 3.0], [4.0, 5.0]);
        assert_eq!(it.len(), 2);

        let it = zip_with(mul, [1.0, 2.0], std::iter::repeat(2.0));
        assert_eq!(it.size_hint(), (2, Some(2)));
    }

    fn assert_fused<I: FusedIterator>(_: &I) {}

    #[test]
    fn test_map_exact_size() {
        let mut it = map(neg, [1.0, 2.0, 3.0]);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_adaptors_stay_exhausted() {
        let mut it = map(neg, [1.0]);
        assert_fused(&it);
        assert_eq!(it.next(), Some(-1.0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);

        let mut it = zip_with(add, [1.0, 2.0], [3.0]);
        assert_fused(&it);
        assert_eq!(it.next(), Some(4.0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(add, Vec::<f64>::new(), 0.0), 0.0);
        assert_eq!(reduce(add, [1.0, 2.0, 3.0, 4.0], 0.0), 10.0);
        assert_eq!(reduce(mul, Vec::<f64>::new(), 1.0), 1.0);
    }

    #[test]
    fn test_reduce_is_left_fold() {
        // ((10 - 1) - 2) - 3, not 10 - (1 - (2 - 3))
        assert_eq!(reduce(|a: f64, b: f64| a - b, [1.0, 2.0, 3.0], 10.0), 4.0);

        // Order matters for floating point: 1e16 absorbs a lone 1.0
        assert_eq!(reduce(add, [1.0, 1e16, -1e16], 0.0), 0.0);
        assert_eq!(reduce(add, [1e16, -1e16, 1.0], 0.0), 1.0);
    }
}
