//! Pluggable orderings for the exchange sort.
//!
//! The engine never decides the order itself, it only asks a [`ComparisonStrategy`]. New orderings
//! are added by implementing the trait, or by composing the strategies provided here.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Three-way comparison capability.
///
/// `compare` must define a total order over all values that end up being compared:
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
///
/// If it does not, the resulting order is unspecified, but the sorted slice is still a permutation
/// of its input.
pub trait ComparisonStrategy<T: ?Sized = i32> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> ComparisonStrategy<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural order, smallest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascending;

impl<T: Ord + ?Sized> ComparisonStrategy<T> for Ascending {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverse natural order, largest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord + ?Sized> ComparisonStrategy<T> for Descending {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Flips the order defined by the inner strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<S>(pub S);

impl<T: ?Sized, S: ComparisonStrategy<T>> ComparisonStrategy<T> for Reversed<S> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Lexicographic composition, the second strategy only decides ties left by the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThenWith<A, B>(pub A, pub B);

impl<T: ?Sized, A, B> ComparisonStrategy<T> for ThenWith<A, B>
where
    A: ComparisonStrategy<T>,
    B: ComparisonStrategy<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.0.compare(a, b) {
            Ordering::Equal => self.1.compare(a, b),
            ord => ord,
        }
    }
}

/// Orders by a derived key, eg. `ByKey::new(|x: &i32| x.unsigned_abs())` to weigh values by
/// magnitude.
pub struct ByKey<F, K> {
    key_fn: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(key_fn: F) -> Self {
        Self {
            key_fn,
            _key: PhantomData,
        }
    }
}

impl<T, F, K> ComparisonStrategy<T> for ByKey<F, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key_fn)(a).cmp(&(self.key_fn)(b))
    }
}

/// Adapts a C style comparator that returns a negative, zero or positive integer.
///
/// Beware of `|a, b| a - b`, it overflows for values far apart.
pub struct ThreeWay<F>(pub F);

impl<T, F> ComparisonStrategy<T> for ThreeWay<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> i32,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}

/// Returns true if no adjacent pair of `v` compares as `Greater` under `comparator`.
pub fn is_sorted_with<T, S>(v: &[T], comparator: &S) -> bool
where
    S: ComparisonStrategy<T> + ?Sized,
{
    v.windows(2)
        .all(|w| comparator.compare(&w[0], &w[1]) != Ordering::Greater)
}
