//! Exchange sort, quadratic and in-place, ordered by a pluggable comparison strategy.

use std::cmp::Ordering;
use std::mem;

use crate::error::SortError;
use crate::strategy::ComparisonStrategy;

sort_impl!("exchange_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n*^2) for every input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    exchange_sort(v, &mut |a, b| a.gt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds the
/// same elements as before.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    exchange_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Sorts the slice in the order defined by `comparator`.
///
/// ```
/// use exchange_sort::strategy::Descending;
///
/// let mut v = [5, 3, 8, 1];
/// exchange_sort::sort_with(&mut v, &Descending);
/// assert_eq!(v, [8, 5, 3, 1]);
/// ```
#[inline]
pub fn sort_with<T, S>(v: &mut [T], comparator: &S)
where
    S: ComparisonStrategy<T> + ?Sized,
{
    exchange_sort(v, &mut |a, b| comparator.compare(a, b) == Ordering::Greater);
}

/// Like [`sort_with`], but for a comparator that may be absent.
///
/// Returns [`SortError::InvalidArgument`] without touching `v` if `comparator` is `None`.
pub fn try_sort<T>(
    v: &mut [T],
    comparator: Option<&dyn ComparisonStrategy<T>>,
) -> Result<(), SortError> {
    let comparator = comparator.ok_or(SortError::InvalidArgument("comparator is absent"))?;

    sort_with(v, comparator);

    Ok(())
}

/// Number of comparisons a call on a slice of length `len` performs. It only depends on the length,
/// not on the values. Zero-sized types are never compared.
pub const fn comparison_count(len: usize) -> usize {
    if len < 2 {
        0
    } else {
        len * (len - 1) / 2
    }
}

// --- IMPL ---

fn exchange_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();

    // After the inner loop for `i` is done, v[i] is not greater than any element right of it.
    for i in 0..len {
        for j in (i + 1)..len {
            if is_greater(&v[i], &v[j]) {
                v.swap(i, j);
            }
        }
    }
}
