//! In-place unstable quicksort built around a Hoare-style two-cursor partition.
//!
//! The partition scheme takes the first element of the current range as the pivot and
//! scans with two alternating cursors, using non-strict comparisons against the pivot
//! in both directions. That choice is what makes slices with many duplicate values
//! terminate instead of looping.

use std::cmp::Ordering;

mod quicksort;

pub mod patterns;

/// Error returned by the explicit-range entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A non-empty range request named an index outside the slice.
    #[error("range [{l}, {r}] out of bounds for slice of length {len}")]
    InvalidRange { l: usize, r: usize, len: usize },
}

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n* \* log(*n*)) time on average. The worst case is
/// *O*(*n*^2) time for adversarial patterns such as already-sorted or all-equal
/// input, with stack depth held at *O*(log *n*) by always recursing into the shorter
/// partition.
///
/// # Examples
///
/// ```
/// let mut v = [4, 5, 1, 1, 3];
///
/// partition_sort::sort(&mut v);
/// assert_eq!(v, [1, 1, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of
/// equal elements.
///
/// The comparator function must define a total ordering for the elements in the
/// slice. If the ordering is not total, the order of the elements is unspecified.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// partition_sort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// partition_sort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive index range `[l, r]` of the slice in place, leaving the rest
/// of the slice untouched.
///
/// A range with `l > r` is empty and the call is a successful no-op. A non-empty
/// range where `l` or `r` lies outside `[0, v.len())` fails with
/// [`RangeError::InvalidRange`] before anything is mutated.
///
/// # Examples
///
/// ```
/// let mut v = [9, 4, 5, 1, 0];
///
/// partition_sort::sort_range(&mut v, 1, 3).unwrap();
/// assert_eq!(v, [9, 1, 4, 5, 0]);
///
/// assert!(partition_sort::sort_range(&mut v, 2, 5).is_err());
/// ```
#[inline]
pub fn sort_range<T>(v: &mut [T], l: usize, r: usize) -> Result<(), RangeError>
where
    T: Ord,
{
    sort_range_by(v, l, r, |a, b| a.cmp(b))
}

/// Sorts the inclusive index range `[l, r]` with a comparator function.
///
/// Range semantics match [`sort_range`].
#[inline]
pub fn sort_range_by<T, F>(
    v: &mut [T],
    l: usize,
    r: usize,
    mut compare: F,
) -> Result<(), RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if l > r {
        return Ok(());
    }

    if r >= v.len() {
        return Err(RangeError::InvalidRange { l, r, len: v.len() });
    }

    unstable_sort(&mut v[l..=r], |a, b| compare(a, b) == Ordering::Less);

    Ok(())
}

// --- IMPL ---

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types. Do nothing.
    if std::mem::size_of::<T>() == 0 {
        return;
    }

    quicksort::quicksort(v, &mut is_less);
}
