//! Recursive quicksort with a Hoare-style alternating two-cursor partition.

/// Sorts `v` recursively.
///
/// Recurses into the shorter partition and continues the loop with the longer one,
/// which bounds the stack depth to `O(log n)` even when every pivot choice is
/// maximally unbalanced.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`. The pivot came to rest
        // at `mid` and is already in its final position.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around the value initially at index 0.
///
/// Returns the split index `x` such that when the call returns, all elements of
/// `v[..x]` compare less than or equal to the pivot and all elements of `v[x+1..]`
/// compare greater than or equal to it, with the pivot itself at `x`.
///
/// The pivot element is never copied out of the slice. Each swap that moves a cursor
/// also moves the pivot to the other cursor, so the pivot is at `x` or at `y` at every
/// point of the scan. Both scan directions stop on elements *equal* to the pivot,
/// which is what guarantees termination on all-duplicate input.
///
/// If `is_less` does not implement a total order the resulting order and return value
/// are unspecified, but all original elements remain in `v`. Same if `is_less` panics.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let mut x = 0;
    let mut y = v.len() - 1;

    while x < y {
        // Pivot is at `x`. Find, from the right, the first element strictly less
        // than the pivot.
        while x < y && !is_less(&v[y], &v[x]) {
            y -= 1;
        }

        // `v[y] < pivot`, so it belongs on the left. The swap parks the pivot at `y`.
        // `y` stays put, its new occupant has not been examined yet.
        if x < y {
            v.swap(x, y);
            x += 1;
        }

        // Pivot is at `y`. Find, from the left, the first element strictly greater
        // than the pivot.
        while x < y && !is_less(&v[y], &v[x]) {
            x += 1;
        }

        // Mirror of the step above, the pivot returns to `x`.
        if x < y {
            v.swap(x, y);
            y -= 1;
        }
    }

    x
}

#[cfg(test)]
mod tests {
    use super::partition;

    fn check_split(mut v: Vec<i32>) {
        let pivot = v[0];
        let x = partition(&mut v, &mut |a, b| a.lt(b));

        assert_eq!(v[x], pivot);
        assert!(v[..x].iter().all(|elem| *elem <= pivot));
        assert!(v[x + 1..].iter().all(|elem| *elem >= pivot));
    }

    #[test]
    fn split_invariant() {
        check_split(vec![4, 5, 1, 1, 3]);
        check_split(vec![2, 2, 2, 2]);
        check_split(vec![5, 4, 3, 2, 1]);
        check_split(vec![1, 2, 3, 4, 5]);
        check_split(vec![3, 3]);
        check_split(vec![-1, 7, -1, 7, -1]);
    }
}
