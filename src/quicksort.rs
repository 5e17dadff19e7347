//! Basic Lomuto quicksort, last element as pivot.
//!
//! No pivot sampling and no fallback, so sorted and all-equal inputs take quadratic time. The
//! recursion always descends into the shorter partition, which keeps the call depth at
//! `O(log(len))` regardless of the input.

use std::cmp::Ordering;
use std::mem;

/// Sorts `v` ascending according to `Ord`.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts `v` so that `compare` defines ascending order.
///
/// `compare(a, b) == Ordering::Less` means `a` is placed before `b`. Use `|a, b| b.cmp(a)` for a
/// descending order.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let pivot_pos = len - 1;
        let (v_without_pivot, pivot) = v.split_at_mut(pivot_pos);
        let lt_count = lomuto_partition(v_without_pivot, &pivot[0], is_less);

        // Place the pivot between the two partitions.
        v.swap(lt_count, pivot_pos);

        let (left, right) = mem::take(&mut v).split_at_mut(lt_count);
        let right = &mut right[1..];

        // Recurse into the shorter side and continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Moves every element that orders before `pivot` to the front of `v`, returning how many there
/// are.
fn lomuto_partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let mut l = 0;
    for r in 0..len {
        if is_less(&v[r], pivot) {
            v.swap(l, r);
            l += 1;
        }
    }

    l
}
