//! In-place recursive quicksort.
//!
//! The pivot of every range is its last element and partitioning follows
//! the Lomuto scheme. Input that is already ordered against that pivot
//! rule (sorted, reverse-sorted, all-equal) degrades to O(n²) comparisons.
//! There is no pivot sampling and no small-range cutoff.
//!
//! Recursion always descends into the smaller side of a partition and the
//! larger side is handled by looping, so stack depth stays O(log n) even
//! on the quadratic inputs.

use std::cmp::Ordering;

/// Sort `v` into non-decreasing order according to `compare`.
///
/// `compare(a, b)` returns `Less`, `Equal` or `Greater`. The sort is not
/// stable. Slices of length 0 or 1 are left untouched without calling
/// `compare`.
///
/// If `compare` panics, the panic propagates to the caller and `v` holds
/// some permutation of its original elements.
pub fn quicksort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        quicksort_range(v, 0, v.len() - 1, &mut compare);
    }
}

/// Sort the inclusive range `[low, high]`.
fn quicksort_range<T, F>(v: &mut [T], mut low: usize, mut high: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while low < high {
        let pivot = partition(v, low, high, compare);
        // Sides are [low, pivot - 1] and [pivot + 1, high]; either may be empty.
        if pivot - low < high - pivot {
            if pivot > low {
                quicksort_range(v, low, pivot - 1, compare);
            }
            low = pivot + 1;
        } else {
            if pivot < high {
                quicksort_range(v, pivot + 1, high, compare);
            }
            if pivot == low {
                break;
            }
            high = pivot - 1;
        }
    }
}

/// Lomuto partition of `[low, high]` around `v[high]`.
///
/// Returns the pivot's final position. Everything left of it compares
/// `<=` the pivot, everything right of it compares `>`.
fn partition<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // `store` is one past the boundary: slots [low, store) hold elements <= pivot.
    let mut store = low;
    for j in low..high {
        // The pivot stays at `high` for the whole scan.
        if compare(&v[j], &v[high]) != Ordering::Greater {
            v.swap(store, j);
            store += 1;
        }
    }
    v.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn empty_slice_is_noop() {
        let mut v: [i32; 0] = [];
        quicksort_by(&mut v, |_, _| panic!("comparator must not run"));
    }

    #[test]
    fn single_element_is_noop() {
        let mut v = [42];
        quicksort_by(&mut v, |_, _| panic!("comparator must not run"));
        assert_eq!(v, [42]);
    }

    #[test]
    fn sorts_small_permutation() {
        let mut v = [30, 10, 20];
        quicksort_by(&mut v, ascending);
        assert_eq!(v, [10, 20, 30]);
    }

    #[test]
    fn sorts_reverse_input() {
        let mut v: Vec<i32> = (0..50).rev().collect();
        quicksort_by(&mut v, ascending);
        assert_eq!(v, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn sorts_with_duplicates_and_negatives() {
        let mut v = [3, -1, 3, 0, -1, 7, 3];
        quicksort_by(&mut v, ascending);
        assert_eq!(v, [-1, -1, 0, 3, 3, 3, 7]);
    }

    #[test]
    fn descending_comparator_reverses_order() {
        let mut v = [1, 4, 2, 5, 3];
        quicksort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn partition_places_pivot_at_final_position() {
        let mut v = [7, 2, 9, 1, 5];
        let p = partition(&mut v, 0, 4, &mut ascending);
        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert!(v[..p].iter().all(|&x| x <= 5));
        assert!(v[p + 1..].iter().all(|&x| x > 5));
    }

    #[test]
    fn partition_follows_lomuto_swap_order() {
        // Pivot 4: 3 and 1 move left in scan order, 8 and 6 end up right.
        let mut v = [8, 3, 6, 1, 4];
        let p = partition(&mut v, 0, 4, &mut ascending);
        assert_eq!(p, 2);
        assert_eq!(v, [3, 1, 4, 8, 6]);
    }

    #[test]
    fn sorted_input_costs_quadratic_comparisons() {
        let n = 64usize;
        let mut v: Vec<usize> = (0..n).collect();
        let mut calls = 0usize;
        quicksort_by(&mut v, |a, b| {
            calls += 1;
            a.cmp(b)
        });
        assert_eq!(calls, n * (n - 1) / 2);
        assert_eq!(v, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn descending_input_sorts_with_quadratic_comparisons() {
        let n = 64usize;
        let mut v: Vec<usize> = (0..n).rev().collect();
        let mut calls = 0usize;
        quicksort_by(&mut v, |a, b| {
            calls += 1;
            a.cmp(b)
        });
        assert_eq!(calls, n * (n - 1) / 2);
        assert_eq!(v, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn all_equal_input_costs_quadratic_comparisons() {
        let n = 40usize;
        let mut v = vec![7u8; n];
        let mut calls = 0usize;
        quicksort_by(&mut v, |a, b| {
            calls += 1;
            a.cmp(b)
        });
        assert_eq!(calls, n * (n - 1) / 2);
    }

    #[test]
    fn sorts_by_key_projection() {
        let mut v = [("c", 3), ("a", 1), ("b", 2)];
        quicksort_by(&mut v, |x, y| x.1.cmp(&y.1));
        assert_eq!(v, [("a", 1), ("b", 2), ("c", 3)]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn output_is_non_decreasing(mut v in prop::collection::vec(any::<i32>(), 0..200)) {
                quicksort_by(&mut v, |a, b| a.cmp(b));
                prop_assert!(v.windows(2).all(|w| w[0] <= w[1]));
            }

            #[test]
            fn output_is_permutation_of_input(v in prop::collection::vec(0u8..16, 0..200)) {
                let mut sorted = v.clone();
                quicksort_by(&mut sorted, |a, b| a.cmp(b));
                let mut expected = v;
                expected.sort_unstable();
                prop_assert_eq!(sorted, expected);
            }
        }
    }
}
