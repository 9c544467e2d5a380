//! Recursive quicksort with the Lomuto partition scheme.
//!
//! The pivot is always the last element of the range, elements comparing
//! less than or equal to it end up left of the boundary, and both sides are
//! sorted recursively. Equal elements can cross each other between
//! partitions: this is not a stable sort.

use std::cmp::Ordering;

/// Sorts the whole slice in natural ascending order.
pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, T::cmp);
}

/// Sorts the whole slice with a caller-supplied comparator.
pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }
    sort_range_by(data, 0, data.len() - 1, &mut compare);
}

/// Sorts the inclusive range `[low, high]` of `data` with `compare`.
///
/// Does nothing when the slice holds fewer than two elements or when
/// `low >= high` (empty range, single element, recursion base case).
///
/// Average O(n log n), worst case O(n²) with recursion depth up to O(n)
/// against adversarial input for this pivot choice; there is no depth bound
/// or algorithm fallback.
///
/// # Panics
///
/// Panics if `high >= data.len()`.
pub fn sort_range_by<T, F>(data: &mut [T], low: usize, high: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 || low >= high {
        return;
    }

    let boundary = partition(data, low, high, compare);
    if boundary > low {
        sort_range_by(data, low, boundary - 1, compare);
    }
    if boundary < high {
        sort_range_by(data, boundary + 1, high, compare);
    }
}

/// Partitions `[low, high]` around the element at `high` and returns the
/// pivot's final position.
///
/// `boundary` is the slot the next not-greater element will be swapped into,
/// so it ends the scan one past the last such element.
fn partition<T, F>(data: &mut [T], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut boundary = low;
    for j in low..high {
        if compare(&data[j], &data[high]) != Ordering::Greater {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_empty_and_single() {
        let mut empty: [i32; 0] = [];
        sort(&mut empty);
        assert_eq!(empty, []);

        let mut single = [5];
        sort(&mut single);
        assert_eq!(single, [5]);
    }

    #[test]
    fn sorted_input_is_unchanged() {
        let mut data = [1, 2, 3, 4, 5];
        sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorts_reverse_sorted_input() {
        let mut data = [5, 4, 3, 2, 1];
        sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorts_duplicates() {
        let mut data = [5, 2, 8, 2, 5, 1];
        sort(&mut data);
        assert_eq!(data, [1, 2, 2, 5, 5, 8]);
    }

    #[test]
    fn sorts_negatives_and_zero() {
        let mut data = [-5, 2, -8, 1, -10, 0, 5];
        sort(&mut data);
        assert_eq!(data, [-10, -8, -5, 0, 1, 2, 5]);
    }

    #[test]
    fn sorts_strings() {
        let mut data = ["banana", "apple", "cherry", "date"];
        sort(&mut data);
        assert_eq!(data, ["apple", "banana", "cherry", "date"]);
    }

    #[test]
    fn sorts_descending_with_comparator() {
        let mut data = [5, 2, 8, 2, 5, 1];
        sort_by(&mut data, |a, b| b.cmp(a));
        assert_eq!(data, [8, 5, 5, 2, 2, 1]);
    }

    #[test]
    fn sorts_a_subrange_only() {
        let mut data = [9, 4, 3, 2, 9];
        sort_range_by(&mut data, 1, 3, &mut i32::cmp);
        assert_eq!(data, [9, 2, 3, 4, 9]);
    }

    #[test]
    fn degenerate_range_is_a_noop() {
        let mut data = [3, 1, 2];
        sort_range_by(&mut data, 2, 2, &mut i32::cmp);
        assert_eq!(data, [3, 1, 2]);
    }

    #[test]
    fn partition_places_pivot_with_ties_on_the_left() {
        // Pivot 3 at the end; both 3s must land at or left of the boundary.
        let mut data = [3, 5, 1, 3];
        let boundary = partition(&mut data, 0, 3, &mut i32::cmp);
        assert_eq!(data[boundary], 3);
        assert!(data[..boundary].iter().all(|&x| x <= 3));
        assert!(data[boundary + 1..].iter().all(|&x| x > 3));
    }
}
