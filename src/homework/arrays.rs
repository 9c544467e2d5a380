//! Array drills: dedup both ways and the "second maximum" search, solved a
//! few different ways like the lesson asks.

use std::collections::{BinaryHeap, HashSet};

use itertools::Itertools;

// ============================================================================
// Drill 2: Remove duplicates
// ============================================================================

/// Distinct values in first-occurrence order.
pub fn distinct(values: &[i32]) -> Vec<i32> {
    values.iter().copied().unique().collect()
}

/// Distinct values with no order guarantee.
pub fn distinct_unordered(values: &[i32]) -> HashSet<i32> {
    values.iter().copied().collect()
}

// ============================================================================
// Drill 3: Second maximum
// ============================================================================
// The lesson input holds distinct values; with duplicates the variants agree
// on "second largest distinct value" because the single-pass tracker skips
// repeats of the maximum.

/// Second maximum by sorting a copy and reading the second element from the
/// end. `None` when there are fewer than two distinct values.
pub fn second_max_by_sort(values: &[i32]) -> Option<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len().checked_sub(2).map(|i| sorted[i])
}

/// Second maximum via a descending sorted iterator, skipping the maximum.
pub fn second_max_by_iter(values: &[i32]) -> Option<i32> {
    values
        .iter()
        .copied()
        .unique()
        .sorted_by(|a, b| b.cmp(a))
        .nth(1)
}

/// Second maximum in one pass, tracking the two largest values seen so far.
pub fn second_max_single_pass(values: &[i32]) -> Option<i32> {
    let mut max: Option<i32> = None;
    let mut second: Option<i32> = None;
    for &value in values {
        match max {
            Some(m) if value > m => {
                second = max;
                max = Some(value);
            }
            Some(m) if value < m && second.map_or(true, |s| value > s) => {
                second = Some(value);
            }
            None => max = Some(value),
            _ => {}
        }
    }
    second
}

/// Second maximum with a max-heap: pop the maximum, peek the runner-up.
pub fn second_max_by_heap(values: &[i32]) -> Option<i32> {
    let mut heap: BinaryHeap<i32> = values.iter().copied().collect();
    let max = heap.pop()?;
    // Skip duplicates of the maximum.
    while heap.peek() == Some(&max) {
        heap.pop();
    }
    heap.peek().copied()
}
