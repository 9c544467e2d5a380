//! Lesson 2: the hand-rolled ArrayList and its quicksort
//!
//! Run with: cargo run --bin p2_arraylist

use custom_arraylist::{quicksort, ArrayList};

fn main() {
    println!("=== Building a List ===\n");
    let mut list = ArrayList::new();
    for i in 1..=10 {
        list.add(i);
    }
    println!("  after ten adds: size={}, capacity={}", list.size(), list.capacity());

    list.add(11);
    println!(
        "  one more add triggers growth: size={}, capacity={}",
        list.size(),
        list.capacity()
    );
    println!("  contents: {list}");

    println!("\n=== Insert, Search, Remove ===\n");
    list.insert(0, 0).expect("index 0 is in range");
    println!("  insert 0 at the front: {list}");
    println!("  index_of(&7) = {:?}", list.index_of(&7));
    println!("  contains(&42) = {}", list.contains(&42));

    let removed = list.remove_at(0).expect("list is non-empty");
    println!("  remove_at(0) returned {removed}: {list}");
    println!("  remove(&11) = {}: {list}", list.remove(&11));

    println!("\n=== Out-of-range Access ===\n");
    match list.remove_at(99) {
        Ok(_) => unreachable!("index 99 is far past the end"),
        Err(e) => println!("  remove_at(99) -> {e}"),
    }

    println!("\n=== Sorting ===\n");
    let mut unsorted: ArrayList<i32> = [5, 2, 8, 2, 5, 1].into_iter().collect();
    println!("  start:      {unsorted}");
    unsorted.sort();
    println!("  ascending:  {unsorted}");
    unsorted.sort_by(|a, b| b.cmp(a));
    println!("  descending: {unsorted}");

    println!("\n=== The Sorter on a Plain Slice ===\n");
    let mut data = [9, 4, 3, 2, 9, 7];
    quicksort::sort(&mut data);
    println!("  sorted slice: {data:?}");
}
