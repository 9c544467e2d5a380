//! Lesson 1: string and array warm-up drills
//!
//! Run with: cargo run --bin p1_homework

use custom_arraylist::homework::{arrays, strings};

fn main() {
    let to_reverse = "I love Rust";
    let ints = [1, 2, 2, 3, 4, 5, 5, 6, 7, 8, 8, 9];
    let arr = [10, 15, 23, 11, 44, 13, 66, 1, 6, 47];

    println!("=== Drill 1: Reverse a String ===\n");
    println!("  input:     {to_reverse:?}");
    println!("  iterator:  {:?}", strings::reversed(to_reverse));
    println!("  loop:      {:?}", strings::reversed_pushing(to_reverse));
    println!("  recursion: {:?}", strings::reversed_recursive(to_reverse));

    println!("\n=== Drill 2: Remove Duplicates ===\n");
    println!("  input:     {ints:?}");
    println!("  ordered:   {:?}", arrays::distinct(&ints));
    println!("  unordered: {:?}", arrays::distinct_unordered(&ints));

    println!("\n=== Drill 3: Second Maximum ===\n");
    println!("  input:       {arr:?}");
    println!("  sort:        {:?}", arrays::second_max_by_sort(&arr));
    println!("  iterator:    {:?}", arrays::second_max_by_iter(&arr));
    println!("  single pass: {:?}", arrays::second_max_single_pass(&arr));
    println!("  heap:        {:?}", arrays::second_max_by_heap(&arr));

    println!("\n=== Drill 4: Length of the Last Word ===\n");
    for input in ["Hello world", "    fly me    to the moon    "] {
        println!(
            "  {:?} -> {}",
            input,
            strings::length_of_last_word(input)
        );
    }

    println!("\n=== Drill 5: Palindromes ===\n");
    for input in ["abc", "112233", "aba", "112211", "I love RustsuR evol I"] {
        println!("  {:?} -> {}", input, strings::is_palindrome(input));
    }
}
