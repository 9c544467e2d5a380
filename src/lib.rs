//! # Custom ArrayList
//!
//! Introductory exercises built around one real data structure: a
//! hand-rolled growable list ([`ArrayList`]) and the recursive quicksort
//! ([`quicksort`]) it delegates its ordering to.
//!
//! ## Lessons Covered
//!
//! 1. **Warm-up drills** ([`homework`]) - string reversal, dedup,
//!    second-maximum search, palindromes
//! 2. **Growable list** ([`ArrayList`]) - capacity vs length, the 1.5x + 1
//!    growth policy, shifting insert/remove, linear search
//! 3. **Quicksort** ([`quicksort`]) - Lomuto partition, comparator-driven
//!    ordering, recursion and its worst case
//!
//! ## Running Examples
//!
//! ```bash
//! # Lesson 1: string and array drills
//! cargo run --bin p1_homework
//!
//! # Lesson 2: the list and its sort
//! cargo run --bin p2_arraylist
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the library error type
//! - `itertools` - Ordered dedup and display joining
//! - `proptest` / `criterion` - Property tests and benchmarks (dev)

pub mod array_list;
pub mod error;
pub mod homework;
pub mod quicksort;

pub use array_list::ArrayList;
pub use error::ListError;
