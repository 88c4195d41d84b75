//! Exhaustive permutation enumeration.
//!
//! - [`for_each_permutation`] — Heap's (1963) in-place swap enumeration, O(n!)

mod heap;

pub use heap::{for_each_permutation, permutation_count};
