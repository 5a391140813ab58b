//! Diff and merge data structures and algorithms
//!
//! - `core`: Scan tuning shared by every algorithm
//! - `diff`: Byte diffing in memory and over files
//! - `merge`: Edit list reversal and three-way merging

pub mod core;
pub mod diff;
pub mod merge;
