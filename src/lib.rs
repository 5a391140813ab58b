//! Heuristic byte diff and three-way merge
//!
//! The diff engine turns two byte sequences into a list of [`Edit`]s that
//! rebuilds the second from the first. It favours speed over minimality: after
//! each mismatch it looks for the nearest point where both inputs agree again
//! with a growing probe step, and switches to a coarser search when the inputs
//! turn out to be very dissimilar. Files can be diffed without loading them
//! into memory.
//!
//! Edit lists can be reversed and two edit lists against a common ancestor
//! can be merged into one, with the left list winning every conflict.

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::core::config::ScanConfig;
pub use artifacts::diff::byte_matcher::{rev_same_len, same_len};
pub use artifacts::diff::diff_scanner::diff_len;
pub use artifacts::diff::edit::{Edit, EditList, apply, source_sort};
pub use artifacts::diff::edit_list_builder::{diff, diff_with};
pub use artifacts::diff::file_diff::{diff_files, diff_files_with};
pub use artifacts::merge::assemble::{assemble_merge, merge3, merge3_with};
pub use artifacts::merge::merge_edit::{LEFT, MergeEdit, RIGHT, is_conflicting};
pub use artifacts::merge::merge_left::merge_left;
pub use artifacts::merge::reverse::reverse;
