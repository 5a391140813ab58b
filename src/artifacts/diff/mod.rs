//! Byte-level diffing
//!
//! This module implements the heuristic diff between two byte sequences:
//!
//! - `edit`: The edit record, edit lists and replaying them
//! - `byte_matcher`: Forward and backward common-run measurement
//! - `diff_scanner`: Resynchronization after a mismatch
//! - `edit_list_builder`: The in-memory diff driver
//! - `file_diff`: The same driver over windowed file segments
//!
//! The diff does not look for a minimal edit script. It trades optimality for
//! speed and gives up on resynchronizing when the remaining inputs share no
//! recognizable content.

pub mod byte_matcher;
pub mod diff_scanner;
pub mod edit;
pub mod edit_list_builder;
pub mod file_diff;
