//! Porcelain commands (user-facing diff and merge)
//!
//! ## Commands
//!
//! - `diff`: Show the edit list turning one file into another
//! - `merge`: Three-way merge of two descendants of a common ancestor

pub mod diff;
pub mod merge;
