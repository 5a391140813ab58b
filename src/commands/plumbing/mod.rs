//! Plumbing commands (raw scanner primitives)
//!
//! Plumbing commands expose the building blocks of the diff engine on two
//! files. They are mostly useful for scripting and for inspecting why a diff
//! came out the way it did.
//!
//! ## Commands
//!
//! - `same-len`: Length of the common run starting at two offsets
//! - `rev-same-len`: Length of the common suffix
//! - `diff-len`: Length of the changed region starting at two offsets

pub mod diff_len;
pub mod same_len;
