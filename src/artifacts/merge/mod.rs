//! Three-way merging of edit lists
//!
//! - `merge_edit`: Edits on the ancestor tagged with their source
//! - `reverse`: Inverting an edit list
//! - `merge_left`: Combining two edit lists, left side first
//! - `assemble`: Building the merged bytes from a merge list

pub mod assemble;
pub mod merge_edit;
pub mod merge_left;
pub mod reverse;
