use crate::artifacts::diff::edit::{Edit, SourceOrdered};
use derive_new::new;
use std::fmt;

/// Tag of the left (first, winning) edit list: source B
pub const LEFT: usize = 1;
/// Tag of the right edit list: source C
pub const RIGHT: usize = 2;

/// An edit on the common ancestor, tagged with the source that supplies its
/// replacement bytes and placed in the merged output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct MergeEdit {
    /// 1-based source tag; [`LEFT`] and [`RIGHT`] for a two-way merge
    pub source: usize,
    pub a_offset: usize,
    pub a_length: usize,
    /// Offset of the replacement bytes in the tagged source
    pub src_offset: usize,
    pub src_length: usize,
    /// Offset of the replacement bytes in the merged output
    pub x_offset: usize,
    pub x_length: usize,
}

impl MergeEdit {
    /// Place `edit` from source `source` at `x_offset` in the merged output
    pub fn from_edit(edit: &Edit, source: usize, x_offset: usize) -> Self {
        MergeEdit::new(
            source,
            edit.a_offset,
            edit.a_length,
            edit.b_offset,
            edit.b_length,
            x_offset,
            edit.b_length,
        )
    }

    pub fn a_end(&self) -> usize {
        self.a_offset + self.a_length
    }

    pub fn src_end(&self) -> usize {
        self.src_offset + self.src_length
    }
}

impl SourceOrdered for MergeEdit {
    fn source_offset(&self) -> usize {
        self.a_offset
    }

    fn source_length(&self) -> usize {
        self.a_length
    }
}

impl fmt::Display for MergeEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@ source {} at {},{}",
            self.a_offset,
            self.a_length,
            self.x_offset,
            self.x_length,
            self.source,
            self.src_offset,
            self.src_length
        )
    }
}

/// Whether two edits on the same ancestor touch the same bytes.
///
/// Edits that only share a boundary do not conflict, and neither do two
/// insertions at the same offset.
pub fn is_conflicting(x: &Edit, y: &Edit) -> bool {
    x.a_offset < y.a_end() && y.a_offset < x.a_end()
}
