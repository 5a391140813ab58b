//! Edit records
//!
//! An [`Edit`] replaces `a_length` bytes of source A starting at `a_offset`
//! with the `b_length` bytes of source B starting at `b_offset`. An edit with
//! `a_length == 0` is an insertion, one with `b_length == 0` a deletion.
//!
//! An [`EditList`] is ascending by `(a_offset, a_length)` and its edits never
//! overlap in A. Replaying it onto A, copying the untouched spans verbatim,
//! yields B.

use derive_new::new;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, new)]
pub struct Edit {
    pub a_offset: usize,
    pub a_length: usize,
    pub b_offset: usize,
    pub b_length: usize,
}

pub type EditList = Vec<Edit>;

impl Edit {
    /// First A offset past the replaced range
    pub fn a_end(&self) -> usize {
        self.a_offset + self.a_length
    }

    /// First B offset past the replacement bytes
    pub fn b_end(&self) -> usize {
        self.b_offset + self.b_length
    }

    /// The same edit seen from B towards A
    pub fn swapped(&self) -> Self {
        Edit::new(self.b_offset, self.b_length, self.a_offset, self.a_length)
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.a_offset, self.a_length, self.b_offset, self.b_length
        )
    }
}

/// Records that can be ordered by their position in the ancestor
pub trait SourceOrdered {
    fn source_offset(&self) -> usize;
    fn source_length(&self) -> usize;
}

impl SourceOrdered for Edit {
    fn source_offset(&self) -> usize {
        self.a_offset
    }

    fn source_length(&self) -> usize {
        self.a_length
    }
}

/// Ascending by offset, then by length
pub fn source_sort<T: SourceOrdered>(x: &T, y: &T) -> Ordering {
    x.source_offset()
        .cmp(&y.source_offset())
        .then_with(|| x.source_length().cmp(&y.source_length()))
}

/// Replay `edits` onto `a`, taking replacement bytes from `b`.
///
/// Fails when the list is unordered, overlapping or points outside either
/// buffer.
pub fn apply(edits: &[Edit], a: &[u8], b: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut output = Vec::with_capacity(b.len().max(a.len()));
    let mut cursor = 0;

    for edit in edits {
        if edit.a_offset < cursor {
            anyhow::bail!("edit {} overlaps the previous edit (cursor at {})", edit, cursor);
        }
        if edit.a_end() > a.len() {
            anyhow::bail!("edit {} reaches past the source ({} bytes)", edit, a.len());
        }
        if edit.b_end() > b.len() {
            anyhow::bail!("edit {} reaches past the target ({} bytes)", edit, b.len());
        }

        output.extend_from_slice(&a[cursor..edit.a_offset]);
        output.extend_from_slice(&b[edit.b_offset..edit.b_end()]);
        cursor = edit.a_end();
    }

    output.extend_from_slice(&a[cursor..]);
    Ok(output)
}
