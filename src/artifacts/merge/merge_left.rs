use crate::artifacts::diff::edit::{Edit, source_sort};
use crate::artifacts::merge::merge_edit::{LEFT, MergeEdit, RIGHT, is_conflicting};
use std::cmp::Ordering;

/// Three-way merge of two edit lists against the same ancestor.
///
/// Both lists are walked in ascending ancestor order like a merge-join. When
/// the current left and right edits touch the same ancestor bytes, the right
/// edit is dropped and the left one survives: the left list always wins a
/// conflict. Otherwise the edit that starts first is emitted, placed after
/// everything emitted so far in the merged output.
pub fn merge_left(left: &[Edit], right: &[Edit]) -> Vec<MergeEdit> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);
    let mut delta = 0isize;

    let mut emit = |edit: &Edit, source: usize, merged: &mut Vec<MergeEdit>| {
        let x_offset = edit.a_offset.saturating_add_signed(delta);
        merged.push(MergeEdit::from_edit(edit, source, x_offset));
        delta += edit.b_length as isize - edit.a_length as isize;
    };

    while l < left.len() && r < right.len() {
        let (x, y) = (&left[l], &right[r]);

        if is_conflicting(x, y) {
            tracing::debug!(left = %x, right = %y, "dropping conflicting right edit");
            r += 1;
            continue;
        }

        match source_sort(x, y) {
            Ordering::Greater => {
                emit(y, RIGHT, &mut merged);
                r += 1;
            }
            _ => {
                emit(x, LEFT, &mut merged);
                l += 1;
            }
        }
    }

    for edit in &left[l..] {
        emit(edit, LEFT, &mut merged);
    }
    for edit in &right[r..] {
        emit(edit, RIGHT, &mut merged);
    }

    merged.sort_by(source_sort);
    merged
}
