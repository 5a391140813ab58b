use crate::artifacts::diff::edit::{Edit, EditList, source_sort};

/// Invert an A→B edit list into the B→A list.
///
/// Every edit swaps its halves and the result is re-sorted by its new source
/// offset and length, so replaying it onto B reconstructs A.
pub fn reverse(edits: &[Edit]) -> EditList {
    let mut reversed = edits.iter().map(Edit::swapped).collect::<Vec<_>>();
    reversed.sort_by(source_sort);
    reversed
}
