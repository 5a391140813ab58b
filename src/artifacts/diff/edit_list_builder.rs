//! In-memory diff driver
//!
//! Alternates between skipping the common prefix and asking the scanner for
//! the length of the next changed region, recording one [`Edit`] per region.

use crate::artifacts::core::config::ScanConfig;
use crate::artifacts::diff::byte_matcher::same_len;
use crate::artifacts::diff::diff_scanner::diff_len;
use crate::artifacts::diff::edit::{Edit, EditList};

/// Diff `a` against `b` with the default tuning.
///
/// With `utf8` set, no edit starts or ends inside a multi-byte sequence of
/// valid UTF-8 input.
pub fn diff(a: &[u8], b: &[u8], utf8: bool) -> EditList {
    diff_with(a, b, utf8, &ScanConfig::default())
}

pub fn diff_with(a: &[u8], b: &[u8], utf8: bool, config: &ScanConfig) -> EditList {
    let mut edits = Vec::new();
    let (mut a_off, mut b_off) = (0, 0);
    let mut iterations = 0usize;
    let mut coarse = false;

    loop {
        let same = same_len(a, b, a_off, b_off, utf8);
        a_off += same;
        b_off += same;

        if a_off >= a.len() && b_off >= b.len() {
            break;
        }

        iterations += 1;
        if !coarse && iterations > config.coarse_after {
            coarse = true;
            tracing::debug!(iterations, a_off, b_off, "switching diff to coarse matching");
        }

        let (a_move, b_move) = diff_len(a, b, a_off, b_off, utf8, coarse, config);
        let edit = Edit::new(a_off, a_move, b_off, b_move);
        tracing::trace!(%edit, "edit");
        edits.push(edit);

        a_off += a_move;
        b_off += b_move;
    }

    edits
}
