//! Resynchronization search
//!
//! Starting from a mismatch, the scanner looks for the point where the two
//! buffers agree again. It probes a growing window `i`: the `cmp_len` bytes of
//! B at `b_off + i` are looked up in the part of A already covered by the
//! window, then the same is done with A's bytes inside B. The first hit is
//! approximate, because the window grows in steps, so it is refined before it
//! is reported:
//!
//! 1. every position skipped since the previous probe is probed again and the
//!    earliest hit wins,
//! 2. the matching run is extended backwards so the changed region ends exactly
//!    where equal content begins,
//! 3. in UTF-8 mode the boundary is pushed forward out of a multi-byte sequence.
//!
//! The step starts at `max(2, sqrt(total) / 4, total / 64)` and grows by a
//! quarter per probe up to [`ScanConfig::max_step`], keeping the search well
//! below quadratic. Coarse mode doubles the initial step and probes longer
//! substrings, trading precision for speed on very dissimilar inputs.

use crate::artifacts::core::config::ScanConfig;
use crate::artifacts::diff::byte_matcher::{is_continuation, rev_same_len};

/// Outcome of one resynchronization search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub a_move: usize,
    pub b_move: usize,
    /// `false` when no matching content was found before the end of the
    /// buffers and the moves cover both remainders
    pub resynced: bool,
}

impl Scan {
    fn resynced(a_move: usize, b_move: usize) -> Self {
        Scan {
            a_move,
            b_move,
            resynced: true,
        }
    }

    fn exhausted(a_move: usize, b_move: usize) -> Self {
        Scan {
            a_move,
            b_move,
            resynced: false,
        }
    }
}

/// Length of the changed region starting at `(a_off, b_off)` in each buffer.
///
/// Returns `(a_move, b_move)`: how many bytes of A and of B must be replaced
/// before matching content resumes.
pub fn diff_len(
    a: &[u8],
    b: &[u8],
    a_off: usize,
    b_off: usize,
    utf8: bool,
    coarse: bool,
    config: &ScanConfig,
) -> (usize, usize) {
    let scan = scan(a, b, a_off, b_off, utf8, coarse, config);
    (scan.a_move, scan.b_move)
}

/// Initial probe step for buffers totalling `total` bytes
pub fn match_size(total: usize, coarse: bool) -> usize {
    let size = 2.max(total.isqrt() / 4).max(total / 64);
    if coarse { size * 2 } else { size }
}

pub fn scan(
    a: &[u8],
    b: &[u8],
    a_off: usize,
    b_off: usize,
    utf8: bool,
    coarse: bool,
    config: &ScanConfig,
) -> Scan {
    let a_rem = a.len().saturating_sub(a_off);
    let b_rem = b.len().saturating_sub(b_off);

    if a_rem == 0 || b_rem == 0 {
        return Scan::exhausted(a_rem, b_rem);
    }

    let cmp_len = config.probe_len(coarse);
    let cap = config.step_cap();
    let mut step = match_size(a.len() + b.len(), coarse).min(cap);
    let (mut i, mut prev_i) = (0usize, 0usize);

    loop {
        if let Some(hit) = probe(a, b, a_off, b_off, i, cmp_len) {
            let lo = prev_i.saturating_sub(cmp_len);
            let hit = (lo..i)
                .find_map(|j| probe(a, b, a_off, b_off, j, cmp_len))
                .unwrap_or(hit);
            return refine(a, b, a_off, b_off, hit, utf8);
        }

        if i >= a_rem && i >= b_rem {
            break;
        }

        prev_i = i;
        i += step;
        step = (step + step / 4).max(step + 1).min(cap);
    }

    let tail = rev_same_len(&a[a_off..], &b[b_off..], utf8);
    let (a_move, b_move) = (a_rem - tail, b_rem - tail);
    if a_move == 0 && b_move == 0 {
        return Scan::exhausted(a_rem, b_rem);
    }
    Scan::exhausted(a_move, b_move)
}

/// Look for B's substring at `b_off + i` inside A's covered prefix, then for
/// A's substring at `a_off + i` inside B's covered prefix.
fn probe(
    a: &[u8],
    b: &[u8],
    a_off: usize,
    b_off: usize,
    i: usize,
    cmp_len: usize,
) -> Option<(usize, usize)> {
    covered_hit(b, a, b_off, a_off, i, cmp_len)
        .map(|p| (p, i))
        .or_else(|| covered_hit(a, b, a_off, b_off, i, cmp_len).map(|p| (i, p)))
}

fn covered_hit(
    needle_src: &[u8],
    hay_src: &[u8],
    needle_off: usize,
    hay_off: usize,
    i: usize,
    cmp_len: usize,
) -> Option<usize> {
    let start = needle_off + i;
    let needle = needle_src.get(start..start + cmp_len)?;
    let hay_end = hay_src.len().min(hay_off + i + cmp_len);
    let hay = hay_src.get(hay_off..hay_end)?;
    find(hay, needle)
}

pub(crate) fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    hay.windows(needle.len()).position(|window| window == needle)
}

fn refine(
    a: &[u8],
    b: &[u8],
    a_off: usize,
    b_off: usize,
    (a_hit, b_hit): (usize, usize),
    utf8: bool,
) -> Scan {
    let back = rev_same_len(
        &a[a_off..a_off + a_hit],
        &b[b_off..b_off + b_hit],
        utf8,
    );
    let (mut a_move, mut b_move) = (a_hit - back, b_hit - back);

    if utf8 {
        while a_off + a_move < a.len()
            && b_off + b_move < b.len()
            && (is_continuation(a[a_off + a_move]) || is_continuation(b[b_off + b_move]))
        {
            a_move += 1;
            b_move += 1;
        }
    }

    if a_move == 0 && b_move == 0 {
        // only reachable on malformed UTF-8; give up on this region
        return Scan::exhausted(a.len() - a_off, b.len() - b_off);
    }
    Scan::resynced(a_move, b_move)
}
