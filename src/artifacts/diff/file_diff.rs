//! Bounded-memory diff of two files
//!
//! Runs the same prefix-skip / resync loop as the in-memory builder, but
//! against one [`Segment`] per file so memory use stays at two windows no
//! matter how large the files are.
//!
//! When the scanner finds no resync point inside the loaded windows and at
//! least one of them does not reach the end of its file, the answer may lie
//! outside memory. The engine then falls back to a segment-local search that
//! walks anchors forward by half a window and looks up small trailing chunks
//! of one file around the matching anchor of the other.
//!
//! ## Limitations
//!
//! The windows never hold more than one window's worth of context, so a resync
//! point that only a longer view would reveal can be missed. The resulting edit
//! list is larger than necessary but still reproduces the target exactly.

use crate::areas::segment::Segment;
use crate::artifacts::core::config::ScanConfig;
use crate::artifacts::diff::byte_matcher::{rev_same_len, same_len};
use crate::artifacts::diff::diff_scanner::{find, scan};
use crate::artifacts::diff::edit::{Edit, EditList};
use anyhow::Context;
use std::path::Path;

/// Diff two files with the default tuning.
///
/// Fails without a partial result if either file cannot be opened or read.
pub fn diff_files(path_a: impl AsRef<Path>, path_b: impl AsRef<Path>) -> anyhow::Result<EditList> {
    diff_files_with(path_a, path_b, &ScanConfig::default())
}

pub fn diff_files_with(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    config: &ScanConfig,
) -> anyhow::Result<EditList> {
    let window = config.window();
    let mut a = Segment::open(path_a.as_ref(), window)?;
    let mut b = Segment::open(path_b.as_ref(), window)?;

    FileDiff::new(&mut a, &mut b, config).run()
}

struct FileDiff<'s> {
    a: &'s mut Segment,
    b: &'s mut Segment,
    config: &'s ScanConfig,
    coarse: bool,
}

impl<'s> FileDiff<'s> {
    fn new(a: &'s mut Segment, b: &'s mut Segment, config: &'s ScanConfig) -> Self {
        FileDiff {
            a,
            b,
            config,
            coarse: false,
        }
    }

    fn run(mut self) -> anyhow::Result<EditList> {
        let mut edits = Vec::new();
        let (mut a_pos, mut b_pos) = (0u64, 0u64);
        let mut iterations = 0usize;

        loop {
            let same = self.skip_same(a_pos, b_pos)?;
            a_pos += same;
            b_pos += same;

            if a_pos >= self.a.len() && b_pos >= self.b.len() {
                break;
            }

            iterations += 1;
            if !self.coarse && iterations > self.config.file_coarse_after {
                self.coarse = true;
                tracing::debug!(iterations, a_pos, b_pos, "switching file diff to coarse matching");
            }

            self.a.ensure(a_pos)?;
            self.b.ensure(b_pos)?;
            let found = scan(
                self.a.buffer(),
                self.b.buffer(),
                self.a.local(a_pos),
                self.b.local(b_pos),
                false,
                self.coarse,
                self.config,
            );

            let (a_move, b_move) = if found.resynced || (self.a.at_eof() && self.b.at_eof()) {
                (found.a_move as u64, found.b_move as u64)
            } else {
                tracing::debug!(a_pos, b_pos, "no resync inside the windows, searching segments");
                self.diff_len_segment(a_pos, b_pos)?
            };

            let edit = Edit::new(
                to_offset(a_pos)?,
                to_offset(a_move)?,
                to_offset(b_pos)?,
                to_offset(b_move)?,
            );
            tracing::trace!(%edit, "edit");
            edits.push(edit);

            a_pos += a_move;
            b_pos += b_move;
        }

        Ok(edits)
    }

    /// Common prefix length starting at the two positions, refetching windows
    /// while the match runs into the end of one
    fn skip_same(&mut self, a_pos: u64, b_pos: u64) -> anyhow::Result<u64> {
        let mut total = 0u64;

        loop {
            self.a.ensure(a_pos + total)?;
            self.b.ensure(b_pos + total)?;
            let (a_local, b_local) = (self.a.local(a_pos + total), self.b.local(b_pos + total));

            let same = same_len(self.a.buffer(), self.b.buffer(), a_local, b_local, false);
            total += same as u64;

            let a_cut = a_local + same >= self.a.buffer().len() && !self.a.at_eof();
            let b_cut = b_local + same >= self.b.buffer().len() && !self.b.at_eof();
            if same == 0 || !(a_cut || b_cut) {
                return Ok(total);
            }
        }
    }

    /// Resync search outside the loaded windows.
    ///
    /// Anchors move forward by half a window. At each anchor the chunk just
    /// before B's anchor is looked up around A's anchor (content that moved
    /// back, as after an insertion or deletion), then the chunk just before
    /// A's anchor around B's anchor (a replacement inside the segment).
    fn diff_len_segment(&mut self, a_pos: u64, b_pos: u64) -> anyhow::Result<(u64, u64)> {
        let a_rem = self.a.len() - a_pos;
        let b_rem = self.b.len() - b_pos;
        if a_rem == 0 || b_rem == 0 {
            return Ok((a_rem, b_rem));
        }

        let chunk = self.config.chunk_len(self.coarse);
        let stride = (self.config.window() / 2) as u64;
        let mut distance = stride;

        loop {
            let a_anchor = a_pos + distance;
            let b_anchor = b_pos + distance;
            if a_anchor >= self.a.len() && b_anchor >= self.b.len() {
                break;
            }

            let back_reference = chunk_hit(
                &mut *self.b,
                (b_anchor, b_pos),
                &mut *self.a,
                (a_anchor, a_pos),
                chunk,
                stride,
            )?
            .map(|(b_hit, a_hit)| (a_hit, b_hit));
            let hit = match back_reference {
                Some(hit) => Some(hit),
                None => chunk_hit(
                    &mut *self.a,
                    (a_anchor, a_pos),
                    &mut *self.b,
                    (b_anchor, b_pos),
                    chunk,
                    stride,
                )?,
            };

            if let Some((a_hit, b_hit)) = hit {
                let back = self.rev_same_len_between(a_pos, a_hit, b_pos, b_hit)?;
                let (a_move, b_move) = (a_hit - a_pos - back, b_hit - b_pos - back);
                if a_move > 0 || b_move > 0 {
                    tracing::debug!(a_move, b_move, distance, "segment search resynchronized");
                    return Ok((a_move, b_move));
                }
            }

            distance += stride;
        }

        let tail = self.rev_same_len_between(a_pos, self.a.len(), b_pos, self.b.len())?;
        if tail == a_rem && tail == b_rem {
            return Ok((a_rem, b_rem));
        }
        Ok((a_rem - tail, b_rem - tail))
    }

    /// Common suffix length of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`, read back
    /// to front one window at a time
    fn rev_same_len_between(
        &mut self,
        a_lo: u64,
        a_hi: u64,
        b_lo: u64,
        b_hi: u64,
    ) -> anyhow::Result<u64> {
        let window = self.config.window() as u64;
        let mut total = 0u64;

        loop {
            let n = window.min(a_hi - a_lo - total).min(b_hi - b_lo - total);
            if n == 0 {
                return Ok(total);
            }

            let a_chunk = self.a.read_chunk(a_hi - total - n, n as usize)?;
            let b_chunk = self.b.read_chunk(b_hi - total - n, n as usize)?;
            let same = rev_same_len(&a_chunk, &b_chunk, false) as u64;
            total += same;

            if same < n {
                return Ok(total);
            }
        }
    }
}

/// Look up the `chunk` bytes that end at the needle anchor inside `hay`,
/// within `reach` bytes of the hay anchor. Each side is `(anchor, floor)`; no
/// byte before its floor is used. Returns the needle position and the hay
/// position of the first hit.
fn chunk_hit(
    needle: &mut Segment,
    (needle_anchor, needle_floor): (u64, u64),
    hay: &mut Segment,
    (hay_anchor, hay_floor): (u64, u64),
    chunk: usize,
    reach: u64,
) -> anyhow::Result<Option<(u64, u64)>> {
    if needle_anchor > needle.len() {
        return Ok(None);
    }
    let Some(needle_start) = needle_anchor.checked_sub(chunk as u64) else {
        return Ok(None);
    };
    if needle_start < needle_floor {
        return Ok(None);
    }

    let center = hay_anchor.min(hay.len());
    let hay_start = center.saturating_sub(reach).max(hay_floor);
    let hay_end = (center + reach).min(hay.len());
    if hay_end <= hay_start {
        return Ok(None);
    }

    let needle_bytes = needle.read_chunk(needle_start, chunk)?;
    let hay_bytes = hay.read_chunk(hay_start, (hay_end - hay_start) as usize)?;

    Ok(find(&hay_bytes, &needle_bytes).map(|p| (needle_start, hay_start + p as u64)))
}

fn to_offset(value: u64) -> anyhow::Result<usize> {
    usize::try_from(value).context("file offset does not fit in memory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::edit::apply;
    use crate::artifacts::diff::edit_list_builder::diff;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteBin, PathChild};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};
    use std::path::PathBuf;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let file = dir.child(name);
        file.write_binary(content).expect("Failed to write file");
        file.path().to_path_buf()
    }

    fn noise(seed: u64, len: usize) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 56) as u8
            })
            .collect()
    }

    #[fixture]
    fn dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    fn small_windows() -> ScanConfig {
        ScanConfig::default().with_window_size(512)
    }

    #[rstest]
    fn same_file_has_no_edits(dir: TempDir) -> anyhow::Result<()> {
        let path = write(&dir, "a.txt", &noise(7, 5000));

        assert_eq!(diff_files(&path, &path)?, vec![]);
        assert_eq!(diff_files_with(&path, &path, &small_windows())?, vec![]);
        Ok(())
    }

    #[rstest]
    fn small_files_match_in_memory_diff(dir: TempDir) -> anyhow::Result<()> {
        let a = b"The quick brown fox jumps over the lazy dog.";
        let b = b"The quick brown fox leaps over my wierd big lazy pig.";
        let path_a = write(&dir, "a.txt", a);
        let path_b = write(&dir, "b.txt", b);

        assert_eq!(diff_files(&path_a, &path_b)?, diff(a, b, false));
        Ok(())
    }

    #[rstest]
    fn scattered_edits_round_trip_with_small_windows(dir: TempDir) -> anyhow::Result<()> {
        let a = noise(1, 6000);
        let mut b = a.clone();
        b.splice(100..110, b"REPLACED".iter().copied());
        b.splice(2000..2000, b"inserted text ".iter().copied());
        b.drain(4000..4100);
        b.extend_from_slice(b"tail");
        let path_a = write(&dir, "a.txt", &a);
        let path_b = write(&dir, "b.txt", &b);

        let edits = diff_files_with(&path_a, &path_b, &small_windows())?;

        assert_eq!(apply(&edits, &a, &b)?, b);
        assert!(edits.len() < 20);
        Ok(())
    }

    #[rstest]
    fn insertion_larger_than_window_resynchronizes(dir: TempDir) -> anyhow::Result<()> {
        let a = noise(3, 4000);
        let mut b = a[..1500].to_vec();
        b.extend(noise(99, 3000));
        b.extend_from_slice(&a[1500..]);
        let path_a = write(&dir, "a.txt", &a);
        let path_b = write(&dir, "b.txt", &b);

        let edits = diff_files_with(&path_a, &path_b, &small_windows())?;

        assert_eq!(apply(&edits, &a, &b)?, b);
        assert_eq!(edits.iter().map(|edit| edit.a_length).sum::<usize>(), 0);
        Ok(())
    }

    #[rstest]
    fn unrelated_files_round_trip(dir: TempDir) -> anyhow::Result<()> {
        let a = noise(5, 3000);
        let b = noise(6, 2500);
        let path_a = write(&dir, "a.txt", &a);
        let path_b = write(&dir, "b.txt", &b);

        let edits = diff_files_with(&path_a, &path_b, &small_windows())?;

        assert_eq!(apply(&edits, &a, &b)?, b);
        Ok(())
    }

    #[rstest]
    fn empty_files(dir: TempDir) -> anyhow::Result<()> {
        let empty = write(&dir, "empty.txt", b"");
        let full = write(&dir, "full.txt", b"content");

        assert_eq!(diff_files(&empty, &empty)?, vec![]);
        assert_eq!(diff_files(&empty, &full)?, vec![Edit::new(0, 0, 0, 7)]);
        assert_eq!(diff_files(&full, &empty)?, vec![Edit::new(0, 7, 0, 0)]);
        Ok(())
    }

    #[rstest]
    fn missing_file_is_fatal(dir: TempDir) {
        let present = write(&dir, "present.txt", b"content");
        let missing = dir.path().join("missing.txt");

        assert!(diff_files(&present, &missing).is_err());
        assert!(diff_files(&missing, &present).is_err());
    }

    proptest! {
        #[test]
        fn files_within_one_window_match_in_memory_diff(
            a in proptest::collection::vec(0u8..6, 0..400),
            b in proptest::collection::vec(0u8..6, 0..400),
        ) {
            let dir = TempDir::new().expect("Failed to create temp dir");
            let path_a = write(&dir, "a.bin", &a);
            let path_b = write(&dir, "b.bin", &b);

            prop_assert_eq!(diff_files(&path_a, &path_b).unwrap(), diff(&a, &b, false));
        }
    }
}
