//! Sliding read window over a file
//!
//! A [`Segment`] owns a read-only file handle and keeps one window of the file
//! in memory, anchored at `seg_pos`. The handle is closed when the segment is
//! dropped, so every exit path of a file diff releases it.

use anyhow::Context;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Segment {
    file: File,
    path: PathBuf,
    len: u64,
    seg_pos: u64,
    window: usize,
    buffer: Vec<u8>,
}

impl Segment {
    /// Open `path` read-only and load the window at the start of the file
    pub fn open(path: &Path, window: usize) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("unable to open {} for reading", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("unable to stat {}", path.display()))?
            .len();

        let mut segment = Segment {
            file,
            path: path.to_path_buf(),
            len,
            seg_pos: 0,
            window,
            buffer: Vec::with_capacity(window),
        };
        segment.fetch(0)?;

        Ok(segment)
    }

    /// Total length of the file
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn seg_pos(&self) -> u64 {
        self.seg_pos
    }

    /// Bytes currently held in memory, starting at `seg_pos`
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Whether the window reaches the end of the file
    pub fn at_eof(&self) -> bool {
        self.seg_pos + self.buffer.len() as u64 >= self.len
    }

    /// Offset of `pos` inside the window; `pos` must be covered by it
    pub fn local(&self, pos: u64) -> usize {
        (pos - self.seg_pos) as usize
    }

    /// Make sure `pos` lies in the front half of the window.
    ///
    /// Once the scan passes the midpoint the window is refetched so that `pos`
    /// sits a quarter of a window from its start.
    pub fn ensure(&mut self, pos: u64) -> anyhow::Result<()> {
        let end = self.seg_pos + self.buffer.len() as u64;
        let midpoint = self.seg_pos + (self.window / 2) as u64;

        if pos < self.seg_pos || pos > end || (pos > midpoint && !self.at_eof()) {
            self.fetch(pos.saturating_sub((self.window / 4) as u64))?;
        }

        Ok(())
    }

    /// Load the window starting at `seg_pos`
    pub fn fetch(&mut self, seg_pos: u64) -> anyhow::Result<()> {
        let len = self.window.min(self.len.saturating_sub(seg_pos) as usize);

        self.buffer.resize(len, 0);
        self.file
            .seek(SeekFrom::Start(seg_pos))
            .and_then(|_| self.file.read_exact(&mut self.buffer))
            .with_context(|| {
                format!("unable to read {} at offset {}", self.path.display(), seg_pos)
            })?;
        self.seg_pos = seg_pos;

        tracing::debug!(path = %self.path.display(), seg_pos, len, "fetched window");
        Ok(())
    }

    /// Read up to `len` bytes at `pos` without moving the window
    pub fn read_chunk(&mut self, pos: u64, len: usize) -> anyhow::Result<Vec<u8>> {
        let len = len.min(self.len.saturating_sub(pos) as usize);
        let mut chunk = vec![0; len];

        if len > 0 {
            self.file
                .seek(SeekFrom::Start(pos))
                .and_then(|_| self.file.read_exact(&mut chunk))
                .with_context(|| {
                    format!("unable to read {} at offset {}", self.path.display(), pos)
                })?;
        }

        Ok(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteBin, PathChild};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn numbered_file() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let content = (0..4096u32).map(|i| (i % 251) as u8).collect::<Vec<_>>();
        let file = dir.child("numbers.bin");
        file.write_binary(&content).expect("Failed to write file");
        let path = file.path().to_path_buf();
        (dir, path)
    }

    #[rstest]
    fn open_loads_first_window(numbered_file: (TempDir, PathBuf)) -> anyhow::Result<()> {
        let (_dir, path) = numbered_file;
        let segment = Segment::open(&path, 1024)?;

        assert_eq!(segment.len(), 4096);
        assert_eq!(segment.seg_pos(), 0);
        assert_eq!(segment.buffer().len(), 1024);
        assert!(!segment.at_eof());
        Ok(())
    }

    #[rstest]
    fn ensure_refetches_past_midpoint(numbered_file: (TempDir, PathBuf)) -> anyhow::Result<()> {
        let (_dir, path) = numbered_file;
        let mut segment = Segment::open(&path, 1024)?;

        segment.ensure(400)?;
        assert_eq!(segment.seg_pos(), 0);

        segment.ensure(600)?;
        assert_eq!(segment.seg_pos(), 344);
        assert_eq!(segment.buffer()[segment.local(600)], (600 % 251) as u8);
        Ok(())
    }

    #[rstest]
    fn ensure_keeps_final_window(numbered_file: (TempDir, PathBuf)) -> anyhow::Result<()> {
        let (_dir, path) = numbered_file;
        let mut segment = Segment::open(&path, 1024)?;

        segment.ensure(3800)?;
        let seg_pos = segment.seg_pos();
        assert!(segment.at_eof());

        segment.ensure(4096)?;
        assert_eq!(segment.seg_pos(), seg_pos);
        assert_eq!(segment.local(4096), segment.buffer().len());
        Ok(())
    }

    #[rstest]
    fn read_chunk_is_clamped_to_file(numbered_file: (TempDir, PathBuf)) -> anyhow::Result<()> {
        let (_dir, path) = numbered_file;
        let mut segment = Segment::open(&path, 1024)?;

        assert_eq!(segment.read_chunk(4090, 11)?.len(), 6);
        assert!(segment.read_chunk(5000, 11)?.is_empty());
        assert_eq!(segment.seg_pos(), 0);
        Ok(())
    }

    #[rstest]
    fn open_fails_for_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let missing = dir.path().join("missing.txt");

        let error = Segment::open(&missing, 1024).unwrap_err();
        assert!(error.to_string().contains("missing.txt"));
    }
}
