//! Scanner tuning
//!
//! All knobs of the resynchronization search live here instead of being
//! hard-coded, so callers can tune them per input size and tests can drive the
//! scanner with small windows.

use derive_new::new;

/// Default substring length probed when looking for a resync point
pub const DEFAULT_CMP_LEN: usize = 4;
/// Probe length used once a diff switched to coarse mode
pub const DEFAULT_COARSE_CMP_LEN: usize = 12;
/// Upper bound for the probe step
pub const DEFAULT_MAX_STEP: usize = 4096;
/// In-memory iterations before coarse mode engages
pub const DEFAULT_COARSE_AFTER: usize = 15_000;
/// File iterations before coarse mode engages
pub const DEFAULT_FILE_COARSE_AFTER: usize = 30_000;
/// Size of each file read window
pub const DEFAULT_WINDOW_SIZE: usize = 2 * 1024 * 1024;
/// Trailing chunk length used by the segment-local search
pub const DEFAULT_SEGMENT_CHUNK: usize = 11;
/// Trailing chunk length used by the segment-local search in coarse mode
pub const DEFAULT_COARSE_SEGMENT_CHUNK: usize = 119;

/// Smallest probe length that still guarantees progress on UTF-8 input
/// (a multi-byte sequence is at most four bytes long).
const MIN_CMP_LEN: usize = 4;
/// Smallest read window the file engine accepts.
const MIN_WINDOW_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ScanConfig {
    pub cmp_len: usize,
    pub coarse_cmp_len: usize,
    pub max_step: usize,
    pub coarse_after: usize,
    pub file_coarse_after: usize,
    pub window_size: usize,
    pub segment_chunk: usize,
    pub coarse_segment_chunk: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig::new(
            DEFAULT_CMP_LEN,
            DEFAULT_COARSE_CMP_LEN,
            DEFAULT_MAX_STEP,
            DEFAULT_COARSE_AFTER,
            DEFAULT_FILE_COARSE_AFTER,
            DEFAULT_WINDOW_SIZE,
            DEFAULT_SEGMENT_CHUNK,
            DEFAULT_COARSE_SEGMENT_CHUNK,
        )
    }
}

impl ScanConfig {
    pub fn with_cmp_len(mut self, cmp_len: usize) -> Self {
        self.cmp_len = cmp_len;
        self
    }

    pub fn with_coarse_after(mut self, coarse_after: usize) -> Self {
        self.coarse_after = coarse_after;
        self
    }

    pub fn with_file_coarse_after(mut self, file_coarse_after: usize) -> Self {
        self.file_coarse_after = file_coarse_after;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Probe length for the current mode, never below the UTF-8 safe minimum
    pub fn probe_len(&self, coarse: bool) -> usize {
        let len = if coarse {
            self.coarse_cmp_len
        } else {
            self.cmp_len
        };
        len.max(MIN_CMP_LEN)
    }

    /// Trailing chunk length for the segment-local search
    pub fn chunk_len(&self, coarse: bool) -> usize {
        let len = if coarse {
            self.coarse_segment_chunk
        } else {
            self.segment_chunk
        };
        len.max(MIN_CMP_LEN)
    }

    pub fn window(&self) -> usize {
        self.window_size.max(MIN_WINDOW_SIZE)
    }

    pub fn step_cap(&self) -> usize {
        self.max_step.max(2)
    }
}
