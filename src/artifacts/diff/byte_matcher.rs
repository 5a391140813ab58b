//! Common prefix and suffix matching
//!
//! Both matchers first compare whole windows of [`WINDOW`] bytes, which the
//! compiler lowers to a `memcmp`, and only resolve the exact position inside
//! the first mismatching window. That resolution is done eight bytes at a
//! time: the XOR of two words is zero on every equal byte, so counting the
//! zero bytes from the matching end yields the exact match length.

/// Bytes compared per coarse step
pub const WINDOW: usize = 200;

const WORD: usize = std::mem::size_of::<u64>();

/// Whether `byte` continues a multi-byte UTF-8 sequence
pub fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

fn continues_at(buffer: &[u8], index: usize) -> bool {
    buffer.get(index).is_some_and(|&byte| is_continuation(byte))
}

fn word(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; WORD];
    buf.copy_from_slice(&bytes[..WORD]);
    u64::from_le_bytes(buf)
}

/// Length of the common prefix of `a[a_off..]` and `b[b_off..]`.
///
/// With `utf8` set, the length is shortened until the byte that follows it in
/// both buffers starts a new character, so the match never ends inside a
/// multi-byte sequence. Offsets past the end of a buffer yield zero.
pub fn same_len(a: &[u8], b: &[u8], a_off: usize, b_off: usize, utf8: bool) -> usize {
    let a = a.get(a_off..).unwrap_or_default();
    let b = b.get(b_off..).unwrap_or_default();

    if a == b {
        return a.len();
    }

    let mut len = prefix_len(a, b);
    if utf8 {
        while len > 0 && (continues_at(a, len) || continues_at(b, len)) {
            len -= 1;
        }
    }
    len
}

/// Length of the common suffix of `a` and `b`.
///
/// With `utf8` set, the suffix is shortened until its first byte starts a new
/// character in both buffers.
pub fn rev_same_len(a: &[u8], b: &[u8], utf8: bool) -> usize {
    if a == b {
        return a.len();
    }

    let mut len = suffix_len(a, b);
    if utf8 {
        while len > 0 && (continues_at(a, a.len() - len) || continues_at(b, b.len() - len)) {
            len -= 1;
        }
    }
    len
}

fn prefix_len(a: &[u8], b: &[u8]) -> usize {
    let limit = a.len().min(b.len());
    let mut pos = 0;

    while pos + WINDOW <= limit && a[pos..pos + WINDOW] == b[pos..pos + WINDOW] {
        pos += WINDOW;
    }

    while pos + WORD <= limit {
        let diff = word(&a[pos..]) ^ word(&b[pos..]);
        if diff != 0 {
            // little-endian: the first byte in memory is the lowest one
            return pos + (diff.trailing_zeros() / 8) as usize;
        }
        pos += WORD;
    }

    while pos < limit && a[pos] == b[pos] {
        pos += 1;
    }
    pos
}

fn suffix_len(a: &[u8], b: &[u8]) -> usize {
    let limit = a.len().min(b.len());
    let (a_len, b_len) = (a.len(), b.len());
    let mut len = 0;

    while len + WINDOW <= limit
        && a[a_len - len - WINDOW..a_len - len] == b[b_len - len - WINDOW..b_len - len]
    {
        len += WINDOW;
    }

    while len + WORD <= limit {
        let diff = word(&a[a_len - len - WORD..]) ^ word(&b[b_len - len - WORD..]);
        if diff != 0 {
            // the last byte in memory is the highest one
            return len + (diff.leading_zeros() / 8) as usize;
        }
        len += WORD;
    }

    while len < limit && a[a_len - len - 1] == b[b_len - len - 1] {
        len += 1;
    }
    len
}
