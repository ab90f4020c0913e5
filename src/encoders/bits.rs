//! Regrouping between 8-bit bytes and 6-bit symbols.
//!
//! Three bytes carry exactly 24 bits, which is four symbols. Short tails are
//! handled by zero-filling the missing bytes (or symbols) and keeping only
//! the leading outputs that carry real data.

/// Bytes per encoding group.
pub const BYTES_PER_GROUP: usize = 3;

/// Symbols (and characters) per encoding group.
pub const SYMBOLS_PER_GROUP: usize = 4;

/// Splits three bytes into four 6-bit symbols.
#[inline]
pub fn split_group(group: [u8; 3]) -> [u8; 4] {
    let [b0, b1, b2] = group;
    [
        (b0 >> 2) & 0x3F,
        ((b0 & 0x03) << 4) | ((b1 >> 4) & 0x0F),
        ((b1 & 0x0F) << 2) | ((b2 >> 6) & 0x03),
        b2 & 0x3F,
    ]
}

/// Joins four 6-bit symbols into three bytes.
///
/// Symbols must already be in `[0, 63]`.
#[inline]
pub fn join_group(symbols: [u8; 4]) -> [u8; 3] {
    let [s0, s1, s2, s3] = symbols;
    [
        (s0 << 2) | (s1 >> 4),
        ((s1 & 0x0F) << 4) | (s2 >> 2),
        ((s2 & 0x03) << 6) | s3,
    ]
}

/// Number of symbols carrying data for a tail of `bytes` bytes (1 or 2).
#[inline]
pub(crate) fn tail_symbols(bytes: usize) -> usize {
    bytes + 1
}

/// Mask of the bits in the last real symbol that a padded group discards.
///
/// One padding character leaves 2 unused bits, two leave 4.
#[inline]
pub(crate) fn discarded_bits_mask(padding: usize) -> u8 {
    match padding {
        1 => 0x03,
        2 => 0x0F,
        _ => 0x00,
    }
}

/// Splits bytes into their 6-bit symbol sequence, without padding.
///
/// The result has `ceil(len * 8 / 6)` entries; the last symbol of a short
/// tail is zero-filled on the right.
pub fn symbols(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((data.len() * 8).div_ceil(6));

    let groups = data.chunks_exact(BYTES_PER_GROUP);
    let tail = groups.remainder();

    for group in groups {
        out.extend_from_slice(&split_group([group[0], group[1], group[2]]));
    }

    if !tail.is_empty() {
        let mut padded = [0u8; 3];
        padded[..tail.len()].copy_from_slice(tail);
        out.extend_from_slice(&split_group(padded)[..tail_symbols(tail.len())]);
    }

    out
}
