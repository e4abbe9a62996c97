//! Message padding (FIPS 180-4 §5.1.1).

use crate::consts::{BLOCK_LEN, LEN_FIELD_AT};

/// Number of zero bytes placed between the 0x80 marker and the length field
/// for a message of `len` bytes: `(55 - len) mod 64`.
fn zero_fill(len: u64) -> usize {
    let tail = (len % BLOCK_LEN as u64) as usize;
    (LEN_FIELD_AT + BLOCK_LEN - 1 - tail) % BLOCK_LEN
}

/// Total length of `pad(m)` for a message of `len` bytes.
pub fn padded_len(len: u64) -> u64 {
    len + 1 + zero_fill(len) as u64 + 8
}

/// Pad a complete message: `m || 0x80 || 0x00* || be64(bit_len)`.
/// The result is always a non-empty multiple of 64 bytes.
pub fn pad(message: &[u8]) -> Vec<u8> {
    pad_tail(message, message.len() as u64)
}

/// Pad the final partial block of a message that was `total_len` bytes long
/// in total. Everything before `tail` must already have been compressed.
pub fn pad_tail(tail: &[u8], total_len: u64) -> Vec<u8> {
    debug_assert_eq!(tail.len() as u64 % BLOCK_LEN as u64, total_len % BLOCK_LEN as u64);

    let fill = zero_fill(total_len);
    let mut out = Vec::with_capacity(tail.len() + 1 + fill + 8);
    out.extend_from_slice(tail);
    out.push(0x80);
    out.resize(out.len() + fill, 0);
    out.extend_from_slice(&total_len.wrapping_mul(8).to_be_bytes());
    out
}
