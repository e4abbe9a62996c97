//! Message schedule: expands one block into the 64 words W[0..64).

use crate::consts::BLOCK_LEN;

#[inline]
pub(crate) fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
pub(crate) fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Load the 16 big-endian words of `block` and extend them to 64.
pub fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
    let mut w = [0u32; 64];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 16..64 {
        w[i] = w[i - 16]
            .wrapping_add(ssig0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(ssig1(w[i - 2]));
    }
    w
}
