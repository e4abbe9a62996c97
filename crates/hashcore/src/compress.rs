//! Compression function: advances the 8-word hash state by one block.

use crate::consts::{BLOCK_LEN, K};
use crate::schedule::schedule;

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline]
fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Run the 64 rounds over `block` and return `state` plus the working
/// registers. The input state is not modified.
pub fn compress(state: [u32; 8], block: &[u8; BLOCK_LEN]) -> [u32; 8] {
    let w = schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

    for i in 0..64 {
        let t1 = h
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    let mut out = state;
    for (slot, v) in out.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.wrapping_add(v);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::H0;

    fn abc_block() -> [u8; BLOCK_LEN] {
        let mut block = [0u8; BLOCK_LEN];
        block[0..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        block[63] = 0x18;
        block
    }

    #[test]
    fn single_block_abc_gives_fips_state() {
        let out = compress(H0, &abc_block());
        assert_eq!(
            out,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
                0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
            ]
        );
    }

    #[test]
    fn input_state_is_fed_forward_not_replaced() {
        let zero = compress([0u32; 8], &abc_block());
        let from_h0 = compress(H0, &abc_block());
        assert_ne!(zero, from_h0);
    }

    #[test]
    fn pure_function_same_inputs_same_output() {
        let block = [0x5au8; BLOCK_LEN];
        assert_eq!(compress(H0, &block), compress(H0, &block));
    }

    #[test]
    fn choose_and_majority() {
        assert_eq!(ch(0xffff0000, 0x12345678, 0x9abcdef0), 0x1234def0);
        assert_eq!(maj(0xff00ff00, 0x0f0f0f0f, 0x00ff00ff), 0x0f0f0f0f);
    }
}
