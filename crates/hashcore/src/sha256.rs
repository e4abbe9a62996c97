//! Native SHA-256 implementation (FIPS 180-4).
//! Streaming accumulator over the block compression function.

use std::io;

use crate::compress::compress;
use crate::consts::{BLOCK_LEN, H0};
use crate::digest::Digest;
use crate::pad::pad_tail;
use crate::text::{utf8_text, EncodingError};

#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buf: [u8; BLOCK_LEN],
    buflen: usize,
    len: u64,
}

impl Sha256 {
    pub fn new() -> Self {
        Self { state: H0, buf: [0u8; BLOCK_LEN], buflen: 0, len: 0 }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feed bytes. Full blocks are compressed immediately; at most 63 bytes
    /// stay buffered.
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;
        self.len = self.len.wrapping_add(data.len() as u64);

        if self.buflen > 0 {
            let take = (BLOCK_LEN - self.buflen).min(data.len());
            self.buf[self.buflen..self.buflen + take].copy_from_slice(&data[..take]);
            self.buflen += take;
            data = &data[take..];
            if self.buflen < BLOCK_LEN {
                return;
            }
            self.state = compress(self.state, &self.buf);
            self.buflen = 0;
        }

        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
            self.state = compress(self.state, block);
            data = rest;
        }
        self.buf[..data.len()].copy_from_slice(data);
        self.buflen = data.len();
    }

    pub fn update_text(&mut self, text: &str) {
        self.update(text.as_bytes());
    }

    /// Feed bytes that must be UTF-8 text. Nothing is consumed on error.
    pub fn update_utf8(&mut self, bytes: &[u8]) -> Result<(), EncodingError> {
        let text = utf8_text(bytes)?;
        self.update_text(text);
        Ok(())
    }

    /// Digest of everything fed so far. The accumulator is left as is and
    /// can keep taking input.
    pub fn digest(&self) -> Digest {
        let mut state = self.state;
        let padded = pad_tail(&self.buf[..self.buflen], self.len);
        let mut rest = padded.as_slice();
        while let Some((block, tail)) = rest.split_first_chunk::<BLOCK_LEN>() {
            state = compress(state, block);
            rest = tail;
        }
        Digest::from_state(&state)
    }

    pub fn hexdigest(&self) -> String {
        self.digest().to_hex()
    }

    /// Digest, then reset for the next message.
    pub fn finalize(&mut self) -> Digest {
        let out = self.digest();
        self.reset();
        out
    }

    /// Bytes fed since construction or the last reset.
    pub fn byte_count(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256")
            .field("len", &self.len)
            .field("buffered", &self.buflen)
            .finish_non_exhaustive()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn hash(data: &[u8]) -> Digest {
    let mut h = Sha256::new();
    h.update(data);
    h.finalize()
}

pub fn hash_hex(data: &[u8]) -> String {
    hash(data).to_hex()
}

pub fn hash_text(text: &str) -> Digest {
    hash(text.as_bytes())
}
