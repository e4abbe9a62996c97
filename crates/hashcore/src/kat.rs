//! Known-answer vectors from FIPS 180-2 appendix B and the NIST example set.

use anyhow::{Context, Result};

use crate::digest::Digest;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Literal(&'static [u8]),
    /// `pattern` repeated `count` times.
    Repeat(&'static [u8], usize),
}

#[derive(Debug, Clone, Copy)]
pub struct Vector {
    pub name: &'static str,
    pub message: Message,
    pub hex: &'static str,
}

impl Vector {
    pub fn message_bytes(&self) -> Vec<u8> {
        match self.message {
            Message::Literal(b) => b.to_vec(),
            Message::Repeat(p, n) => p.repeat(n),
        }
    }

    pub fn message_len(&self) -> usize {
        match self.message {
            Message::Literal(b) => b.len(),
            Message::Repeat(p, n) => p.len() * n,
        }
    }

    pub fn expected(&self) -> Result<Digest> {
        Digest::from_hex(self.hex).with_context(|| format!("vector {}", self.name))
    }
}

pub const VECTORS: &[Vector] = &[
    Vector {
        name: "empty",
        message: Message::Literal(b""),
        hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    Vector {
        name: "abc",
        message: Message::Literal(b"abc"),
        hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    Vector {
        name: "448-bit",
        message: Message::Literal(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    Vector {
        name: "896-bit",
        message: Message::Literal(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        hex: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    Vector {
        name: "million-a",
        message: Message::Repeat(b"a", 1_000_000),
        hex: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
    Vector {
        name: "quick-brown-fox",
        message: Message::Literal(b"The quick brown fox jumps over the lazy dog"),
        hex: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
    Vector {
        name: "demo-hello",
        message: Message::Literal(b"Hello"),
        hex: "185f8db32271fe25f561a6fc938b2e264306ec304eda518007d1764826381969",
    },
];

pub fn find(name: &str) -> Option<&'static Vector> {
    VECTORS.iter().find(|v| v.name == name)
}
