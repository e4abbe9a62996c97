//! The 32-byte digest value.

use anyhow::{bail, Result};

use crate::canon_hex::{emit_hex_lower, hex_lower, parse_hex};
use crate::consts::DIGEST_LEN;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub(crate) fn from_state(state: &[u32; 8]) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        for (i, w) in state.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&w.to_be_bytes());
        }
        Digest(out)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex_lower(&self.0)
    }

    /// `sha256:<hex>` content id.
    pub fn cid(&self) -> String {
        let mut s = String::with_capacity(7 + DIGEST_LEN * 2);
        s.push_str("sha256:");
        emit_hex_lower(&mut s, &self.0);
        s
    }

    /// Parse 64 hex characters (either case) or a `sha256:` content id.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix("sha256:").unwrap_or(s);
        let bytes = parse_hex(s)?;
        if bytes.len() != DIGEST_LEN {
            bail!("DECODE_BAD_LEN");
        }
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&bytes);
        Ok(Digest(out))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(b: [u8; DIGEST_LEN]) -> Self {
        Digest(b)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(d: Digest) -> Self {
        d.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8; DIGEST_LEN]> for Digest {
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        &self.0 == other
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl std::str::FromStr for Digest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Digest::from_hex(s)
    }
}
