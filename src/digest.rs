use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use hashcore::{Digest, Sha256};

/// Name used for standard input.
pub const STDIN_NAME: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashed {
    pub name: String,
    pub bytes: u64,
    pub digest: Digest,
}

/// Stream `r` through the accumulator `chunk` bytes at a time.
pub fn hash_reader<R: Read>(mut r: R, chunk: usize) -> io::Result<(Digest, u64)> {
    let mut h = Sha256::new();
    let mut buf = vec![0u8; chunk.max(1)];
    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        h.update(&buf[..n]);
    }
    let bytes = h.byte_count();
    Ok((h.finalize(), bytes))
}

pub fn hash_path(path: &Path, chunk: usize) -> Result<Hashed> {
    let name = path.display().to_string();
    let (digest, bytes) = if name == STDIN_NAME {
        hash_reader(io::stdin().lock(), chunk).context("read stdin")?
    } else {
        let f = File::open(path).with_context(|| format!("open {path:?}"))?;
        hash_reader(f, chunk).with_context(|| format!("read {path:?}"))?
    };
    log::debug!("{name}: {bytes} bytes");
    Ok(Hashed { name, bytes, digest })
}

pub fn hash_text(name: &str, text: &str) -> Hashed {
    Hashed {
        name: name.to_string(),
        bytes: text.len() as u64,
        digest: hashcore::hash_text(text),
    }
}

/// Hash `path` and compare against `expect`.
pub fn check_path(path: &Path, expect: &Digest, chunk: usize) -> Result<(bool, Hashed)> {
    let h = hash_path(path, chunk)?;
    Ok((&h.digest == expect, h))
}
