//! Known-answer self-test over the built-in FIPS vectors.

use anyhow::{bail, Result};
use hashcore::kat::{Vector, VECTORS};
use hashcore::{hash, Digest, Sha256};

const CHUNKINGS: [usize; 5] = [1, 55, 63, 64, 65];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelftestReport {
    pub vectors: usize,
    pub checks: usize,
}

fn expect_eq(v: &Vector, how: &str, got: Digest, want: &Digest) -> Result<()> {
    if &got != want {
        bail!("KAT_MISMATCH vector={} via={} got={} want={}", v.name, how, got, want);
    }
    Ok(())
}

/// Check one vector one-shot, streamed, peeked mid-stream, and after reuse.
pub fn check_vector(v: &Vector) -> Result<usize> {
    let want = v.expected()?;
    let msg = v.message_bytes();
    let mut checks = 0;

    expect_eq(v, "hash", hash(&msg), &want)?;
    checks += 1;

    for size in CHUNKINGS {
        let mut h = Sha256::new();
        for chunk in msg.chunks(size) {
            h.update(chunk);
        }
        expect_eq(v, &format!("chunks-{size}"), h.digest(), &want)?;
        expect_eq(v, &format!("chunks-{size}-again"), h.digest(), &want)?;
        checks += 2;
    }

    // Peek halfway, then finish, then reuse the same instance.
    let mut h = Sha256::new();
    let (head, tail) = msg.split_at(msg.len() / 2);
    h.update(head);
    let _ = h.digest();
    h.update(tail);
    expect_eq(v, "peek-then-finish", h.finalize(), &want)?;
    h.update(&msg);
    expect_eq(v, "after-finalize", h.finalize(), &want)?;
    checks += 2;

    Ok(checks)
}

pub fn run_selftest() -> Result<SelftestReport> {
    let mut checks = 0;
    for v in VECTORS {
        let n = check_vector(v)?;
        log::info!("KAT {}: {} bytes, {} checks ok", v.name, v.message_len(), n);
        checks += n;
    }
    Ok(SelftestReport { vectors: VECTORS.len(), checks })
}
