use anyhow::{bail, Result};

const HEX: &[u8; 16] = b"0123456789abcdef";

pub fn emit_hex_lower(out: &mut String, b: &[u8]) {
    out.reserve(b.len() * 2);
    for &byte in b {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
}

pub fn hex_lower(b: &[u8]) -> String {
    let mut out = String::with_capacity(b.len() * 2);
    emit_hex_lower(&mut out, b);
    out
}

// Canonical digests are lowercase; uppercase input is rejected here.
pub fn parse_hex_lower(s: &str) -> Result<Vec<u8>> {
    parse_with(s, hex_nibble_lower)
}

// Accepts both cases; used where a human typed the value.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    parse_with(s, hex_nibble)
}

fn parse_with(s: &str, nibble: fn(u8) -> Result<u8>) -> Result<Vec<u8>> {
    if (s.len() % 2) != 0 {
        bail!("DECODE_BAD_HEX");
    }
    let mut out = Vec::with_capacity(s.len() / 2);
    for chunk in s.as_bytes().chunks(2) {
        let hi = nibble(chunk[0])?;
        let lo = nibble(chunk[1])?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn hex_nibble_lower(b: u8) -> Result<u8> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        _ => bail!("DECODE_BAD_HEX"),
    }
}

fn hex_nibble(b: u8) -> Result<u8> {
    match b {
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => hex_nibble_lower(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_only_output() {
        assert_eq!(hex_lower(&[0x00, 0xab, 0xff, 0x10]), "00abff10");
        assert_eq!(hex_lower(&[]), "");
    }

    #[test]
    fn strict_rejects_uppercase_and_odd_length() {
        assert_eq!(parse_hex_lower("00ff").unwrap(), vec![0x00, 0xff]);
        assert!(parse_hex_lower("00FF").is_err());
        assert!(parse_hex_lower("abc").is_err());
        assert!(parse_hex_lower("zz").is_err());
    }

    #[test]
    fn permissive_accepts_mixed_case() {
        assert_eq!(parse_hex("aBcD").unwrap(), vec![0xab, 0xcd]);
        let err = parse_hex("0g").unwrap_err();
        assert_eq!(err.to_string(), "DECODE_BAD_HEX");
    }
}
