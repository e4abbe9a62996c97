//! Explicit conversion of raw input into UTF-8 text.
//!
//! `&str` is UTF-8 by construction, so hashing text never fails. Bytes or OS
//! strings of unknown encoding go through these checks first and are rejected
//! rather than lossily substituted.

use std::ffi::OsStr;

pub const ENCODING_INVALID_UTF8: &str = "ENCODING_INVALID_UTF8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingError {
    pub code: String,
    /// Length of the longest valid UTF-8 prefix.
    pub valid_up_to: usize,
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (valid up to byte {})", self.code, self.valid_up_to)
    }
}
impl std::error::Error for EncodingError {}

impl From<std::str::Utf8Error> for EncodingError {
    fn from(e: std::str::Utf8Error) -> Self {
        EncodingError {
            code: ENCODING_INVALID_UTF8.to_string(),
            valid_up_to: e.valid_up_to(),
        }
    }
}

pub fn utf8_text(bytes: &[u8]) -> Result<&str, EncodingError> {
    Ok(std::str::from_utf8(bytes)?)
}

pub fn os_text(s: &OsStr) -> Result<&str, EncodingError> {
    match s.to_str() {
        Some(t) => Ok(t),
        None => Err(os_str_error(s)),
    }
}

#[cfg(unix)]
fn os_str_error(s: &OsStr) -> EncodingError {
    use std::os::unix::ffi::OsStrExt;
    match std::str::from_utf8(s.as_bytes()) {
        Err(e) => e.into(),
        Ok(t) => EncodingError { code: ENCODING_INVALID_UTF8.to_string(), valid_up_to: t.len() },
    }
}

#[cfg(not(unix))]
fn os_str_error(s: &OsStr) -> EncodingError {
    let lossy = s.to_string_lossy();
    let valid_up_to = lossy.find('\u{FFFD}').unwrap_or(lossy.len());
    EncodingError { code: ENCODING_INVALID_UTF8.to_string(), valid_up_to }
}
