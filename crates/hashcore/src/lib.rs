// HashCore crate
pub mod consts;
pub mod schedule;
pub mod compress;
pub mod pad;
pub mod canon_hex;
pub mod digest;
pub mod sha256;
pub mod text;
pub mod kat;

pub use canon_hex::{hex_lower, parse_hex, parse_hex_lower};
pub use compress::compress;
pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use digest::Digest;
pub use pad::{pad, pad_tail, padded_len};
pub use schedule::schedule;
pub use sha256::{hash, hash_hex, hash_text, Sha256};
pub use text::{os_text, utf8_text, EncodingError};
