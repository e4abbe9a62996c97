//! Output line formats.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::digest::Hashed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `<hex>`
    #[default]
    Plain,
    /// `sha256:<hex>`
    Cid,
    /// `<hex>  <name>`
    Sum,
    /// one JSON object per line
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    alg: &'static str,
    name: &'a str,
    bytes: u64,
    hex: String,
}

pub fn render(format: Format, h: &Hashed) -> Result<String> {
    Ok(match format {
        Format::Plain => h.digest.to_hex(),
        Format::Cid => h.digest.cid(),
        Format::Sum => format!("{}  {}", h.digest, h.name),
        Format::Json => serde_json::to_string(&JsonLine {
            alg: "sha256",
            name: &h.name,
            bytes: h.bytes,
            hex: h.digest.to_hex(),
        })?,
    })
}
