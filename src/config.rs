use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::report::Format;

/// Environment variable consulted when `--config` is not given.
pub const ENV_CONFIG: &str = "SHA256KIT_CONFIG";

pub const DEFAULT_DEMO_TEXT: &str = "Hello";
pub const DEFAULT_READ_CHUNK: usize = 64 * 1024;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputCfg,
    pub input: InputCfg,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputCfg {
    pub format: Format,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InputCfg {
    /// Hashed by `text` when no string is given.
    pub demo_text: String,
    /// Bytes per read when streaming files.
    pub read_chunk: usize,
}

impl Default for InputCfg {
    fn default() -> Self {
        InputCfg { demo_text: DEFAULT_DEMO_TEXT.to_string(), read_chunk: DEFAULT_READ_CHUNK }
    }
}

pub fn parse_config(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s).context("parse TOML config")?;
    if cfg.input.read_chunk == 0 {
        bail!("input.read_chunk must be non-zero");
    }
    Ok(cfg)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;
    parse_config(&s).with_context(|| format!("config {path:?}"))
}

/// `--config` wins, then `SHA256KIT_CONFIG`, then built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::var_os(ENV_CONFIG).filter(|v| !v.is_empty()).map(PathBuf::from),
    };
    match path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config(&p)
        }
        None => {
            log::debug!("no config file; using defaults");
            Ok(Config::default())
        }
    }
}
