use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::report::Format;

#[derive(Parser, Debug)]
#[command(name = "sha256kit", version, about = "FIPS 180-4 SHA-256 digests")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// TOML config file (default: $SHA256KIT_CONFIG, then built-in defaults).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format; overrides `output.format` from the config.
    #[arg(long, short = 'f', global = true, value_enum)]
    pub format: Option<Format>,

    #[arg(long, short = 'v', global = true, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hash a UTF-8 string (defaults to `input.demo_text`).
    Text(TextArgs),
    /// Stream files through the hasher; `-` reads stdin.
    File(FileArgs),
    /// Compare a file against an expected digest.
    Check(CheckArgs),
    /// Verify the built-in known-answer vectors.
    Selftest,
}

#[derive(Args, Debug)]
pub struct TextArgs {
    pub text: Option<OsString>,
}

#[derive(Args, Debug)]
pub struct FileArgs {
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// 64 hex characters or `sha256:<hex>`.
    #[arg(long)]
    pub expect: String,

    pub path: PathBuf,
}
