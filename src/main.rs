use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use hashcore::{os_text, Digest};

use sha256kit::cli::sha256kit_cli::{Cli, Command};
use sha256kit::{check_path, digest, hash_path, init_logging, render, resolve_config, run_selftest};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = resolve_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(cfg.output.format);
    let chunk = cfg.input.read_chunk;

    match cli.cmd {
        Command::Text(args) => {
            let hashed = match &args.text {
                Some(raw) => digest::hash_text("-", os_text(raw).context("text argument")?),
                None => digest::hash_text("-", &cfg.input.demo_text),
            };
            println!("{}", render(format, &hashed)?);
        }
        Command::File(args) => {
            for p in &args.paths {
                let hashed = hash_path(p, chunk)?;
                println!("{}", render(format, &hashed)?);
            }
        }
        Command::Check(args) => {
            let expect = Digest::from_hex(&args.expect).context("--expect")?;
            let (ok, hashed) = check_path(&args.path, &expect, chunk)?;
            if ok {
                println!("{}: OK", hashed.name);
            } else {
                log::warn!("{}: want {}, got {}", hashed.name, expect, hashed.digest);
                println!("{}: FAILED", hashed.name);
                process::exit(1);
            }
        }
        Command::Selftest => {
            let report = run_selftest()?;
            println!("selftest: {} vectors, {} checks ok", report.vectors, report.checks);
        }
    }
    Ok(())
}
