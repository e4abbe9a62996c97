use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use pretty_assertions::assert_eq;
use sha256kit::config::{load_config, DEFAULT_READ_CHUNK};
use sha256kit::Format;

fn tmpconfig(name: &str, contents: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    p.push(format!("sha256kit_cfg_{}_{}_{}.toml", name, std::process::id(), nanos));
    fs::write(&p, contents).unwrap();
    p
}

fn run(args: &[&str], env_cfg: Option<&PathBuf>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sha256kit"));
    cmd.args(args).env_remove("SHA256KIT_CONFIG");
    if let Some(p) = env_cfg {
        cmd.env("SHA256KIT_CONFIG", p);
    }
    cmd.output().unwrap()
}

#[test]
fn load_full_config() {
    let p = tmpconfig("full", "[output]\nformat = \"json\"\n\n[input]\ndemo_text = \"abc\"\nread_chunk = 7\n");
    let cfg = load_config(&p).unwrap();
    assert_eq!(cfg.output.format, Format::Json);
    assert_eq!(cfg.input.demo_text, "abc");
    assert_eq!(cfg.input.read_chunk, 7);
}

#[test]
fn load_missing_config_fails_with_path() {
    let err = load_config(&PathBuf::from("/nonexistent/sha256kit.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("sha256kit.toml"));
}

#[test]
fn config_file_sets_format_and_demo_text() {
    let p = tmpconfig("cid", "[output]\nformat = \"cid\"\n[input]\ndemo_text = \"abc\"\n");
    let out = run(&["--config", p.to_str().unwrap(), "text"], None);
    assert!(out.status.success(), "stderr:\n{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim(),
        "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn env_config_is_used_and_flag_overrides_format() {
    let p = tmpconfig("env", "[output]\nformat = \"cid\"\n");
    let out = run(&["--format", "plain", "text", "abc"], Some(&p));
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn invalid_config_is_rejected() {
    let p = tmpconfig("zero", "[input]\nread_chunk = 0\n");
    let out = run(&["--config", p.to_str().unwrap(), "text", "abc"], None);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("read_chunk"));
    assert!(DEFAULT_READ_CHUNK > 0);
}

#[test]
fn selftest_passes() {
    let out = run(&["selftest"], None);
    assert!(out.status.success(), "stderr:\n{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("selftest: 7 vectors"), "{stdout}");
}

#[test]
fn selftest_library_report() {
    let report = sha256kit::run_selftest().unwrap();
    assert_eq!(report.vectors, hashcore::kat::VECTORS.len());
    assert!(report.checks > report.vectors);
}
