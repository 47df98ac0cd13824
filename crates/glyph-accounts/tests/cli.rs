use assert_cmd::Command;
use glyph_accounts::core::parse_digits;
use glyph_accounts::entry::render_batch;
use predicates::str::contains;
use std::path::{Path, PathBuf};

fn cmd() -> Command {
    Command::cargo_bin("glyph-accounts").expect("binary")
}

fn testdata_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata")
        .join(name)
}

#[test]
fn scan_prints_tagged_lines() {
    cmd()
        .arg("scan")
        .arg(testdata_path("file1-multiple.txt"))
        .assert()
        .success()
        .stdout(contains("111111111 ERR\n"))
        .stdout(contains("22222222? ILL\n"))
        .stdout(contains("123456789\n"))
        .stdout(contains("1234?678? ILL"));
}

#[test]
fn scan_single_entry() {
    cmd()
        .arg("scan")
        .arg(testdata_path("file1.txt"))
        .assert()
        .success()
        .stdout("123456789\n");
}

#[test]
fn scan_json_report() {
    cmd()
        .args(["scan", "--json"])
        .arg(testdata_path("file1-multiple.txt"))
        .assert()
        .success()
        .stdout(contains("\"classification\": \"ILL\""))
        .stdout(contains("\"total\": 14"));
}

#[test]
fn scan_writes_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("report.json");
    cmd()
        .arg("scan")
        .arg(testdata_path("file1.txt"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    let raw = std::fs::read_to_string(&out).expect("report");
    assert!(raw.contains("\"account\": \"123456789\""));
}

#[test]
fn scan_rejects_malformed_batch() {
    cmd()
        .arg("scan")
        .arg(testdata_path("incorrect-file.txt"))
        .assert()
        .failure()
        .stderr(contains("multiple of 4"));
}

#[test]
fn check_classifies_literals() {
    cmd()
        .args(["check", "457508000", "664371495", "111111111", "86110??36"])
        .assert()
        .success()
        .stdout("457508000\n664371495 ERR\n111111111 ERR\n86110??36 ILL\n");
}

#[test]
fn render_prints_glyph_rows() {
    cmd()
        .args(["render", "123"])
        .assert()
        .success()
        .stdout("    _  _ \n  | _| _|\n  ||_  _|\n");
}

#[test]
fn render_rejects_non_digits() {
    cmd().args(["render", "1?3"]).assert().failure();
}

#[test]
fn run_uses_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = dir.path().join("scan.json");
    let out = dir.path().join("report.json");
    let json = serde_json::json!({
        "input_path": testdata_path("file1.txt"),
        "width": 4,
        "output_path": out,
    });
    std::fs::write(&cfg, json.to_string()).expect("write config");

    cmd()
        .args(["run", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout("1234\n");
    assert!(out.exists());
}

#[test]
fn debug_logging_goes_to_stderr() {
    cmd()
        .args(["--log-level", "debug", "scan"])
        .arg(testdata_path("file1.txt"))
        .assert()
        .success()
        .stdout("123456789\n")
        .stderr(contains("decoded entry 123456789"));
}

#[test]
fn default_log_level_keeps_stderr_quiet() {
    cmd()
        .arg("scan")
        .arg(testdata_path("file1.txt"))
        .assert()
        .success()
        .stderr("");
}

#[test]
fn check_handles_long_numbers() {
    let nines = "9".repeat(40_000);
    cmd()
        .args(["check", nines.as_str()])
        .assert()
        .success()
        .stdout(format!("{nines} ERR\n"));
}

#[test]
fn scan_handles_wide_entries() {
    let eights = "8".repeat(20_000);
    let digits = parse_digits(&eights).expect("digits");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("wide.txt");
    std::fs::write(&input, render_batch(&[digits])).expect("write batch");

    cmd()
        .args(["scan", "--width", "20000"])
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{eights} ERR\n"));
}
