//! CLI test cases.
//!
//! These never reach pdfium or tesseract: they cover argument handling and
//! the early exits (missing folder, unbindable PDF engine).

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a new `Command` with our binary and a clean environment.
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("packlist-rename").unwrap();
    for var in [
        "PDF_RENAME_FOLDER",
        "PATH_TO_ERROR_LOGS",
        "TESSERACT_CMD",
        "TESSERACT_LANG",
        "PDFIUM_LIB_PATH",
        "PDF_RENAME_SCALE",
        "PDF_RENAME_LOG_RENAMES",
        "PDF_RENAME_JSON",
        "PDF_RENAME_VERBOSE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_version() {
    cmd().arg("--version").assert().success();
}

#[test]
fn missing_folder_exits_zero_and_logs() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("run.log");
    let missing = tmp.path().join("nowhere");

    cmd()
        .arg("--folder")
        .arg(&missing)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&log).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains(&format!("Folder not found: {}", missing.display())));
}

#[test]
fn env_vars_configure_the_run() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("env.log");

    cmd()
        .env("PDF_RENAME_FOLDER", tmp.path().join("nowhere"))
        .env("PATH_TO_ERROR_LOGS", &log)
        .assert()
        .success();

    assert!(std::fs::read_to_string(&log)
        .unwrap()
        .contains("Folder not found"));
}

#[test]
fn json_summary_on_request() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg("--folder")
        .arg(tmp.path().join("nowhere"))
        .arg("--log-file")
        .arg(tmp.path().join("run.log"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"folder_missing\": true"));
}

#[test]
fn unbindable_pdf_engine_fails() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("run.log");

    cmd()
        .arg("--folder")
        .arg(tmp.path())
        .arg("--log-file")
        .arg(&log)
        .arg("--pdfium-lib")
        .arg(tmp.path().join("no-libpdfium.so"))
        .assert()
        .failure();

    assert!(std::fs::read_to_string(&log)
        .unwrap()
        .contains("Failed to bind to pdfium library"));
}

#[test]
fn invalid_scale_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .arg("--folder")
        .arg(tmp.path())
        .arg("--log-file")
        .arg(tmp.path().join("run.log"))
        .arg("--scale")
        .arg("100")
        .assert()
        .failure();
}
