//! CLI integration tests
//!
//! These run the compiled binary and only cover paths that end before any
//! network call: argument handling, usage output and the credential check.

use std::process::Command;
use tempfile::TempDir;

fn appforge() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_appforge"));
    cmd.env_remove("RUST_LOG").env_remove("APPFORGE_LOG_LEVEL");
    cmd
}

#[test]
fn test_cli_help() {
    let output = appforge()
        .arg("--help")
        .output()
        .expect("Failed to execute appforge");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--output-dir"));
    assert!(stdout.contains("--scaffold-only"));
    assert!(stdout.contains("Create a REST API for a bookstore"));
}

#[test]
fn test_cli_version() {
    let output = appforge()
        .arg("--version")
        .output()
        .expect("Failed to execute appforge");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_prompt_prints_usage_and_exits_1() {
    let output = appforge().output().expect("Failed to execute appforge");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("Examples:"));
}

#[test]
fn test_missing_api_key_exits_1() {
    let out_dir = TempDir::new().unwrap();

    let output = appforge()
        .env_remove("OPENAI_API_KEY")
        // Unroutable endpoint: if a request were attempted it could not succeed.
        .env("APPFORGE_API_BASE_URL", "http://127.0.0.1:9/")
        .args(["-o", out_dir.path().to_str().unwrap()])
        .args(["Build", "a", "todo", "app"])
        .output()
        .expect("Failed to execute appforge");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY not found"));
    assert!(stderr.contains("export OPENAI_API_KEY"));
    assert_eq!(std::fs::read_dir(out_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_timeout_exits_1() {
    let output = appforge()
        .env("OPENAI_API_KEY", "sk-test")
        .args(["--timeout", "0", "Build a blog"])
        .output()
        .expect("Failed to execute appforge");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("timeout"));
}

#[test]
fn test_invalid_format_is_usage_error() {
    let output = appforge()
        .args(["--format", "xml", "Build a blog"])
        .output()
        .expect("Failed to execute appforge");

    assert!(!output.status.success());
}
