//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help() {
    cargo_bin_cmd!("danraku")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Danraku rewrites Markdown"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("danraku")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("danraku")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("danraku")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_transform_help() {
    cargo_bin_cmd!("danraku")
        .args(["transform", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Insert a blank line"));
}

#[test]
fn test_explain_help() {
    cargo_bin_cmd!("danraku")
        .args(["explain", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one row per input line"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("danraku")
        .args(["transform", "does-not-exist.md"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[danraku]\nignore_alphabet = \"sometimes\"\n").unwrap();

    cargo_bin_cmd!("danraku")
        .args(["transform", "--config", config.to_str().unwrap()])
        .write_stdin("一\n二\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
