//! Transform subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_transform_stdin_to_stdout() {
    cargo_bin_cmd!("danraku")
        .arg("transform")
        .write_stdin("一行目。\n二行目。\n")
        .assert()
        .success()
        .stdout("一行目。\n\n二行目。\n");
}

#[test]
fn test_transform_file_to_stdout_leaves_file_alone() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "一行目。\n二行目。\n").unwrap();

    cargo_bin_cmd!("danraku")
        .args(["transform", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("一行目。\n\n二行目。\n");

    assert_eq!(fs::read_to_string(&test_file).unwrap(), "一行目。\n二行目。\n");
}

#[test]
fn test_transform_write_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "一行目。\n二行目。\n").unwrap();

    cargo_bin_cmd!("danraku")
        .args(["transform", "--write", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transformed"));

    assert_eq!(
        fs::read_to_string(&test_file).unwrap(),
        "一行目。\n\n二行目。\n"
    );
}

#[test]
fn test_transform_write_requires_file() {
    cargo_bin_cmd!("danraku")
        .args(["transform", "--write"])
        .write_stdin("一\n二\n")
        .assert()
        .failure();
}

#[test]
fn test_transform_check_clean() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "一行目。\n\n二行目。\n").unwrap();

    cargo_bin_cmd!("danraku")
        .args(["transform", "--check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No paragraph breaks to insert"));
}

#[test]
fn test_transform_check_shows_diff() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "一行目。\n二行目。\n").unwrap();

    cargo_bin_cmd!("danraku")
        .args(["transform", "--check", test_file.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Diff in"))
        .stdout(predicate::str::contains("+"));

    // --check never writes
    assert_eq!(fs::read_to_string(&test_file).unwrap(), "一行目。\n二行目。\n");
}

#[test]
fn test_transform_check_and_write_conflict() {
    cargo_bin_cmd!("danraku")
        .args(["transform", "--check", "--write", "x.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_transform_picks_up_config_next_to_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".danraku.toml"),
        "[danraku]\nignore_alphabet = true\n",
    )
    .unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "日本語。\nEnglish.\n").unwrap();

    cargo_bin_cmd!("danraku")
        .args(["transform", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("日本語。\nEnglish.\n");
}

#[test]
fn test_transform_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[danraku]\nignore_footnote = true\n").unwrap();

    cargo_bin_cmd!("danraku")
        .args(["transform", "--config", config.to_str().unwrap()])
        .write_stdin("本文。\n[^1]: 注釈。\n")
        .assert()
        .success()
        .stdout("本文。\n[^1]: 注釈。\n");
}

#[test]
fn test_transform_flag_overrides_defaults() {
    cargo_bin_cmd!("danraku")
        .args(["transform", "--ignore-alphabet"])
        .write_stdin("日本語。\nEnglish.\n次。\n")
        .assert()
        .success()
        .stdout("日本語。\nEnglish.\n\n次。\n");
}

#[test]
fn test_transform_keeps_crlf() {
    cargo_bin_cmd!("danraku")
        .arg("transform")
        .write_stdin("一\r\n二\r\n")
        .assert()
        .success()
        .stdout("一\r\n\r\n二\r\n");
}
