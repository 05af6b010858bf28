//! Explain subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_explain_lists_every_line() {
    cargo_bin_cmd!("danraku")
        .arg("explain")
        .write_stdin("本文\n```\ncode\n```\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("    1  suppress  none"))
        .stdout(predicate::str::contains(
            "    3  suppress  code-fence     structural  code",
        ));
}

#[test]
fn test_explain_marks_escapes_and_insertions() {
    cargo_bin_cmd!("danraku")
        .arg("explain")
        .write_stdin("前\\\n後\n次\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("    2  escaped"))
        .stdout(predicate::str::contains("    3  insert    none"));
}

#[test]
fn test_explain_respects_flags() {
    cargo_bin_cmd!("danraku")
        .args(["explain", "--ignore-footnote"])
        .write_stdin("本文\n[^1]: 注\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("    2  suppress  footnote       free"));
}
