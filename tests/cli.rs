//! Command-line surface of the demo binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("suggestbox")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--words"))
        .stdout(predicate::str::contains("--latency-ms"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_missing_word_list_fails_before_terminal_setup() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-words.txt");

    Command::cargo_bin("suggestbox")
        .unwrap()
        .arg("--words")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_rejects_non_numeric_latency() {
    Command::cargo_bin("suggestbox")
        .unwrap()
        .args(["--latency-ms", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--latency-ms"));
}
