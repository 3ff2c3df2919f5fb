//! End-to-end tests for the `lumber` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// Creates a populated log directory inside a fresh temp dir.
fn setup_logs() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");
    fs::create_dir_all(logs.join("archive")).unwrap();
    fs::write(logs.join("app.log"), "line one\n").unwrap();
    fs::write(logs.join("archive/old.log"), "old\n").unwrap();
    (dir, logs)
}

fn lumber() -> Command {
    Command::cargo_bin("lumber").unwrap()
}

#[test]
fn aborts_unless_the_answer_is_y() {
    let (_dir, logs) = setup_logs();

    lumber()
        .arg("--logdir")
        .arg(&logs)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Aborting action"));

    assert!(logs.is_dir(), "an aborted run must not touch the directory");
}

#[test]
fn deletes_after_lowercase_confirmation() {
    let (_dir, logs) = setup_logs();

    lumber()
        .arg("--logdir")
        .arg(&logs)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaning logs..."))
        .stdout(predicate::str::contains("Cleaned logs successfully."));

    assert!(!logs.exists());
}

#[test]
fn confirmation_is_case_insensitive() {
    let (_dir, logs) = setup_logs();

    lumber()
        .arg("--logdir")
        .arg(&logs)
        .write_stdin("Y\n")
        .assert()
        .success();

    assert!(!logs.exists());
}

#[test]
fn empty_answer_aborts() {
    let (_dir, logs) = setup_logs();

    lumber()
        .arg("--logdir")
        .arg(&logs)
        .write_stdin("\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Aborting action"));

    assert!(logs.is_dir());
}

#[test]
fn force_skips_the_prompt() {
    let (_dir, logs) = setup_logs();

    lumber()
        .arg("--logdir")
        .arg(&logs)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure").not())
        .stdout(predicate::str::contains("Cleaned logs successfully."));

    assert!(!logs.exists());
}

#[test]
fn prompt_names_the_directory() {
    let (_dir, logs) = setup_logs();

    lumber()
        .arg("--logdir")
        .arg(&logs)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(logs.display().to_string()));
}

#[test]
fn missing_directory_prints_a_diagnostic_and_succeeds() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-logs-here");

    lumber()
        .arg("--logdir")
        .arg(&missing)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Path does not denote a valid directory...",
        ))
        .stdout(predicate::str::contains("Cleaned logs successfully."));
}
