//! Tests for error reporting and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn stratum(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("stratum");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn path_separator_in_name_is_user_error() {
    let temp = TempDir::new().unwrap();

    stratum(temp.path())
        .args(["new", "../escape"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("../escape").exists());
}

#[test]
fn dot_name_is_user_error() {
    let temp = TempDir::new().unwrap();
    stratum(temp.path()).args(["new", ".."]).assert().code(2);
}

#[test]
fn unknown_argument_is_usage_error() {
    let temp = TempDir::new().unwrap();
    stratum(temp.path())
        .args(["new", "demo", "--lang", "rust"])
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_is_config_error() {
    let temp = TempDir::new().unwrap();

    stratum(temp.path())
        .args(["--config", "absent.toml", "new", "demo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn malformed_config_is_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".stratum.toml"), "[defaults\n").unwrap();

    stratum(temp.path()).args(["new", "demo"]).assert().code(4);
}

#[test]
fn unknown_config_key_is_config_error() {
    let temp = TempDir::new().unwrap();

    stratum(temp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn file_in_place_of_directory_aborts_with_io_error() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("app"), "not a directory").unwrap();

    stratum(temp.path())
        .args(["new", "demo"])
        .assert()
        .code(1)
        // Entries before the failure were reported and kept.
        .stdout(predicate::str::contains("CREATED: demo/README.md"))
        .stderr(predicate::str::contains("demo/app"));

    assert!(root.join("README.md").is_file());
    assert!(!root.join("tests").exists());
}
