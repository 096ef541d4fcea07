//! Integration tests for the sy-board CLI
//!
//! These tests run the binary in a scratch directory and inspect the
//! documents it leaves behind.

use std::fs;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for sy-board
fn sy_board() -> Command {
    let mut cmd = cargo_bin_cmd!("sy-board");
    cmd.env_remove("SY_BOARD_LOG").env_remove("RUST_LOG");
    cmd
}

const FILES: [&str; 3] = [
    "board_file.xml",
    "seekers_distances_file.xml",
    "hiders_distances_file.xml",
];

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    sy_board()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sy-board"))
        .stdout(predicate::str::contains("--out-dir"));
}

#[test]
fn test_version_flag() {
    sy_board()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sy-board"));
}

// ============================================================================
// Default run
// ============================================================================

#[test]
fn test_no_arguments_writes_into_working_directory() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("board_file.xml (8 board positions, 14 actions)"))
        .stdout(predicate::str::contains(
            "seekers_distances_file.xml (5 sources, 11 distances)",
        ))
        .stdout(predicate::str::contains(
            "hiders_distances_file.xml (6 sources, 13 distances)",
        ));

    for name in FILES {
        let content = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();

    sy_board().current_dir(dir.path()).assert().success();
    let first: Vec<Vec<u8>> = FILES
        .iter()
        .map(|name| fs::read(dir.path().join(name)).unwrap())
        .collect();

    sy_board().current_dir(dir.path()).assert().success();
    for (name, before) in FILES.iter().zip(first) {
        assert_eq!(fs::read(dir.path().join(name)).unwrap(), before, "{}", name);
    }
}

#[test]
fn test_existing_files_are_overwritten() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("board_file.xml"), "old contents").unwrap();

    sy_board().current_dir(dir.path()).assert().success();

    let board = fs::read_to_string(dir.path().join("board_file.xml")).unwrap();
    assert!(!board.contains("old contents"));
    assert!(board.contains("<boardPosition id=\"1\">"));
}

#[test]
fn test_out_dir_flag() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    sy_board()
        .current_dir(dir.path())
        .args(["--quiet", "--out-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    for name in FILES {
        assert!(out.join(name).exists());
        assert!(!dir.path().join(name).exists());
    }
}

#[test]
fn test_environment_does_not_move_output() {
    let dir = tempdir().unwrap();
    let cwd = dir.path().join("cwd");
    let elsewhere = dir.path().join("elsewhere");
    fs::create_dir(&cwd).unwrap();
    fs::create_dir(&elsewhere).unwrap();

    sy_board()
        .current_dir(&cwd)
        .env("SY_BOARD_OUT_DIR", &elsewhere)
        .assert()
        .success();

    for name in FILES {
        assert!(cwd.join(name).exists(), "{} missing from working directory", name);
        assert!(!elsewhere.join(name).exists());
    }
}

#[test]
fn test_environment_naming_missing_directory_is_ignored() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .env("SY_BOARD_OUT_DIR", "/nonexistent")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(dir.path().join("board_file.xml").exists());
}

#[test]
fn test_seekers_document_omits_boat_only_pairs() {
    let dir = tempdir().unwrap();
    sy_board().current_dir(dir.path()).assert().success();

    let seekers = fs::read_to_string(dir.path().join("seekers_distances_file.xml")).unwrap();
    let hiders = fs::read_to_string(dir.path().join("hiders_distances_file.xml")).unwrap();

    assert!(!seekers.contains("<to id=\"9\">"));
    assert!(hiders.contains("<to id=\"9\">"));
}

// ============================================================================
// Output formats and exit codes
// ============================================================================

#[test]
fn test_json_summary() {
    let dir = tempdir().unwrap();

    let output = sy_board()
        .current_dir(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertex_count"], 10);
    assert_eq!(json["edge_count"], 7);
    assert_eq!(json["distance_cutoff"], 10);
    assert_eq!(json["files"].as_array().unwrap().len(), 3);
    assert_eq!(json["files"][1]["kind"], "seekers");
}

#[test]
fn test_missing_out_dir_is_usage_error() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .args(["--out-dir", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("output directory does not exist"));
}

#[test]
fn test_missing_out_dir_json_error() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .args(["--format", "json", "--out-dir", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_help_with_json_format_still_prints_help() {
    sy_board()
        .args(["--format", "json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sy-board"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    sy_board().args(["--format", "xml"]).assert().code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    sy_board()
        .args(["--format", "json", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    sy_board()
        .args(["--format", "json", "--format", "human"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_repeated_out_dir_json_is_usage_error() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .args(["--format", "json", "--out-dir", ".", "--out-dir", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_phases_to_stderr() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("build_graph"))
        .stderr(predicate::str::contains("compute_distances"));
}

#[test]
fn test_default_run_is_silent_on_stderr() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();

    sy_board()
        .current_dir(dir.path())
        .args(["--log-level", "warn"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}
