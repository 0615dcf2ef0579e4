//! End-to-end tests for the `replay` subcommand.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, tempdir};

fn tictactoe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

/// Runs the binary with `dir` as its working directory.
fn tictactoe_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn test_replay_prints_board_and_winner() {
    let output = tictactoe(&["replay", "0,0", "0,1", "1,1", "0,2", "2,2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "X|O|O\n-+-+-\n4|X|6\n-+-+-\n7|8|X\n\nX WON!\n");
}

#[test]
fn test_replay_tie() {
    let output = tictactoe(&[
        "replay", "0,0", "1,1", "0,2", "0,1", "1,0", "1,2", "2,1", "2,0", "2,2",
    ]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("TIE GAME\n"));
}

#[test]
fn test_replay_json_lists_rejections() {
    let output = tictactoe(&["replay", "--json", "1,1", "1,1"]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["state"]["status"], "InProgress");
    assert_eq!(report["history"][0]["mark"], "X");
    assert_eq!(report["rejected"][0]["index"], 1);
    assert!(report.get("game").is_none());
}

#[test]
fn test_malformed_move_is_a_usage_error() {
    let output = tictactoe(&["replay", "one,two"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected ROW,COL"));
}

#[test]
fn test_bad_config_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"auto_reset = \"sometimes\"\n").unwrap();
    let path = file.path().to_str().unwrap();

    let output = tictactoe(&["--config", path, "replay", "1,1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_config_in_working_directory_is_loaded() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("tictactoe.toml"), "auto_reset = \"sometimes\"\n").unwrap();

    let output = tictactoe_in(dir.path(), &["replay", "1,1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_no_config_in_working_directory_uses_defaults() {
    let dir = tempdir().unwrap();

    let output = tictactoe_in(dir.path(), &["replay", "1,1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("O to move\n"));
}
