//! Runs the `lrtrace` binary.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::process::{Command, Output};

use crate::helpers::fixtures::{SINGLE_A_ACTIONS, SINGLE_A_GOTOS, SINGLE_A_GRAMMAR};

fn lrtrace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lrtrace"))
        .args(args)
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path.display().to_string()
}

#[test]
fn test_preset_accepts() {
    let output = lrtrace(&["--example", "example1"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("✓ Input accepted"));
    assert!(stdout.contains("r6 - Reducing by rule 6: F → id"));
}

#[test]
fn test_rejection_exit_code_and_marker() {
    let output = lrtrace(&["--example", "example1", "--input", "id+"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("✗ No action found for state 6 and symbol $"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with('>')).count(), 1);
}

#[test]
fn test_custom_tables_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let grammar = write(dir.path(), "grammar.json", SINGLE_A_GRAMMAR);
    let action = write(dir.path(), "action.json", SINGLE_A_ACTIONS);
    let goto = write(dir.path(), "goto.json", SINGLE_A_GOTOS);

    let output = lrtrace(&[
        "--grammar", &grammar, "--action", &action, "--goto", &goto, "--input", "a", "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["banner"]["tone"], "success");
    assert_eq!(view["rows"].as_array().unwrap().len(), 3);
    assert_eq!(view["rows"][1]["action"], "r1 - Reducing by rule 1: S → a");
}

#[test]
fn test_malformed_table_file() {
    let dir = tempfile::tempdir().unwrap();
    let grammar = write(dir.path(), "grammar.json", "[\"S → a\"");

    let output = lrtrace(&["--grammar", &grammar, "--input", "a"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout, "✗ Invalid JSON format in one of the inputs\n");
}

#[test]
fn test_list_presets() {
    let output = lrtrace(&["--list"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("example1"));
    assert!(stdout.contains("suggested input: a+a*a"));
}

#[test]
fn test_bad_config_is_usage_error() {
    let output = lrtrace(&["--config", "missing.toml", "--list"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_preset_is_displayed_not_a_usage_error() {
    let output = lrtrace(&["--example", "example9"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout, "✗ Failed to load example\n");
}
