//! Integration test: the built `array_append_remove` binary.
//!
//! Checks the observable contract of the process: what reaches stdout
//! and the exit status, for each argument shape.

use std::process::{Command, Output};

fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_array_append_remove"))
        .args(["--log", "off"])
        .args(args)
        .output()
        .expect("failed to spawn array_append_remove")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is not UTF-8")
}

const USAGE_LINE: &str = "Usage: array_append_remove <count>\n";

#[test]
fn no_argument_prints_usage_and_succeeds() {
    let output = run_bin(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), USAGE_LINE);
}

#[test]
fn zero_prints_usage_and_succeeds() {
    let output = run_bin(&["0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), USAGE_LINE);
}

#[test]
fn non_numeric_count_prints_usage() {
    let output = run_bin(&["lots"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), USAGE_LINE);
}

#[test]
fn every_non_integer_shape_prints_exactly_usage() {
    for arg in [
        "lots", "-abc", "-x", "-h", "-V", "--count", "--", "-", "1.5", "-5", "",
    ] {
        let output = run_bin(&[arg]);
        assert_eq!(output.status.code(), Some(0), "arg {arg:?}");
        assert_eq!(stdout(&output), USAGE_LINE, "arg {arg:?}");
    }
}

#[test]
fn strict_mode_reports_hyphen_leading_count() {
    let output = run_bin(&["--strict", "-abc"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Invalid number\n");
}

#[test]
fn options_after_the_count_are_recognised() {
    let output = run_bin(&["50", "--container", "deque"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn long_help_still_prints_help() {
    let output = run_bin(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--container"));
}

#[test]
fn five_runs_silently() {
    let output = run_bin(&["5"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
}

#[test]
fn one_runs_silently() {
    let output = run_bin(&["1"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    for args in [&["0"][..], &["5"][..], &[][..]] {
        let first = run_bin(args);
        let second = run_bin(args);
        assert_eq!(first.status.code(), second.status.code(), "args {args:?}");
        assert_eq!(first.stdout, second.stdout, "args {args:?}");
    }
}

#[test]
fn every_container_runs_silently() {
    for name in ["vec", "deque", "smallvec"] {
        let output = run_bin(&["--container", name, "10000"]);
        assert_eq!(output.status.code(), Some(0), "container {name}");
        assert!(output.stdout.is_empty(), "container {name}");
    }
}

#[test]
fn strict_mode_reports_invalid_number() {
    let output = run_bin(&["--strict", "abc"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Invalid number\n");
}

#[test]
fn bad_container_value_is_an_option_error() {
    let output = run_bin(&["--container", "list", "5"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn info_logging_goes_to_stderr_only() {
    let output = Command::new(env!("CARGO_BIN_EXE_array_append_remove"))
        .args(["--log", "info", "100"])
        .output()
        .expect("failed to spawn array_append_remove");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("workload complete"), "stderr: {stderr}");
}
