//! End-to-end tests for the `levelog` binary.
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | FATAL line written, or I/O failure       |
//! |  2   | Bad arguments or configuration           |

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use regex::Regex;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// Locate the levelog binary built for this test run.
fn locate_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_levelog"))
}

/// Builds a command with the configuration variables cleared.
fn levelog() -> Command {
    let mut command = Command::new(locate_binary());
    command
        .env_remove("LEVELOG_LEVEL")
        .env_remove("LEVELOG_PREFIX")
        .env_remove("LEVELOG_FLAGS");
    command
}

/// Runs `command` with `input` on standard input.
fn run_with_input(mut command: Command, input: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn levelog");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for levelog")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf-8 stderr")
}

fn std_line(tag: &str, message: &str) -> Regex {
    Regex::new(&format!(
        r"^\d{{4}}/\d{{2}}/\d{{2}} \d{{2}}:\d{{2}}:\d{{2}} \[{tag}\] {message}\n$"
    ))
    .expect("valid pattern")
}

// ============================================================================
// Emit Tests
// ============================================================================

/// Verifies the default destination and header.
#[test]
fn emit_writes_standard_line_to_stderr() {
    let output = levelog()
        .args(["emit", "info", "test", "message"])
        .output()
        .expect("run levelog");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(std_line("INFO", "test message").is_match(&stderr_of(&output)));
}

/// Verifies DEBUG is dropped at the default threshold.
#[test]
fn emit_debug_is_silent_by_default() {
    let output = levelog()
        .args(["emit", "debug", "hidden"])
        .output()
        .expect("run levelog");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}

/// Verifies FATAL writes the line and exits with status 1.
#[test]
fn emit_fatal_exits_with_status_one() {
    let output = levelog()
        .args(["emit", "FATAL", "test", "message"])
        .output()
        .expect("run levelog");

    assert_eq!(output.status.code(), Some(1));
    assert!(std_line("FATAL", "test message").is_match(&stderr_of(&output)));
}

/// Verifies FATAL stops at the first input line.
#[test]
fn emit_fatal_from_input_stops_after_first_line() {
    let mut command = levelog();
    command.args(["--flags", "none", "emit", "fatal"]);
    let output = run_with_input(command, "first\nsecond\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output), "[FATAL] first\n");
}

/// Verifies the environment supplies defaults and options override them.
#[test]
fn environment_defaults_yield_to_options() {
    let output = levelog()
        .env("LEVELOG_LEVEL", "debug")
        .env("LEVELOG_FLAGS", "none")
        .env("LEVELOG_PREFIX", "env ")
        .args(["emit", "debug", "shown"])
        .output()
        .expect("run levelog");
    assert_eq!(stderr_of(&output), "env [DEBUG] shown\n");

    let output = levelog()
        .env("LEVELOG_LEVEL", "debug")
        .env("LEVELOG_FLAGS", "none")
        .args(["--min-level", "warn", "emit", "debug", "hidden"])
        .output()
        .expect("run levelog");
    assert!(output.stderr.is_empty());
}

/// Verifies an unknown level in the environment falls back to INFO.
#[test]
fn unknown_environment_level_means_info() {
    let output = levelog()
        .env("LEVELOG_LEVEL", "chatty")
        .env("LEVELOG_FLAGS", "none")
        .args(["emit", "debug", "hidden"])
        .output()
        .expect("run levelog");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}

/// Verifies `--output` appends and leaves stderr empty.
#[test]
fn output_file_receives_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    for word in ["one", "two"] {
        let output = levelog()
            .arg("--output")
            .arg(&path)
            .args(["emit", "warn", word])
            .output()
            .expect("run levelog");
        assert_eq!(output.status.code(), Some(0));
        assert!(output.stderr.is_empty());
    }

    let contents = std::fs::read_to_string(&path).expect("read log");
    let pattern =
        Regex::new(r"^(\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} \[WARN\] (one|two)\n){2}$").unwrap();
    assert!(pattern.is_match(&contents), "got {contents:?}");
}

// ============================================================================
// Filter Tests
// ============================================================================

/// Verifies the filter drops DEBUG under INFO and keeps untagged lines.
#[test]
fn filter_drops_debug_under_info() {
    let input = "2026/02/21 14:30:05 [DEBUG] noisy\n\
                 2026/02/21 14:30:05 [INFO] kept\n\
                 untagged\n";
    let mut command = levelog();
    command.arg("filter");
    let output = run_with_input(command, input);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stderr_of(&output),
        "2026/02/21 14:30:05 [INFO] kept\nuntagged\n"
    );
}

// ============================================================================
// Usage Error Tests
// ============================================================================

/// Verifies usage errors exit with status 2.
#[test]
fn usage_errors_exit_with_status_two() {
    for args in [
        &["emit", "loud", "x"][..],
        &["--flags", "sparkles", "filter"][..],
        &["--min-level", "verbose", "filter"][..],
        &["emit"][..],
        &[][..],
    ] {
        let output = levelog().args(args).output().expect("run levelog");
        assert_eq!(output.status.code(), Some(2), "args {args:?}");
        assert!(!output.stderr.is_empty(), "args {args:?}");
    }
}

/// Verifies a bad flag list in the environment is reported.
#[test]
fn bad_environment_flags_exit_with_status_two() {
    let output = levelog()
        .env("LEVELOG_FLAGS", "date,sparkles")
        .args(["emit", "info", "x"])
        .output()
        .expect("run levelog");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("sparkles"));
}
