//! Integration tests for line rendering and serialized output.
//!
//! These tests drive [`LineSink`] through its public surface only: header
//! layout for each flag combination, and whole-line writes under contention.

use std::sync::Arc;
use std::thread;

use levelog_sink::{CallSite, Flags, LineSink};
use regex::Regex;

fn rendered(sink: LineSink<Vec<u8>>) -> String {
    String::from_utf8(sink.into_inner()).expect("sink output is utf-8")
}

// ============================================================================
// Header Layout Tests
// ============================================================================

/// Verifies the standard flags render `YYYY/MM/DD HH:MM:SS `.
#[test]
fn std_flags_render_date_and_time() {
    let sink = LineSink::new(Vec::new(), "", Flags::STD);
    sink.output(CallSite::caller(), "test message")
        .expect("write succeeds");

    let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} test message\n$").unwrap();
    let output = rendered(sink);
    assert!(pattern.is_match(&output), "unexpected line: {output:?}");
}

/// Verifies microsecond timestamps carry six fractional digits.
#[test]
fn microseconds_render_six_digits() {
    let sink = LineSink::new(Vec::new(), "", Flags::DATE | Flags::MICROSECONDS | Flags::UTC);
    sink.output(CallSite::caller(), "tick").expect("write succeeds");

    let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6} tick\n$").unwrap();
    let output = rendered(sink);
    assert!(pattern.is_match(&output), "unexpected line: {output:?}");
}

/// Verifies the prefix leads the line unless MSG_PREFIX is selected.
#[test]
fn prefix_position_follows_msg_prefix_flag() {
    let leading = LineSink::new(Vec::new(), "[svc] ", Flags::TIME);
    leading.output(CallSite::caller(), "up").expect("write succeeds");
    let output = rendered(leading);
    assert!(output.starts_with("[svc] "), "unexpected line: {output:?}");

    let trailing = LineSink::new(Vec::new(), "[svc] ", Flags::TIME | Flags::MSG_PREFIX);
    trailing.output(CallSite::caller(), "up").expect("write succeeds");
    let output = rendered(trailing);
    let pattern = Regex::new(r"^\d{2}:\d{2}:\d{2} \[svc\] up\n$").unwrap();
    assert!(pattern.is_match(&output), "unexpected line: {output:?}");
}

/// Verifies LONG_FILE prints the path recorded by the compiler.
#[test]
fn long_file_renders_full_path() {
    let sink = LineSink::new(Vec::new(), "", Flags::LONG_FILE);
    let site = CallSite::caller();
    sink.output(site, "where").expect("write succeeds");

    let output = rendered(sink);
    assert_eq!(output, format!("{}:{}: where\n", site.file(), site.line()));
    assert!(site.file().ends_with("line_output.rs"));
}

/// Verifies flag changes apply to the next line only.
#[test]
fn set_flags_applies_to_later_lines() {
    let sink = LineSink::new(Vec::new(), "", Flags::empty());
    sink.output(CallSite::caller(), "plain").expect("write succeeds");
    sink.set_flags(Flags::SHORT_FILE);
    sink.output(CallSite::new("x/y.rs", 9), "located")
        .expect("write succeeds");

    assert_eq!(rendered(sink), "plain\ny.rs:9: located\n");
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Verifies lines written from many threads stay whole.
#[test]
fn concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const LINES: usize = 200;

    let sink = Arc::new(LineSink::new(Vec::new(), "", Flags::empty()));
    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                let body = format!("thread-{id}-").repeat(16);
                for _ in 0..LINES {
                    sink.output(CallSite::caller(), &body).expect("write succeeds");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread completes");
    }

    let sink = Arc::try_unwrap(sink).expect("all threads released the sink");
    let output = rendered(sink);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES);

    for line in lines {
        let id = line
            .strip_prefix("thread-")
            .and_then(|rest| rest.split('-').next())
            .expect("line starts with a thread tag");
        assert_eq!(line, format!("thread-{id}-").repeat(16));
    }
}
