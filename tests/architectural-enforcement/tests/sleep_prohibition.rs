//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT block on `std::thread::sleep`.
//! The core is driven by a host-supplied clock through `TimerQueue`; the
//! TUI waits inside its async select loop. A blocking sleep anywhere
//! would stall input handling for the whole session.
//!
//! `tokio::time::sleep` is allowed in the TUI (it yields to the runtime)
//! but not in the core, which must stay runtime-free.

use std::fs;
use std::path::Path;

#[test]
fn test_no_blocking_sleep_in_production_code() {
    let mut violations = Vec::new();

    // Neither crate may block a thread
    check_directory("../../core/src", "thread::sleep", &mut violations);
    check_directory("../../tui/src", "thread::sleep", &mut violations);

    // The core additionally may not await a runtime timer - it has no runtime
    check_directory("../../core/src", "tokio::time", &mut violations);

    if !violations.is_empty() {
        eprintln!("\nBlocking/runtime sleeps found in production code:");
        for violation in &violations {
            eprintln!("  {}", violation);
        }
        panic!(
            "\nFound {} sleep violation(s).\nTimed behavior goes through TimerQueue (core) or the select loop (tui).",
            violations.len()
        );
    }
}

fn check_directory(dir: &str, needle: &str, violations: &mut Vec<String>) {
    let path = Path::new(dir);
    assert!(path.exists(), "expected sources at {}", dir);

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        let mut in_tests = false;
        for (line_no, line) in content.lines().enumerate() {
            // Test modules may simulate time however they like
            if line.contains("#[cfg(test)]") {
                in_tests = true;
            }
            if !in_tests && line.contains(needle) {
                violations.push(format!(
                    "{}:{}: `{}`",
                    entry.path().display(),
                    line_no + 1,
                    needle
                ));
            }
        }
    }
}
