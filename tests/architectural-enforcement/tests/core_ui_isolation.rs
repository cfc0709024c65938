//! Integration Test: Core UI Isolation
//!
//! **Policy**: `brewshop-core` is a headless session core. It MUST NOT
//! reference ratatui, crossterm, or any other terminal/UI crate - hosts
//! own rendering and input decoding.
//!
//! The render projection (`ViewState`) exists precisely so that the state
//! machine never needs to know what a terminal is.

use std::fs;
use std::path::Path;

/// UI crates the core must never touch
const FORBIDDEN_UI_REFERENCES: &[&str] = &[
    "ratatui",
    "crossterm",
    "termion",
    "cursive",
];

#[test]
fn test_core_has_no_ui_dependencies() {
    let mut violations = Vec::new();

    check_directory("../../core/src", &mut violations);
    check_manifest("../../core/Cargo.toml", &mut violations);

    if !violations.is_empty() {
        eprintln!("\nUI references found in the headless core:");
        for violation in &violations {
            eprintln!("  {}", violation);
        }
        panic!(
            "\nFound {} UI reference(s) in brewshop-core.\nRendering belongs to hosts; the core exposes ViewState instead.",
            violations.len()
        );
    }
}

fn check_directory(dir: &str, violations: &mut Vec<String>) {
    let path = Path::new(dir);
    assert!(path.exists(), "expected core sources at {}", dir);

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            check_file(entry.path(), violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        for forbidden in FORBIDDEN_UI_REFERENCES {
            if line.contains(forbidden) {
                violations.push(format!(
                    "{}:{}: references `{}`",
                    path.display(),
                    line_no + 1,
                    forbidden
                ));
            }
        }
    }
}

fn check_manifest(path: &str, violations: &mut Vec<String>) {
    let Ok(content) = fs::read_to_string(path) else {
        panic!("expected core manifest at {}", path);
    };
    for forbidden in FORBIDDEN_UI_REFERENCES {
        if content.contains(forbidden) {
            violations.push(format!("{}: depends on `{}`", path, forbidden));
        }
    }
}
