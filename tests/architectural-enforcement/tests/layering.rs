//! Integration Test: Core Layering
//!
//! **Policy**: `folio-core` is headless. Drawing and terminal handling live
//! in the TUI crate only.

use std::fs;

use architectural_enforcement::{assert_clean, find_violations, workspace_root};

fn uses_terminal_crate(code: &str) -> bool {
    code.contains("ratatui::") || code.contains("crossterm::")
}

#[test]
fn test_core_sources_do_not_use_terminal_crates() {
    let violations = find_violations(&["folio/core/src"], uses_terminal_crate);
    assert_clean("Terminal crate usage in folio-core", &violations);
}

#[test]
fn test_core_manifest_has_no_terminal_crates() {
    let manifest = fs::read_to_string(workspace_root().join("folio/core/Cargo.toml"))
        .expect("core manifest readable");
    for dependency in ["ratatui", "crossterm"] {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(dependency)),
            "folio-core must not depend on {dependency}"
        );
    }
}
