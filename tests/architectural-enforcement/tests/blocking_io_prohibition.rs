//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Code that runs on the event loop or inside async sources
//! must not block. File reads belong to startup (config and profile
//! loading, log file setup) which happen before the loop starts.

use architectural_enforcement::{assert_clean, find_violations};

/// Modules reached from the running event loop
const EVENT_LOOP: &[&str] = &[
    "tui/src/app.rs",
    "tui/src/loader.rs",
    "tui/src/background.rs",
    "tui/src/sections",
    "folio/core/src/source",
    "folio/core/src/typing",
];

fn is_blocking_io(code: &str) -> bool {
    code.contains("std::fs")
        || code.contains("std::net")
        || code.contains("reqwest::blocking")
        || code.contains("std::process::Command")
}

#[test]
fn test_no_blocking_io_on_event_loop() {
    let violations = find_violations(EVENT_LOOP, is_blocking_io);
    assert_clean("Blocking I/O", &violations);
}

#[test]
fn test_detector() {
    assert!(is_blocking_io("let s = std::fs::read_to_string(p)?;"));
    assert!(is_blocking_io("use std::net::TcpStream;"));
    assert!(!is_blocking_io("let resp = self.client.get(url).send().await?;"));
}
