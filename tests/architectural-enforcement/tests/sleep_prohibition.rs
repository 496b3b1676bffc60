//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code must not sleep. Animation and polling go
//! through `tokio::time::interval` or `sleep_until` on a computed deadline.

use architectural_enforcement::{assert_clean, find_violations};

const PRODUCTION: &[&str] = &["tui/src", "folio/core/src"];

fn is_sleep(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains("thread::sleep")
}

#[test]
fn test_no_sleep_in_production_code() {
    let violations = find_violations(PRODUCTION, is_sleep);
    assert_clean("Sleep calls", &violations);
}

#[test]
fn test_detector() {
    assert!(is_sleep("std::thread::sleep(Duration::from_millis(5));"));
    assert!(is_sleep("tokio::time::sleep(d).await;"));
    assert!(!is_sleep("() = sleep_until(deadline) => {"));
}
