//! Architectural Enforcement
//!
//! Source scans that keep the codebase honest:
//! - No sleeping in production code; timers and intervals only
//! - No blocking I/O on the event loop or in async sources
//! - The headless core stays free of terminal crates
//!
//! Scans are line-based. Everything from a file's `#[cfg(test)]` marker on
//! is treated as test code, so test modules must sit at the end of a file.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if path.is_file() {
        return vec![path];
    }
    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Code portion of each production line: `(line_number, code)`
///
/// Stops at `#[cfg(test)]` and drops `//` comments.
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| (idx + 1, line.split("//").next().unwrap_or(line)))
        .filter(|(_, code)| !code.trim().is_empty())
        .collect()
}

/// Production lines under `dirs` matching `is_violation`, formatted for a report
pub fn find_violations<F>(dirs: &[&str], is_violation: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let root = workspace_root();
    let mut violations = Vec::new();
    for dir in dirs {
        for path in rust_files(dir) {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_number, code) in production_lines(&content) {
                if is_violation(code) {
                    let shown = path.strip_prefix(&root).unwrap_or(&path);
                    violations.push(format!("{}:{} - {}", shown.display(), line_number, code.trim()));
                }
            }
        }
    }
    violations
}

/// Panic with a readable report if anything was found
pub fn assert_clean(what: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n{what} found in production code:\n");
    for violation in violations {
        eprintln!("  {violation}");
    }
    panic!("\nFound {} violation(s): {what}", violations.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_tests() {
        let src = "fn a() {}\n// note\nlet x = 1; // trailing\n#[cfg(test)]\nmod tests { sleep(1) }\n";
        let lines = production_lines(src);
        assert_eq!(lines, vec![(1, "fn a() {}"), (3, "let x = 1; ")]);
    }

    #[test]
    fn test_workspace_root_has_manifest() {
        assert!(workspace_root().join("Cargo.toml").exists());
        assert!(!rust_files("tui/src").is_empty());
    }
}
