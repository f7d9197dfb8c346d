//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The view core stays headless (no terminal or UI crates)
//! - The view core never blocks: no sleep, no threads, no spawned tasks
//! - The TUI only sleeps for frame pacing
//!
//! These tests are designed to catch violations early in the development cycle.
//! The helpers below scan source text, so they run without building the
//! crates they inspect.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (two levels above this package)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// All `.rs` files under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// A source line with comments stripped
#[derive(Debug)]
pub struct CodeLine {
    /// File the line came from
    pub path: PathBuf,
    /// 1-based line number
    pub number: usize,
    /// Code before any `//`
    pub code: String,
    /// Whether the line sits inside a `#[cfg(test)]` module
    pub in_tests: bool,
}

impl std::fmt::Display for CodeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.number, self.code.trim())
    }
}

/// Comment-stripped lines of a file
///
/// Everything after a `#[cfg(test)]` attribute is treated as test code,
/// matching the convention of keeping unit tests at the bottom of a module.
pub fn code_lines(path: &Path) -> Vec<CodeLine> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut in_tests = false;
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            if line.trim_start().starts_with("#[cfg(test)]") {
                in_tests = true;
            }
            CodeLine {
                path: path.to_path_buf(),
                number: idx + 1,
                code: line.split("//").next().unwrap_or(line).to_string(),
                in_tests,
            }
        })
        .collect()
}

/// Production lines under `dir` whose code contains any of `needles`
pub fn find_production_uses(dir: &str, needles: &[&str]) -> Vec<CodeLine> {
    rust_files(dir)
        .iter()
        .flat_map(|path| code_lines(path))
        .filter(|line| !line.in_tests && needles.iter().any(|n| line.code.contains(n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_holds_the_workspace_manifest() {
        let manifest = fs::read_to_string(workspace_root().join("Cargo.toml")).unwrap();
        assert!(manifest.contains("[workspace]"));
    }

    #[test]
    fn test_scanned_directories_exist() {
        assert!(!rust_files("calendar/core/src").is_empty());
        assert!(!rust_files("tui/src").is_empty());
    }
}
