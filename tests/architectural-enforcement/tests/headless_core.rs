//! Integration Test: Headless Core
//!
//! **Policy**: `calview-core` holds the view-state logic only. It MUST NOT
//! depend on, or name, any terminal or UI crate. Rendering lives in the TUI.

use std::fs;

use architectural_enforcement::{find_production_uses, rust_files, workspace_root};

const UI_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("calendar/core/Cargo.toml"))
        .expect("core manifest should exist");
    let violations: Vec<&str> = manifest
        .lines()
        .map(|line| line.split('#').next().unwrap_or(line))
        .filter(|line| UI_CRATES.iter().any(|c| line.trim_start().starts_with(c)))
        .collect();

    assert!(
        violations.is_empty(),
        "calview-core must stay headless, found: {violations:?}"
    );
}

#[test]
fn test_core_sources_never_name_ui_crates() {
    let needles: Vec<String> = UI_CRATES.iter().map(|c| format!("{c}::")).collect();
    let needles: Vec<&str> = needles.iter().map(String::as_str).collect();

    let violations = find_production_uses("calendar/core/src", &needles);
    for violation in &violations {
        eprintln!("  ❌ {violation}");
    }
    assert!(
        violations.is_empty(),
        "Found {} UI crate use(s) in calview-core",
        violations.len()
    );
}

#[test]
fn test_tui_does_not_reimplement_the_surface() {
    // The TUI draws whatever the surface laid out; only the core computes geometry
    let violations = find_production_uses("tui/src", &["Geometry::compute("]);
    assert!(violations.is_empty(), "{violations:#?}");
    assert!(!rust_files("tui/src").is_empty());
}
