//! Integration Test: Sleep Prohibition
//!
//! **Policy**: The view core MUST NOT sleep, spawn threads or spawn tasks.
//! Deferred corrective passes run when the shell ticks the controller.
//!
//! **Exception**: the TUI's frame tick (`tokio::time::sleep` in `app.rs`).

use architectural_enforcement::{code_lines, find_production_uses, rust_files};

const BLOCKING: &[&str] = &["::sleep(", ".sleep(", "thread::spawn", "tokio::spawn", "spawn_blocking"];

#[test]
fn test_no_sleep_or_spawn_in_core() {
    let violations = find_production_uses("calendar/core/src", BLOCKING);

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Blocking calls found in calview-core!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ Schedule work on the DeferredQueue and let the shell tick it.");
        panic!("\nFound {} blocking call(s) in calview-core", violations.len());
    }
}

#[test]
fn test_tui_only_sleeps_for_frame_pacing() {
    let mut violations = Vec::new();

    for path in rust_files("tui/src") {
        let lines = code_lines(&path);
        for (idx, line) in lines.iter().enumerate() {
            if line.in_tests || !BLOCKING.iter().any(|n| line.code.contains(n)) {
                continue;
            }
            if path.ends_with("app.rs") && is_frame_pacing_context(&lines, idx) {
                continue;
            }
            violations.push(line.to_string());
        }
    }

    assert!(
        violations.is_empty(),
        "Sleep outside frame pacing:\n{}",
        violations.join("\n")
    );
}

/// Check if sleep is used for frame pacing (acceptable in the TUI loop)
fn is_frame_pacing_context(lines: &[architectural_enforcement::CodeLine], idx: usize) -> bool {
    let line = &lines[idx].code;
    line.contains("tokio::time::sleep(") && line.to_lowercase().contains("frame")
}
