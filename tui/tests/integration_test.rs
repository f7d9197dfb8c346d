//! Integration Tests for the TUI + View Controller
//!
//! These tests drive the full App the way the event loop does (terminal
//! events in, frames out) and render into ratatui's `TestBackend`.
//!
//! # Test Coverage
//!
//! 1. **Startup**: the grid is laid out and the mounted title is rendered
//! 2. **Keyboard**: navigation, mode switches, selection and quitting
//! 3. **Mouse**: clicking an event block raises its toast
//! 4. **Resize**: the surface follows the terminal, corrective passes settle

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use calview_core::{CalendarConfig, FixedClock, ViewMode};
use calview_tui::App;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

// ============================================================================
// Helpers
// ============================================================================

fn monday_morning() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 2, 3)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    )
}

fn app() -> App<FixedClock> {
    App::with_clock(&CalendarConfig::default(), WIDTH, HEIGHT, monday_morning()).unwrap()
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn screen_row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buf = terminal.backend().buffer();
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    (0..HEIGHT)
        .map(|y| screen_row(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_startup_renders_title_and_grid() {
    let mut app = app();
    let mut terminal = terminal();

    app.frame(Instant::now());
    app.render(&mut terminal).unwrap();

    assert_eq!(app.display().view.title, "Feb 3–9, 2025");
    let header = screen_row(&terminal, 0);
    assert!(header.contains("Feb 3–9, 2025"), "header was {header:?}");
    assert!(header.contains("Week"));
    assert!(screen_row(&terminal, 1).contains("Mon 3"));
    assert!(screen_row(&terminal, HEIGHT - 1).contains("10 events"));
    assert_eq!(app.hitboxes().len(), 10);
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_navigation_keys_update_title() {
    let mut app = app();

    app.handle_event(key(KeyCode::Char('n'))).unwrap();
    app.frame(Instant::now());
    assert_eq!(app.display().view.title, "Feb 10–16, 2025");

    app.handle_event(key(KeyCode::Left)).unwrap();
    app.handle_event(key(KeyCode::Left)).unwrap();
    app.frame(Instant::now());
    assert_eq!(app.display().view.title, "Jan 27 – Feb 2, 2025");

    app.handle_event(key(KeyCode::Char('t'))).unwrap();
    app.frame(Instant::now());
    assert_eq!(app.display().view.title, "Feb 3–9, 2025");
}

#[test]
fn test_mode_keys_switch_views() {
    let mut app = app();
    let mut terminal = terminal();

    app.handle_event(key(KeyCode::Char('m'))).unwrap();
    app.frame(Instant::now());
    app.render(&mut terminal).unwrap();

    assert_eq!(app.display().view.mode, ViewMode::Month);
    assert_eq!(app.display().status.as_deref(), Some("Month view"));
    assert!(screen_row(&terminal, 0).contains("February 2025"));

    app.handle_event(key(KeyCode::Char('d'))).unwrap();
    app.frame(Instant::now());
    assert_eq!(app.display().view.title, "February 3, 2025");
    assert_eq!(app.client().visible_count(), 2);
}

#[test]
fn test_tab_and_enter_open_selected_event() {
    let mut app = app();
    let mut terminal = terminal();

    app.handle_event(key(KeyCode::Tab)).unwrap();
    app.handle_event(key(KeyCode::Tab)).unwrap();
    assert_eq!(app.display().selected, Some(1));

    app.handle_event(key(KeyCode::Enter)).unwrap();
    app.frame(Instant::now());
    app.render(&mut terminal).unwrap();

    assert_eq!(app.display().toasts.len(), 1);
    assert_eq!(app.display().toasts[0].message, "Team Standup (Time: 11:00 AM)");
    assert!(screen_text(&terminal).contains("Team Standup (Time: 11:00 AM)"));
}

#[test]
fn test_add_event_key() {
    let mut app = app();
    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    app.frame(Instant::now());

    assert_eq!(app.client().event_count(), 11);
    assert_eq!(app.display().status.as_deref(), Some("Event added"));
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert!(app.is_running());
    app.handle_event(key(KeyCode::Char('q'))).unwrap();
    assert!(!app.is_running());

    let mut app = self::app();
    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    assert!(!app.is_running());
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_clicking_event_raises_toast() {
    let mut app = app();
    let mut terminal = terminal();
    app.frame(Instant::now());
    app.render(&mut terminal).unwrap();

    let grid = app.grid_bounds();
    let block = app.hitboxes()[0];
    app.handle_event(click(grid.x + block.area.x, grid.y + block.area.y))
        .unwrap();

    let now = Instant::now();
    app.frame(now);
    assert_eq!(app.display().selected, Some(0));
    assert_eq!(app.display().toasts.len(), 1);
    assert_eq!(app.display().toasts[0].message, "Client Call (Time: 09:00 AM)");

    // Toasts last five seconds
    app.frame(now + Duration::from_millis(4999));
    assert_eq!(app.display().toasts.len(), 1);
    app.frame(now + Duration::from_millis(5000));
    assert!(app.display().toasts.is_empty());
}

#[test]
fn test_clicking_empty_grid_does_nothing() {
    let mut app = app();
    let mut terminal = terminal();
    app.frame(Instant::now());
    app.render(&mut terminal).unwrap();

    // Header row and gutter
    app.handle_event(click(5, 0)).unwrap();
    app.handle_event(click(2, 12)).unwrap();
    app.frame(Instant::now());

    assert_eq!(app.display().selected, None);
    assert!(app.display().toasts.is_empty());
}

// ============================================================================
// Resize and Corrective Passes
// ============================================================================

#[test]
fn test_resize_follows_terminal() {
    let mut app = app();
    app.handle_event(Event::Resize(140, 40)).unwrap();

    let surface = app.client().surface();
    assert_eq!(surface.container(), (140, 36));
    assert!(!surface.is_geometry_stale());
    assert_eq!(app.grid_bounds().width, 140);
}

#[test]
fn test_corrective_passes_keep_geometry_current() {
    let mut app = app();
    let before = app.client().surface().relayout_count();

    app.frame(Instant::now() + Duration::from_secs(1));

    let surface = app.client().surface();
    assert!(surface.relayout_count() >= before + 2);
    assert_eq!(surface.container(), (WIDTH, HEIGHT - 4));
    assert!(!surface.is_geometry_stale());
    assert_eq!(app.display().view.title, "Feb 3–9, 2025");
}

#[test]
fn test_rerender_pass_forces_full_repaint() {
    let mut app = app();
    let mut terminal = terminal();
    app.frame(Instant::now());
    app.render(&mut terminal).unwrap();
    assert!(!app.display().redraw_pending());

    // Deferred re-render and relayout passes are due
    app.frame(Instant::now() + Duration::from_secs(1));
    assert!(app.display().redraw_pending());

    app.render(&mut terminal).unwrap();
    assert!(!app.display().redraw_pending());
    assert!(screen_row(&terminal, 0).contains("Feb 3–9, 2025"));
    assert_eq!(app.hitboxes().len(), 10);
}
