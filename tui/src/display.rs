//! Display State Types
//!
//! Types that represent the current display state for the TUI. These are
//! derived from controller updates and notifications and used for rendering.
//!
//! # Design Philosophy
//!
//! The TUI is a "thin client" - it just renders what the controller tells
//! it. Display state is the bridge between controller output and rendering:
//!
//! - `view`: last observed `ViewState` (title and mode)
//! - `toasts`: FIFO of transient notifications, each with its own expiry
//! - `selected`: keyboard selection among visible events
//! - `status`: one-line feedback for the status bar

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use calview_core::{Notification, ViewChange, ViewState};

/// A toast on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayToast {
    /// Message text
    pub message: String,
    /// When the toast disappears
    pub expires_at: Instant,
}

impl DisplayToast {
    /// Create a toast from a notification raised at `now`
    pub fn new(notification: Notification, now: Instant) -> Self {
        Self {
            message: notification.message,
            expires_at: now + Duration::from_millis(u64::from(notification.duration_ms)),
        }
    }

    /// Whether the toast should be gone at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// The full display state for the TUI
#[derive(Debug, Default)]
pub struct DisplayState {
    /// Last observed view state
    pub view: ViewState,
    /// Toasts, oldest first
    pub toasts: VecDeque<DisplayToast>,
    /// Selected visible event (index into the surface's visible events)
    pub selected: Option<usize>,
    /// Status bar message
    pub status: Option<String>,
    /// A corrective re-render was requested since the last paint
    redraw_requested: bool,
    /// The controller asked the shell to re-measure the grid container
    remeasure_requested: bool,
}

impl DisplayState {
    /// Create a new display state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a controller update
    pub fn apply_update(&mut self, state: ViewState, change: &ViewChange) {
        self.view = state;
        match change {
            ViewChange::Mounted | ViewChange::TitleSynced => {}
            ViewChange::Navigated(_) => {
                self.selected = None;
            }
            ViewChange::ModeChanged(mode) => {
                self.selected = None;
                self.status = Some(format!("{mode} view"));
            }
            ViewChange::EventAdded => {
                self.status = Some("Event added".to_string());
            }
            ViewChange::RerenderRequested | ViewChange::Relayout => {
                self.redraw_requested = true;
            }
            ViewChange::ContainerResized => {
                self.remeasure_requested = true;
            }
        }
    }

    /// Queue a toast raised at `now`
    pub fn push_toast(&mut self, notification: Notification, now: Instant) {
        self.toasts.push_back(DisplayToast::new(notification, now));
    }

    /// Drop expired toasts; returns how many were removed
    pub fn expire_toasts(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    /// Move the selection forward among `count` visible events, wrapping
    pub fn select_next(&mut self, count: usize) {
        self.selected = match (self.selected, count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) => Some((i + 1) % n),
        };
    }

    /// Move the selection backward among `count` visible events, wrapping
    pub fn select_previous(&mut self, count: usize) {
        self.selected = match (self.selected, count) {
            (_, 0) => None,
            (None, n) => Some(n - 1),
            (Some(0), n) => Some(n - 1),
            (Some(i), n) => Some((i - 1).min(n - 1)),
        };
    }

    /// Drop a selection that no longer points at a visible event
    pub fn clamp_selection(&mut self, count: usize) {
        if self.selected.is_some_and(|i| i >= count) {
            self.selected = None;
        }
    }

    /// Whether a full repaint is pending
    pub fn redraw_pending(&self) -> bool {
        self.redraw_requested
    }

    /// Take the pending full-repaint request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Take the pending re-measure request
    pub fn take_remeasure(&mut self) -> bool {
        std::mem::take(&mut self.remeasure_requested)
    }
}
