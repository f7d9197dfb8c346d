//! Rendering Surface Contract
//!
//! The capabilities the view controller needs from whatever widget lays out
//! and paints the calendar grid, plus the signal plumbing a surface uses to
//! report back.
//!
//! # Signal Wiring
//!
//! ```text
//!  handler_table() ──► SurfaceHandlers ──(moved into)──► surface
//!        │                                                  │
//!        └──────────► SignalReceiver ──(moved into)──► ViewController
//!
//!  surface.go_to_next() ─► handlers.range_changed() ─► queue
//!  controller.dispatch_signals() ◄──────────────────── queue
//! ```
//!
//! The handler table is fixed when the surface is constructed. Signals are
//! queued rather than called back directly, so the surface never needs a
//! reference to the controller that owns it, and every signal is handled on
//! the UI thread when the controller drains the queue.

use tokio::sync::mpsc;

use crate::event::{ActivatedEvent, CalendarEvent};
use crate::mode::ViewMode;

/// Signals a rendering surface emits
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceSignal {
    /// The displayed date range (and therefore its title) changed
    RangeChanged,
    /// The user selected an existing event
    EventActivated(ActivatedEvent),
}

/// Handler table injected into a surface at construction
#[derive(Clone, Debug)]
pub struct SurfaceHandlers {
    tx: mpsc::UnboundedSender<SurfaceSignal>,
}

impl SurfaceHandlers {
    /// Report that the displayed range changed
    pub fn range_changed(&self) {
        self.emit(SurfaceSignal::RangeChanged);
    }

    /// Report that the user selected an event
    pub fn event_activated(&self, event: ActivatedEvent) {
        self.emit(SurfaceSignal::EventActivated(event));
    }

    fn emit(&self, signal: SurfaceSignal) {
        if self.tx.send(signal).is_err() {
            tracing::debug!("Surface signal dropped: controller gone");
        }
    }
}

/// Controller side of the signal queue
#[derive(Debug)]
pub struct SignalReceiver {
    rx: mpsc::UnboundedReceiver<SurfaceSignal>,
}

impl SignalReceiver {
    /// Take every queued signal without blocking
    pub fn drain(&mut self) -> Vec<SurfaceSignal> {
        let mut signals = Vec::new();
        while let Ok(signal) = self.rx.try_recv() {
            signals.push(signal);
        }
        signals
    }
}

/// Create a connected handler table and receiver
pub fn handler_table() -> (SurfaceHandlers, SignalReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SurfaceHandlers { tx }, SignalReceiver { rx })
}

/// What the view controller requires of a rendering surface
///
/// The surface is the sole authority over the displayed date range. All
/// methods run on the UI thread; none may block.
pub trait RenderingSurface {
    /// Whether the first layout pass has completed
    fn is_laid_out(&self) -> bool;

    /// Title of the range currently rendered
    fn current_range_title(&self) -> String;

    /// Advance one unit of the current mode
    fn go_to_next(&mut self);

    /// Retreat one unit of the current mode
    fn go_to_previous(&mut self);

    /// Jump to the range containing the current date
    fn go_to_today(&mut self);

    /// Switch rendering mode
    fn set_mode(&mut self, mode: ViewMode);

    /// Add an event to the surface's working set
    fn add_event(&mut self, event: CalendarEvent);

    /// Recompute geometry from the current container size
    ///
    /// Must be safe to call any number of times.
    fn force_relayout(&mut self);

    /// Number of events the surface holds
    fn event_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_signals_arrive_in_order() {
        let (handlers, mut rx) = handler_table();
        let start = NaiveDate::from_ymd_opt(2025, 2, 3)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        handlers.range_changed();
        handlers.event_activated(ActivatedEvent::new("Client Call", start));
        handlers.range_changed();

        assert_eq!(
            rx.drain(),
            vec![
                SurfaceSignal::RangeChanged,
                SurfaceSignal::EventActivated(ActivatedEvent::new("Client Call", start)),
                SurfaceSignal::RangeChanged,
            ]
        );
        assert!(rx.drain().is_empty());
    }

    #[test]
    fn test_emit_after_receiver_dropped_is_silent() {
        let (handlers, rx) = handler_table();
        drop(rx);
        handlers.range_changed();
    }
}
