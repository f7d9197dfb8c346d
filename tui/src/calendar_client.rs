//! Calendar Client
//!
//! Thin wrapper around the view controller for TUI integration. The client
//! owns the controller, the grid surface it drives, and the receiving ends
//! of the notification and view-update queues.
//!
//! # Architecture
//!
//! The TUI is a "thin client" - it doesn't contain any view logic. The
//! controller decides what the title and mode are; the TUI's job is:
//! 1. Convert terminal input to controller intents
//! 2. Tick the controller once per frame
//! 3. Drain view updates and notifications
//! 4. Render display state and the surface's grid

use std::time::Instant;

use tokio::sync::mpsc;

use calview_core::{
    handler_table, CalendarConfig, ChannelSink, Clock, GridSurface, Notification,
    RenderingSurface, SystemClock, ViewChange, ViewController, ViewMode, ViewState,
};

/// A controller update as seen by observers
pub type ViewUpdate = (ViewState, ViewChange);

/// Client for driving the embedded view controller
pub struct CalendarClient<C: Clock + Clone + 'static = SystemClock> {
    /// The embedded controller (owns the surface)
    controller: ViewController<GridSurface<C>, ChannelSink>,
    /// Toasts raised by the controller
    notifications: mpsc::UnboundedReceiver<Notification>,
    /// Observer feed
    updates: mpsc::UnboundedReceiver<ViewUpdate>,
}

impl CalendarClient<SystemClock> {
    /// Create a client on the local clock
    pub fn new(config: &CalendarConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone + 'static> CalendarClient<C> {
    /// Create a client on an explicit clock
    pub fn with_clock(config: &CalendarConfig, clock: C) -> Self {
        let (handlers, signals) = handler_table();
        let surface = GridSurface::new(
            config.surface_options(),
            config.initial_view,
            handlers,
            clock.clone(),
        )
        .with_events(config.events.iter().cloned());

        let (sink, notifications) = ChannelSink::new();
        let mut controller = ViewController::new(surface, signals, sink, config.initial_view)
            .with_options(config.controller_options())
            .with_clock(clock);

        let (tx, updates) = mpsc::unbounded_channel();
        controller.subscribe(move |state, change| {
            // Receiver lives as long as the client
            let _ = tx.send((state.clone(), change.clone()));
        });

        Self {
            controller,
            notifications,
            updates,
        }
    }

    /// Lay the grid out in a `width` × `height` container and mount
    pub fn start(&mut self, width: u16, height: u16) -> anyhow::Result<()> {
        self.controller.surface_mut().complete_layout(width, height);
        self.controller.mount()?;
        Ok(())
    }

    /// Next range
    pub fn next(&mut self) -> anyhow::Result<()> {
        Ok(self.controller.next()?)
    }

    /// Previous range
    pub fn prev(&mut self) -> anyhow::Result<()> {
        Ok(self.controller.prev()?)
    }

    /// Range containing today
    pub fn today(&mut self) -> anyhow::Result<()> {
        Ok(self.controller.today()?)
    }

    /// Switch view mode
    pub fn change_view(&mut self, mode: ViewMode) -> anyhow::Result<()> {
        Ok(self.controller.change_view(mode)?)
    }

    /// Switch to the next mode in picker order
    pub fn cycle_view(&mut self) -> anyhow::Result<()> {
        let next = self.controller.mode().cycle();
        self.change_view(next)
    }

    /// Add "New Event" starting now
    pub fn add_new_event(&mut self) {
        self.controller.add_new_event();
    }

    /// Activate the `index`-th visible event; the toast follows on the next frame
    pub fn activate(&mut self, index: usize) -> bool {
        self.controller.surface_mut().activate(index)
    }

    /// Terminal resized: record the new container and relayout right away
    pub fn resized(&mut self, width: u16, height: u16) {
        let surface = self.controller.surface_mut();
        surface.resize_container(width, height);
        surface.force_relayout();
    }

    /// Per-frame work: run due corrective passes, then handle surface signals
    pub fn frame(&mut self, now: Instant) {
        let passes = self.controller.tick_at(now);
        let signals = self.controller.dispatch_signals();
        if passes > 0 || signals > 0 {
            tracing::trace!(passes, signals, "Frame work");
        }
    }

    /// Drain pending view updates (non-blocking)
    pub fn recv_updates(&mut self) -> Vec<ViewUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = self.updates.try_recv() {
            updates.push(update);
        }
        updates
    }

    /// Drain pending notifications (non-blocking)
    pub fn recv_notifications(&mut self) -> Vec<Notification> {
        let mut notifications = Vec::new();
        while let Ok(notification) = self.notifications.try_recv() {
            notifications.push(notification);
        }
        notifications
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    /// The grid surface
    pub fn surface(&self) -> &GridSurface<C> {
        self.controller.surface()
    }

    /// Number of events in the visible grid
    pub fn visible_count(&self) -> usize {
        self.controller.surface().visible_events().len()
    }

    /// Total number of events held
    pub fn event_count(&self) -> usize {
        self.controller.surface().event_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calview_core::FixedClock;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn client() -> CalendarClient<FixedClock> {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2025, 2, 3)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        );
        let mut client = CalendarClient::with_clock(&CalendarConfig::default(), clock);
        client.start(100, 30).unwrap();
        client
    }

    #[test]
    fn test_start_mounts_demo_week() {
        let mut client = client();
        assert_eq!(client.state().title, "Feb 3–9, 2025");
        assert_eq!(client.visible_count(), 10);
        let updates = client.recv_updates();
        assert_eq!(updates.last().map(|(_, c)| c.clone()), Some(ViewChange::Mounted));
    }

    #[test]
    fn test_intents_before_start_fail() {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2025, 2, 3)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        );
        let mut client = CalendarClient::with_clock(&CalendarConfig::default(), clock);
        let err = client.next().unwrap_err();
        assert!(err.to_string().contains("before the view controller was mounted"));
    }

    #[test]
    fn test_cycle_view_walks_modes() {
        let mut client = client();
        client.cycle_view().unwrap();
        assert_eq!(client.state().mode, ViewMode::Day);
        client.cycle_view().unwrap();
        assert_eq!(client.state().mode, ViewMode::Month);
        assert_eq!(client.state().title, "February 2025");
        client.cycle_view().unwrap();
        assert_eq!(client.state().mode, ViewMode::Week);
    }

    #[test]
    fn test_activation_arrives_after_frame() {
        let mut client = client();
        assert!(client.activate(1));
        assert!(client.recv_notifications().is_empty());

        client.frame(Instant::now());
        let toasts = client.recv_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Team Standup (Time: 11:00 AM)");
        assert_eq!(toasts[0].duration_ms, 5000);
    }

    #[test]
    fn test_resize_relayouts_immediately() {
        let mut client = client();
        client.resized(150, 50);
        assert!(!client.surface().is_geometry_stale());
        assert_eq!(client.surface().container(), (150, 50));
    }

    #[test]
    fn test_add_new_event_at_clock_time() {
        let mut client = client();
        client.add_new_event();
        assert_eq!(client.event_count(), 11);
        assert_eq!(client.visible_count(), 11);
    }
}
