//! View Controller - The View-State Core
//!
//! The controller owns the single source of truth for which view mode is
//! active and what the displayed range title is. Every user intent goes
//! through it:
//!
//! ```text
//! intent ──► ViewController ──► RenderingSurface command
//!                 ▲                      │
//!                 │               SurfaceSignal (queued)
//!                 └── dispatch_signals ◄─┘
//!                 │
//!                 └──► observers (shell re-renders from ViewState)
//! ```
//!
//! # Title Synchronization
//!
//! The surface is the only authority over the displayed range; the
//! controller never computes one. `title` is overwritten from
//! [`RenderingSurface::current_range_title`] whenever the surface reports a
//! range change, and eagerly after a mode switch, because some surfaces stay
//! silent when only the mode changes. Syncing twice is harmless.
//!
//! # Threading
//!
//! Single-threaded. Observers run synchronously at the end of each mutating
//! operation and receive a shared borrow of the state, so they cannot call
//! back into the controller.

use std::time::Instant;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::ViewError;
use crate::event::{ActivatedEvent, CalendarEvent};
use crate::mode::{ViewMode, FALLBACK_LABEL};
use crate::notify::{activation_message, NotificationSink, EVENT_TOAST_MS};
use crate::schedule::{CorrectivePlan, CorrectiveTask, DeferredQueue};
use crate::surface::{RenderingSurface, SignalReceiver, SurfaceSignal};

/// Title given to events created from the shell's "add" intent
pub const NEW_EVENT_TITLE: &str = "New Event";

/// Observable view state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Active view mode
    pub mode: ViewMode,
    /// Title of the range the surface currently renders
    pub title: String,
}

/// Navigation intents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// One unit forward
    Next,
    /// One unit back
    Previous,
    /// Range containing the current date
    Today,
}

/// What a mutating operation changed, passed to observers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewChange {
    /// `mount()` completed and the title was synced
    Mounted,
    /// The title was re-read from the surface
    TitleSynced,
    /// The displayed range moved
    Navigated(Navigation),
    /// The view mode switched
    ModeChanged(ViewMode),
    /// An event was forwarded to the surface
    EventAdded,
    /// Deferred re-render pass: redraw from current state
    RerenderRequested,
    /// Deferred resize pass: re-measure containers
    ContainerResized,
    /// Deferred relayout pass: the surface recomputed its geometry
    Relayout,
}

/// Handle returned by [`ViewController::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ViewState, &ViewChange)>;

/// Tunables for the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Corrective passes scheduled at mount
    pub corrective_plan: CorrectivePlan,
    /// Display duration of event-activation toasts
    pub event_toast_ms: u32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            corrective_plan: CorrectivePlan::default(),
            event_toast_ms: EVENT_TOAST_MS,
        }
    }
}

/// The view controller
pub struct ViewController<S: RenderingSurface, N: NotificationSink> {
    surface: S,
    signals: SignalReceiver,
    sink: N,
    clock: Box<dyn Clock>,
    options: ControllerOptions,
    state: ViewState,
    mounted: bool,
    deferred: DeferredQueue,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: RenderingSurface, N: NotificationSink> ViewController<S, N> {
    /// Create a controller over `surface`
    ///
    /// `signals` must be the receiver paired with the handler table the
    /// surface was built with. The surface is switched to `initial_mode`.
    pub fn new(mut surface: S, signals: SignalReceiver, sink: N, initial_mode: ViewMode) -> Self {
        surface.set_mode(initial_mode);
        Self {
            surface,
            signals,
            sink,
            clock: Box::new(SystemClock),
            options: ControllerOptions::default(),
            state: ViewState {
                mode: initial_mode,
                title: String::new(),
            },
            mounted: false,
            deferred: DeferredQueue::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replace the clock used for "now"
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the controller options
    #[must_use]
    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current range title
    pub fn title(&self) -> &str {
        &self.state.title
    }

    /// Current view mode
    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    /// Label of the current view mode
    pub fn mode_label(&self) -> &'static str {
        self.state.mode.label()
    }

    /// Whether `mount()` has completed
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The rendering surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the rendering surface
    ///
    /// Signals the surface emits are handled on the next
    /// [`dispatch_signals`](Self::dispatch_signals).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of corrective passes still waiting
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Register an observer called after every mutating operation
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&ViewState, &ViewChange) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Mount using the current instant for deferred scheduling
    pub fn mount(&mut self) -> Result<(), ViewError> {
        self.mount_at(Instant::now())
    }

    /// Mount: sync the title and schedule the corrective passes
    ///
    /// # Errors
    ///
    /// [`ViewError::SurfaceNotReady`] if the surface has not completed its
    /// first layout.
    pub fn mount_at(&mut self, now: Instant) -> Result<(), ViewError> {
        if !self.surface.is_laid_out() {
            tracing::error!("mount() called before the rendering surface was laid out");
            return Err(ViewError::SurfaceNotReady);
        }

        let first_mount = !self.mounted;
        self.mounted = true;
        self.sync_quietly();
        self.drain_signals();

        if first_mount {
            self.deferred
                .schedule_plan(&self.options.corrective_plan, now);
            tracing::info!(
                mode = %self.state.mode,
                title = %self.state.title,
                "View controller mounted"
            );
        } else {
            tracing::debug!("mount() repeated; title resynced");
        }

        self.notify_observers(&ViewChange::Mounted);
        Ok(())
    }

    /// Advance the surface one unit of the current mode
    pub fn next(&mut self) -> Result<(), ViewError> {
        self.navigate(Navigation::Next)
    }

    /// Retreat the surface one unit of the current mode
    pub fn prev(&mut self) -> Result<(), ViewError> {
        self.navigate(Navigation::Previous)
    }

    /// Jump the surface to the range containing today
    pub fn today(&mut self) -> Result<(), ViewError> {
        self.navigate(Navigation::Today)
    }

    /// Switch the view mode
    ///
    /// Syncs the title immediately, then again for any range-changed signal
    /// the switch produced.
    pub fn change_view(&mut self, mode: ViewMode) -> Result<(), ViewError> {
        self.ensure_mounted("change_view")?;
        self.surface.set_mode(mode);
        self.state.mode = mode;
        self.sync_quietly();
        self.drain_signals();
        tracing::debug!(mode = %mode, title = %self.state.title, "View changed");
        self.notify_observers(&ViewChange::ModeChanged(mode));
        Ok(())
    }

    /// Switch the view mode from a picker key
    ///
    /// Returns the label of the resulting mode. Unknown keys leave the view
    /// untouched and yield the fallback label.
    pub fn change_view_key(&mut self, key: &str) -> Result<&'static str, ViewError> {
        match ViewMode::from_key(key) {
            Some(mode) => {
                self.change_view(mode)?;
                Ok(mode.label())
            }
            None => {
                tracing::warn!(key, "Unknown view mode key; keeping current view");
                Ok(FALLBACK_LABEL)
            }
        }
    }

    /// Forward a new event to the surface
    ///
    /// The event has no end; the surface applies its default duration.
    pub fn add_event(&mut self, title: impl Into<String>, start: NaiveDateTime) {
        self.surface.add_event(CalendarEvent::new(title, start));
        self.notify_observers(&ViewChange::EventAdded);
    }

    /// Add a "New Event" starting now
    pub fn add_new_event(&mut self) {
        let now = self.clock.now();
        self.add_event(NEW_EVENT_TITLE, now);
    }

    /// Show a toast for a selected event
    pub fn on_event_activated(&mut self, event: &ActivatedEvent) {
        let message = activation_message(event);
        tracing::debug!(message = %message, "Notifying event activation");
        self.sink.notify(&message, self.options.event_toast_ms);
    }

    /// Overwrite the title from the surface's current range
    pub fn sync_title(&mut self) -> Result<(), ViewError> {
        self.ensure_mounted("sync_title")?;
        self.sync_quietly();
        self.notify_observers(&ViewChange::TitleSynced);
        Ok(())
    }

    /// Handle every queued surface signal
    ///
    /// Shells call this once per frame to pick up signals the surface raised
    /// on its own (e.g. an event click). Returns the number handled.
    pub fn dispatch_signals(&mut self) -> usize {
        let (handled, range_changed) = self.drain_signals();
        if range_changed {
            self.notify_observers(&ViewChange::TitleSynced);
        }
        handled
    }

    /// Run due corrective passes using the current instant
    pub fn tick(&mut self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Run corrective passes due at `now`; call once per frame
    ///
    /// Returns the number of passes run.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        let due = self.deferred.tick(now);
        for task in &due {
            tracing::debug!(?task, "Running corrective pass");
            match task {
                CorrectiveTask::Rerender => {
                    self.notify_observers(&ViewChange::RerenderRequested);
                }
                CorrectiveTask::ContainerResize => {
                    self.notify_observers(&ViewChange::ContainerResized);
                }
                CorrectiveTask::Relayout => {
                    self.surface.force_relayout();
                    self.notify_observers(&ViewChange::Relayout);
                }
            }
        }
        due.len()
    }

    fn navigate(&mut self, navigation: Navigation) -> Result<(), ViewError> {
        let operation = match navigation {
            Navigation::Next => "next",
            Navigation::Previous => "prev",
            Navigation::Today => "today",
        };
        self.ensure_mounted(operation)?;
        match navigation {
            Navigation::Next => self.surface.go_to_next(),
            Navigation::Previous => self.surface.go_to_previous(),
            Navigation::Today => self.surface.go_to_today(),
        }
        self.drain_signals();
        tracing::debug!(?navigation, title = %self.state.title, "Navigated");
        self.notify_observers(&ViewChange::Navigated(navigation));
        Ok(())
    }

    fn ensure_mounted(&self, operation: &'static str) -> Result<(), ViewError> {
        if self.mounted {
            Ok(())
        } else {
            tracing::error!(operation, "View operation before mount()");
            Err(ViewError::NotMounted { operation })
        }
    }

    /// Returns (signals handled, whether any range change was synced)
    fn drain_signals(&mut self) -> (usize, bool) {
        let signals = self.signals.drain();
        let mut range_changed = false;
        for signal in &signals {
            match signal {
                // Before mount the range change is picked up by mount's own sync
                SurfaceSignal::RangeChanged if self.mounted => {
                    self.sync_quietly();
                    range_changed = true;
                }
                SurfaceSignal::RangeChanged => {}
                SurfaceSignal::EventActivated(event) => self.on_event_activated(event),
            }
        }
        (signals.len(), range_changed)
    }

    fn sync_quietly(&mut self) {
        let title = self.surface.current_range_title();
        if title != self.state.title {
            tracing::debug!(from = %self.state.title, to = %title, "Title synced");
        }
        self.state.title = title;
    }

    fn notify_observers(&mut self, change: &ViewChange) {
        let state = &self.state;
        for (_, observer) in &mut self.observers {
            observer(state, change);
        }
    }
}
