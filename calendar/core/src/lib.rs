//! Calview Core - Headless View-State Core for a Calendar View
//!
//! This crate keeps a calendar view's title and mode in sync with the widget
//! that actually lays out the date grid, completely independent of any UI
//! framework. It can drive a terminal UI, a GUI, or run headless in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                           Shells                                 │
//! │   ┌──────────────┐   ┌──────────────┐   ┌─────────────────────┐  │
//! │   │     TUI      │   │  GUI / Web   │   │  Headless / Tests   │  │
//! │   │  (ratatui)   │   │              │   │                     │  │
//! │   └──────┬───────┘   └──────┬───────┘   └──────────┬──────────┘  │
//! │          └──────────────────┴──────────────────────┘             │
//! │                  intents (down)   ViewChange (up)                │
//! └─────────────────────────────┼────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┼────────────────────────────────────┐
//! │                        CALVIEW CORE                              │
//! │  ┌──────────────────────────┴─────────────────────────────────┐  │
//! │  │                     ViewController                         │  │
//! │  │   ViewState { mode, title }     DeferredQueue (relayout)   │  │
//! │  └───────┬──────────────────▲───────────────────────┬─────────┘  │
//! │   commands│       SurfaceSignal                     │ notify     │
//! │  ┌────────▼──────────────────┴──────┐   ┌───────────▼─────────┐  │
//! │  │  RenderingSurface (GridSurface)  │   │  NotificationSink   │  │
//! │  │  range + geometry + EventStore   │   │  (ChannelSink)      │  │
//! │  └──────────────────────────────────┘   └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ViewController`]: owns the view mode and the displayed range title
//! - [`RenderingSurface`]: what the controller requires of a grid widget
//! - [`GridSurface`]: built-in headless date-grid surface
//! - [`EventStore`]: the in-memory event working set
//! - [`NotificationSink`]: transient toast output
//! - [`CalendarConfig`]: layered TOML + environment configuration
//!
//! # Quick Start
//!
//! ```ignore
//! use calview_core::{
//!     handler_table, load_config, ChannelSink, GridSurface, SystemClock, ViewController,
//! };
//!
//! let config = load_config()?;
//! let (handlers, signals) = handler_table();
//! let mut surface = GridSurface::new(
//!     config.surface_options(),
//!     config.initial_view,
//!     handlers,
//!     SystemClock,
//! )
//! .with_events(config.events.clone());
//! surface.complete_layout(120, 40);
//!
//! let (sink, mut toasts) = ChannelSink::new();
//! let mut controller = ViewController::new(surface, signals, sink, config.initial_view)
//!     .with_options(config.controller_options());
//! controller.mount()?;
//!
//! loop {
//!     controller.tick();
//!     controller.dispatch_signals();
//!     while let Ok(toast) = toasts.try_recv() {
//!         // show toast
//!     }
//!     // render from controller.state() and controller.surface()
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`controller`]: the view controller and its observable state
//! - [`surface`]: rendering surface contract and signal wiring
//! - [`grid`]: built-in date-grid surface and geometry
//! - [`store`]: event working set
//! - [`event`]: event records
//! - [`mode`]: view modes and labels
//! - [`range`]: date ranges, stepping and titles
//! - [`schedule`]: deferred corrective passes
//! - [`notify`]: notification sink
//! - [`clock`]: injectable time source
//! - [`format`]: time formatting helpers
//! - [`config`]: TOML configuration file support
//! - [`error`]: error types
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework, and never sleeps or spawns: deferred work only runs when a
//! shell calls [`ViewController::tick`].

#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod format;
pub mod grid;
pub mod mode;
pub mod notify;
pub mod range;
pub mod schedule;
pub mod store;
pub mod surface;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{
    ControllerOptions, Navigation, SubscriptionId, ViewChange, ViewController, ViewState,
    NEW_EVENT_TITLE,
};
pub use error::{UnknownViewMode, ViewError};
pub use event::{ActivatedEvent, CalendarEvent};
pub use grid::{Geometry, GridSurface, SurfaceOptions, TIME_GUTTER_WIDTH};
pub use mode::{view_label, ViewMode, FALLBACK_LABEL};
pub use notify::{activation_message, ChannelSink, Notification, NotificationSink, EVENT_TOAST_MS};
pub use range::DateRange;
pub use schedule::{CorrectivePlan, CorrectiveTask, Deferral, DeferredQueue};
pub use store::EventStore;
pub use surface::{handler_table, RenderingSurface, SignalReceiver, SurfaceHandlers, SurfaceSignal};

// Config exports
pub use config::{
    default_config_path, default_seed_events, load_config, load_config_from_path,
    load_config_with_env, CalendarConfig, CalviewToml, ConfigError, ConfigSource, LayoutStrategy,
};
