//! Calview TUI - terminal calendar view
//!
//! A full-screen week, day and month calendar driven by the headless
//! `calview-core` view controller.
//!
//! # Architecture
//!
//! - **CalendarClient**: owns the controller and its grid surface
//! - **Display**: view state, toasts and selection derived from controller output
//! - **Compositor**: layered rendering with z-ordering (toasts over the grid)
//! - **GridView**: paints the surface's grid and reports event hitboxes
//! - **Widgets**: the toast stack

pub mod app;
pub mod calendar_client;
pub mod compositor;
pub mod display;
pub mod grid_view;
pub mod theme;
pub mod widgets;

pub use app::{intent_for_key, App, Intent};
