//! Custom Widgets
//!
//! - `ToastStack`: transient notifications painted over the grid

mod toast;

pub use toast::{ToastStack, TOAST_WIDTH};
