//! Error Types
//!
//! Errors raised by the view controller. These all describe programming
//! errors (calling into the controller in the wrong order); nothing in the
//! core performs I/O, so there is nothing to retry.

use thiserror::Error;

/// Errors returned by [`ViewController`](crate::ViewController) operations
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// `mount()` was called before the rendering surface finished its first layout
    #[error("rendering surface has not completed its first layout")]
    SurfaceNotReady,

    /// A navigation or view operation was invoked before `mount()`
    #[error("`{operation}` called before the view controller was mounted")]
    NotMounted {
        /// The operation that was attempted
        operation: &'static str,
    },
}

/// Error returned when parsing an unrecognised view mode key
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown view mode: {0:?}")]
pub struct UnknownViewMode(pub String);
