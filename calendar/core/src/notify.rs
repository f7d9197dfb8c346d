//! Notifications
//!
//! Transient feedback (toasts) raised by the controller. The sink is
//! fire-and-forget; display order is FIFO and owned by the shell.

use tokio::sync::mpsc;

use crate::event::ActivatedEvent;
use crate::format::start_time_12h;

/// How long an event-activation toast stays up by default
pub const EVENT_TOAST_MS: u32 = 5000;

/// A toast message and its display duration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Message text
    pub message: String,
    /// Auto-dismiss delay in milliseconds
    pub duration_ms: u32,
}

/// Something that can show a transient message
pub trait NotificationSink {
    /// Show `message` for `duration_ms`; never fails, returns nothing
    fn notify(&mut self, message: &str, duration_ms: u32);
}

/// Sink that forwards notifications over a channel to the shell
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    /// Create a sink and the receiver the shell drains
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&mut self, message: &str, duration_ms: u32) {
        let notification = Notification {
            message: message.to_string(),
            duration_ms,
        };
        if self.tx.send(notification).is_err() {
            tracing::debug!("Notification dropped: shell gone");
        }
    }
}

/// Toast text for a selected event: `"{title} (Time: hh:mm AM)"`
pub fn activation_message(event: &ActivatedEvent) -> String {
    format!("{} (Time: {})", event.title, start_time_12h(event.start))
}
