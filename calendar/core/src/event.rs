//! Calendar Events
//!
//! The records a surface lays out into its grid. The core treats them as
//! opaque: the controller forwards new events to the surface and never
//! validates their contents.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::range::DateRange;

/// A time-boxed calendar event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Display title
    pub title: String,
    /// Start instant (local wall-clock time)
    pub start: NaiveDateTime,
    /// End instant; `None` means "use the surface's default duration"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    /// Optional display colour tag (e.g. `"#A8D5BA"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CalendarEvent {
    /// Create an event with only a title and a start
    pub fn new(title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end: None,
            color: None,
        }
    }

    /// Set the end instant
    #[must_use]
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the display colour
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// End instant, falling back to `start + default_duration`
    ///
    /// An end that precedes the start is treated as missing.
    pub fn effective_end(&self, default_duration: Duration) -> NaiveDateTime {
        match self.end {
            Some(end) if end > self.start => end,
            _ => self.start + default_duration,
        }
    }

    /// Whether the event starts on a day inside `range`
    pub fn starts_within(&self, range: &DateRange) -> bool {
        range.contains(self.start.date())
    }
}

/// Payload of the surface's event-activated signal
///
/// Carries the minimum the controller needs to build a notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivatedEvent {
    /// Title of the selected event
    pub title: String,
    /// Start of the selected event
    pub start: NaiveDateTime,
}

impl ActivatedEvent {
    /// Create an activation payload
    pub fn new(title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
        }
    }
}

impl From<&CalendarEvent> for ActivatedEvent {
    fn from(event: &CalendarEvent) -> Self {
        Self::new(event.title.clone(), event.start)
    }
}
