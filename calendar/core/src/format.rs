//! Time Formatting
//!
//! Fixed 12-hour clock strings used for notifications and time-grid slot
//! labels. Both are zero-padded (`09:00 AM`).

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Minutes in a day; also the largest valid slot boundary (`24:00`)
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Format a time as `hh:mm AM`
pub fn clock_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Format the time-of-day part of an instant as `hh:mm AM`
pub fn start_time_12h(instant: NaiveDateTime) -> String {
    clock_12h(instant.time())
}

/// Slot label for a minute offset into the day
///
/// `24:00` is labelled like midnight.
pub fn slot_label(minute_of_day: u32) -> String {
    let minute = minute_of_day % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
        .map(clock_12h)
        .unwrap_or_default()
}

/// Minutes since midnight for a time
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse an `HH:MM` or `HH:MM:SS` slot boundary into minutes since midnight
///
/// Accepts `24:00` as the end of the day, which `NaiveTime` cannot express.
pub fn parse_slot_time(value: &str) -> Option<u32> {
    let mut parts = value.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = match parts.next() {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }
    let total = hours * 60 + minutes;
    if total > MINUTES_PER_DAY || (total == MINUTES_PER_DAY && seconds > 0) {
        return None;
    }
    Some(total)
}
