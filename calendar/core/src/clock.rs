//! Clocks
//!
//! "Now" is injected so navigation to today and "New Event" creation can be
//! pinned in tests.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local wall-clock time
pub trait Clock {
    /// Current instant
    fn now(&self) -> NaiveDateTime;

    /// Current date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The machine's local clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a fixed instant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let instant = NaiveDate::from_ymd_opt(2025, 2, 3)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
