//! Event Store
//!
//! In-memory working set of calendar events. Events are not keyed, so
//! duplicates are allowed and nothing is ever rejected.

use crate::event::CalendarEvent;
use crate::range::DateRange;

/// Working set of events owned by a rendering surface
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working set
    pub fn seed(&mut self, events: impl IntoIterator<Item = CalendarEvent>) {
        self.events = events.into_iter().collect();
        tracing::debug!(count = self.events.len(), "Event store seeded");
    }

    /// Append one event
    pub fn append(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// Number of events held
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter()
    }

    /// Events starting inside `range`, ordered by start
    ///
    /// The sort is stable, so events sharing a start keep insertion order.
    pub fn in_range(&self, range: &DateRange) -> Vec<&CalendarEvent> {
        let mut events: Vec<_> = self.events.iter().filter(|e| e.starts_within(range)).collect();
        events.sort_by_key(|e| e.start);
        events
    }
}

impl FromIterator<CalendarEvent> for EventStore {
    fn from_iter<I: IntoIterator<Item = CalendarEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn at(day: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, day)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_seed_replaces_working_set() {
        let mut store = EventStore::new();
        store.append(CalendarEvent::new("Old", at(1, 9)));
        store.seed(vec![
            CalendarEvent::new("A", at(3, 9)),
            CalendarEvent::new("B", at(4, 9)),
        ]);
        let titles: Vec<_> = store.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_append_allows_duplicates() {
        let mut store = EventStore::new();
        let event = CalendarEvent::new("Standup", at(3, 11));
        store.append(event.clone());
        store.append(event);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_append_survives_until_next_seed() {
        let mut store = EventStore::new();
        store.seed(vec![CalendarEvent::new("A", at(3, 9))]);
        store.append(CalendarEvent::new("B", at(3, 10)));
        assert_eq!(store.len(), 2);
        store.seed(Vec::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_in_range_filters_and_sorts() {
        let store: EventStore = vec![
            CalendarEvent::new("Late", at(5, 16)),
            CalendarEvent::new("Outside", at(12, 9)),
            CalendarEvent::new("Early", at(3, 9)),
        ]
        .into_iter()
        .collect();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        );
        let titles: Vec<_> = store
            .in_range(&range)
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Early", "Late"]);
    }
}
