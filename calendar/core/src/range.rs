//! Date Ranges
//!
//! Range arithmetic for the grid surface: which days a mode covers around an
//! anchor date, how one navigation step moves the anchor, and how a range is
//! titled. Only surfaces use this; the controller never computes ranges.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::mode::ViewMode;

/// Number of week rows in a month grid
pub const MONTH_GRID_WEEKS: u64 = 6;

/// Half-open span of days `[start, end)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day in the range
    pub start: NaiveDate,
    /// First day after the range
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from its bounds (`end` exclusive)
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The range `mode` renders for `anchor`
    pub fn for_mode(mode: ViewMode, anchor: NaiveDate, first_day: Weekday) -> Self {
        match mode {
            ViewMode::Day => Self::new(anchor, anchor + Days::new(1)),
            ViewMode::Week => {
                let start = week_start(anchor, first_day);
                Self::new(start, start + Days::new(7))
            }
            ViewMode::Month => {
                let start = month_start(anchor);
                Self::new(start, start + Months::new(1))
            }
        }
    }

    /// Whole-week span drawn by a month grid for `anchor`
    pub fn month_grid(anchor: NaiveDate, first_day: Weekday) -> Self {
        let start = week_start(month_start(anchor), first_day);
        Self::new(start, start + Days::new(7 * MONTH_GRID_WEEKS))
    }

    /// Whether `date` falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Last day inside the range
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }

    /// Number of days covered
    pub fn len_days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days()).unwrap_or(0)
    }

    /// Iterate over every day in the range
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    /// Human-readable title for this range under `mode`
    ///
    /// Month: `February 2025`. Day: `February 3, 2025`. Week: `Feb 3–9, 2025`,
    /// widening to `Jan 27 – Feb 2, 2025` or `Dec 30, 2024 – Jan 5, 2025`
    /// when the span crosses a month or year.
    pub fn title(&self, mode: ViewMode) -> String {
        match mode {
            ViewMode::Month => self.start.format("%B %Y").to_string(),
            ViewMode::Day => self.start.format("%B %-d, %Y").to_string(),
            ViewMode::Week => span_title(self.start, self.last_day()),
        }
    }
}

/// Move `anchor` one unit of `mode` forward (`forward = true`) or back
///
/// Month steps land on the first of the month so repeated steps never drift
/// on short months.
pub fn step(anchor: NaiveDate, mode: ViewMode, forward: bool) -> NaiveDate {
    let stepped = match (mode, forward) {
        (ViewMode::Day, true) => anchor.checked_add_days(Days::new(1)),
        (ViewMode::Day, false) => anchor.checked_sub_days(Days::new(1)),
        (ViewMode::Week, true) => anchor.checked_add_days(Days::new(7)),
        (ViewMode::Week, false) => anchor.checked_sub_days(Days::new(7)),
        (ViewMode::Month, true) => month_start(anchor).checked_add_months(Months::new(1)),
        (ViewMode::Month, false) => month_start(anchor).checked_sub_months(Months::new(1)),
    };
    stepped.unwrap_or(anchor)
}

/// First day of the week containing `date`
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7 - first_day.num_days_from_monday()) % 7;
    date - Days::new(u64::from(offset))
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Weekday from a 0 = Sunday .. 6 = Saturday index
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

fn span_title(first: NaiveDate, last: NaiveDate) -> String {
    if first.year() != last.year() {
        format!(
            "{} – {}",
            first.format("%b %-d, %Y"),
            last.format("%b %-d, %Y")
        )
    } else if first.month() != last.month() {
        format!(
            "{} – {}, {}",
            first.format("%b %-d"),
            last.format("%b %-d"),
            last.year()
        )
    } else {
        format!("{}–{}, {}", first.format("%b %-d"), last.day(), last.year())
    }
}
