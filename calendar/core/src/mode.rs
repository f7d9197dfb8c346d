//! View Modes
//!
//! The closed set of granularities a surface can render, and the label
//! lookup the shell uses for its mode picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownViewMode;

/// Label shown for any key that does not name a known mode
pub const FALLBACK_LABEL: &str = "View";

/// Calendar display granularity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// Whole calendar month
    Month,
    /// Seven days starting at the configured first day of week
    #[default]
    Week,
    /// A single day
    Day,
}

impl ViewMode {
    /// Every mode, in picker order
    pub const ALL: [ViewMode; 3] = [ViewMode::Month, ViewMode::Week, ViewMode::Day];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
        }
    }

    /// Internal surface view key
    pub fn key(self) -> &'static str {
        match self {
            Self::Month => "monthGrid",
            Self::Week => "timeGridWeek",
            Self::Day => "timeGridDay",
        }
    }

    /// Resolve a mode from its label or its surface key
    ///
    /// Labels match case-insensitively; surface keys match exactly.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key() == key || mode.label().eq_ignore_ascii_case(key))
    }

    /// Next mode in picker order, wrapping around
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Month => Self::Week,
            Self::Week => Self::Day,
            Self::Day => Self::Month,
        }
    }

    /// Whether this mode renders an hourly time grid
    pub fn is_time_grid(self) -> bool {
        matches!(self, Self::Week | Self::Day)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| UnknownViewMode(s.to_string()))
    }
}

/// Label for a mode key, degrading to [`FALLBACK_LABEL`] for unknown keys
pub fn view_label(key: &str) -> &'static str {
    ViewMode::from_key(key).map_or(FALLBACK_LABEL, ViewMode::label)
}
