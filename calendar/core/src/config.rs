//! TOML Configuration File Support
//!
//! Centralized configuration loading for the calendar view, from a TOML file
//! at `~/.config/calview/calview.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! # XDG Base Directory Compliance
//!
//! - `$XDG_CONFIG_HOME/calview/calview.toml` (typically `~/.config/calview/calview.toml`)
//! - `CALVIEW_CONFIG` points at a different file
//!
//! # Example Configuration
//!
//! ```toml
//! [calendar]
//! initial_view = "Week"
//! first_day = 1
//! all_day_text = ""
//! event_text_color = "#000000"
//! slot_min_time = "07:00:00"
//! slot_max_time = "20:00:00"
//! default_event_minutes = 60
//!
//! [layout]
//! strategy = "fixed-delay"
//! rerender_delay_ms = 100
//! resize_delay_ms = 200
//! relayout_delay_ms = 200
//!
//! [notifications]
//! event_duration_ms = 5000
//!
//! [[events]]
//! title = "Client Call"
//! start = "2025-02-03T09:00:00"
//! end = "2025-02-03T09:30:00"
//! color = "#A8D5BA"
//! ```
//!
//! Event datetimes are quoted strings; bare TOML datetimes are rejected.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::ControllerOptions;
use crate::event::CalendarEvent;
use crate::format::{parse_slot_time, MINUTES_PER_DAY};
use crate::grid::SurfaceOptions;
use crate::mode::ViewMode;
use crate::notify::EVENT_TOAST_MS;
use crate::range::weekday_from_index;
use crate::schedule::CorrectivePlan;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Calendar section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarToml {
    /// View mode shown at startup (label or surface key)
    pub initial_view: Option<String>,

    /// First day of the week, 0 = Sunday .. 6 = Saturday
    pub first_day: Option<u8>,

    /// Label of the all-day row
    pub all_day_text: Option<String>,

    /// Default event text colour (`#RRGGBB`)
    pub event_text_color: Option<String>,

    /// First visible time slot (`HH:MM[:SS]`)
    pub slot_min_time: Option<String>,

    /// End of the visible time grid (`HH:MM[:SS]`, up to `24:00:00`)
    pub slot_max_time: Option<String>,

    /// Duration of events created without an end
    pub default_event_minutes: Option<u32>,
}

/// Layout section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutToml {
    /// `"fixed-delay"` or `"next-frame"`
    pub strategy: Option<String>,

    /// Delay before the corrective re-render, in milliseconds
    pub rerender_delay_ms: Option<u64>,

    /// Delay before the container re-measure, in milliseconds
    pub resize_delay_ms: Option<u64>,

    /// Delay before the forced relayout, in milliseconds
    pub relayout_delay_ms: Option<u64>,
}

/// Notifications section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsToml {
    /// How long event-activation toasts stay up
    pub event_duration_ms: Option<u32>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalviewToml {
    /// Calendar configuration section
    pub calendar: CalendarToml,

    /// Layout configuration section
    pub layout: LayoutToml,

    /// Notifications configuration section
    pub notifications: NotificationsToml,

    /// Seed events; `None` keeps the demo week
    pub events: Option<Vec<CalendarEvent>>,
}

// =============================================================================
// Layout Strategy
// =============================================================================

/// How the post-mount corrective passes are deferred
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    /// Wall-clock delays
    #[default]
    FixedDelay,
    /// Counted frame ticks
    NextFrame,
}

impl FromStr for LayoutStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed-delay" | "fixed_delay" | "delay" => Ok(Self::FixedDelay),
            "next-frame" | "next_frame" | "frame" => Ok(Self::NextFrame),
            other => Err(ConfigError::ValidationError(format!(
                "unknown layout strategy {other:?} (expected \"fixed-delay\" or \"next-frame\")"
            ))),
        }
    }
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Effective calendar configuration
///
/// Use [`load_config`] to load configuration with proper priority handling.
#[derive(Clone, Debug)]
pub struct CalendarConfig {
    /// View mode shown at startup
    pub initial_view: ViewMode,

    /// First day of the week
    pub first_day: Weekday,

    /// Label of the all-day row
    pub all_day_text: String,

    /// Default event text colour
    pub event_text_color: String,

    /// First visible minute of the time grid
    pub slot_min_minutes: u32,

    /// End of the visible time grid, in minutes
    pub slot_max_minutes: u32,

    /// Duration of events created without an end, in minutes
    pub default_event_minutes: u32,

    /// Corrective pass deferral style
    pub layout_strategy: LayoutStrategy,

    /// Fixed-delay re-render delay
    pub rerender_delay_ms: u64,

    /// Fixed-delay container re-measure delay
    pub resize_delay_ms: u64,

    /// Fixed-delay relayout delay
    pub relayout_delay_ms: u64,

    /// Event-activation toast duration
    pub event_toast_ms: u32,

    /// Events the surface starts with
    pub events: Vec<CalendarEvent>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    source: ConfigSource,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            initial_view: ViewMode::Week,
            first_day: Weekday::Mon,
            all_day_text: String::new(),
            event_text_color: "#000000".to_string(),
            slot_min_minutes: 0,
            slot_max_minutes: MINUTES_PER_DAY,
            default_event_minutes: 60,
            layout_strategy: LayoutStrategy::FixedDelay,
            rerender_delay_ms: 100,
            resize_delay_ms: 200,
            relayout_delay_ms: 200,
            event_toast_ms: EVENT_TOAST_MS,
            events: default_seed_events(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl CalendarConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Options for a [`GridSurface`](crate::GridSurface)
    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            first_day: self.first_day,
            all_day_text: self.all_day_text.clone(),
            event_text_color: self.event_text_color.clone(),
            slot_min_minutes: self.slot_min_minutes,
            slot_max_minutes: self.slot_max_minutes,
            default_event_duration: Duration::minutes(i64::from(self.default_event_minutes)),
        }
    }

    /// Corrective plan for the configured strategy
    pub fn corrective_plan(&self) -> CorrectivePlan {
        match self.layout_strategy {
            LayoutStrategy::FixedDelay => CorrectivePlan::fixed_delay(
                self.rerender_delay_ms,
                self.resize_delay_ms,
                self.relayout_delay_ms,
            ),
            LayoutStrategy::NextFrame => CorrectivePlan::next_frame(),
        }
    }

    /// Options for a [`ViewController`](crate::ViewController)
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            corrective_plan: self.corrective_plan(),
            event_toast_ms: self.event_toast_ms,
        }
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_min_minutes >= self.slot_max_minutes || self.slot_max_minutes > MINUTES_PER_DAY {
            return Err(ConfigError::ValidationError(format!(
                "slot window {}..{} minutes is empty or outside the day",
                self.slot_min_minutes, self.slot_max_minutes
            )));
        }
        if self.default_event_minutes == 0 {
            return Err(ConfigError::ValidationError(
                "default_event_minutes must be greater than zero".to_string(),
            ));
        }
        if !is_hex_color(&self.event_text_color) {
            return Err(ConfigError::ValidationError(format!(
                "event_text_color {:?} is not a #RRGGBB colour",
                self.event_text_color
            )));
        }
        if let Some(event) = self
            .events
            .iter()
            .find(|event| event.color.as_deref().is_some_and(|c| !is_hex_color(c)))
        {
            return Err(ConfigError::ValidationError(format!(
                "event {:?} has a malformed colour",
                event.title
            )));
        }
        Ok(())
    }
}

/// Whether `value` is `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// The built-in demo week: ten events, Monday 3 to Friday 7 February 2025
pub fn default_seed_events() -> Vec<CalendarEvent> {
    const DEMO_WEEK: [(&str, u32, (u32, u32), (u32, u32), &str); 10] = [
        ("Client Call", 3, (9, 0), (9, 30), "#A8D5BA"),
        ("Team Standup", 3, (11, 0), (11, 30), "#B5D8F6"),
        ("Project Review", 4, (10, 0), (10, 30), "#FAD2E1"),
        ("Lunch Break", 4, (12, 30), (13, 0), "#FFE5B4"),
        ("Workshop", 5, (14, 0), (15, 0), "#C3B1E1"),
        ("Team Brainstorming", 5, (16, 0), (17, 0), "#F7D488"),
        ("Scrum Meeting", 6, (9, 30), (10, 0), "#FFCCCB"),
        ("Tech Sync", 6, (13, 0), (13, 30), "#B0E0E6"),
        ("Company Update", 7, (10, 30), (11, 0), "#D3ECA7"),
        ("End of Week Review", 7, (15, 30), (16, 0), "#FDCEDF"),
    ];

    DEMO_WEEK
        .iter()
        .filter_map(|&(title, day, (start_h, start_m), (end_h, end_m), color)| {
            let date = NaiveDate::from_ymd_opt(2025, 2, day)?;
            let start = date.and_hms_opt(start_h, start_m, 0)?;
            let end = date.and_hms_opt(end_h, end_m, 0)?;
            Some(CalendarEvent::new(title, start).with_end(end).with_color(color))
        })
        .collect()
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$CALVIEW_CONFIG` when set, otherwise
/// `$XDG_CONFIG_HOME/calview/calview.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CALVIEW_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|p| p.join("calview").join("calview.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed or holds
/// invalid values. A missing config file is not an error (defaults are used).
pub fn load_config() -> Result<CalendarConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path, then the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read, parsed or
/// validated.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<CalendarConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration reading environment overrides through `env`
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load_config_with_env(
    path: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<CalendarConfig, ConfigError> {
    let mut config = CalendarConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: CalviewToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, toml_config)?;
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                events = config.events.len(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut CalendarConfig, toml: CalviewToml) -> Result<(), ConfigError> {
    // Calendar settings
    if let Some(view) = toml.calendar.initial_view {
        config.initial_view = view
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("initial_view: {e}")))?;
    }
    if let Some(day) = toml.calendar.first_day {
        config.first_day = weekday_from_index(day).ok_or_else(|| {
            ConfigError::ValidationError(format!("first_day {day} is outside 0..=6"))
        })?;
    }
    if let Some(text) = toml.calendar.all_day_text {
        config.all_day_text = text;
    }
    if let Some(color) = toml.calendar.event_text_color {
        config.event_text_color = color;
    }
    if let Some(time) = toml.calendar.slot_min_time {
        config.slot_min_minutes = parse_slot(&time, "slot_min_time")?;
    }
    if let Some(time) = toml.calendar.slot_max_time {
        config.slot_max_minutes = parse_slot(&time, "slot_max_time")?;
    }
    if let Some(minutes) = toml.calendar.default_event_minutes {
        config.default_event_minutes = minutes;
    }

    // Layout settings
    if let Some(strategy) = toml.layout.strategy {
        config.layout_strategy = strategy.parse()?;
    }
    if let Some(delay) = toml.layout.rerender_delay_ms {
        config.rerender_delay_ms = delay;
    }
    if let Some(delay) = toml.layout.resize_delay_ms {
        config.resize_delay_ms = delay;
    }
    if let Some(delay) = toml.layout.relayout_delay_ms {
        config.relayout_delay_ms = delay;
    }

    // Notification settings
    if let Some(duration) = toml.notifications.event_duration_ms {
        config.event_toast_ms = duration;
    }

    if let Some(events) = toml.events {
        config.events = events;
    }

    Ok(())
}

fn parse_slot(value: &str, field: &str) -> Result<u32, ConfigError> {
    parse_slot_time(value).ok_or_else(|| {
        ConfigError::ValidationError(format!("{field} {value:?} is not a time between 00:00 and 24:00"))
    })
}

/// Apply environment variable overrides to the config
///
/// Unparseable values are logged and skipped.
fn apply_env_config(config: &mut CalendarConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(view) = env("CALVIEW_INITIAL_VIEW") {
        match view.parse::<ViewMode>() {
            Ok(mode) => {
                config.initial_view = mode;
                config.source = ConfigSource::Env;
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring CALVIEW_INITIAL_VIEW"),
        }
    }
    if let Some(day) = env("CALVIEW_FIRST_DAY") {
        match day.trim().parse::<u8>().ok().and_then(weekday_from_index) {
            Some(weekday) => {
                config.first_day = weekday;
                config.source = ConfigSource::Env;
            }
            None => tracing::warn!(value = %day, "Ignoring CALVIEW_FIRST_DAY"),
        }
    }
    if let Some(strategy) = env("CALVIEW_LAYOUT_STRATEGY") {
        match strategy.parse::<LayoutStrategy>() {
            Ok(strategy) => {
                config.layout_strategy = strategy;
                config.source = ConfigSource::Env;
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring CALVIEW_LAYOUT_STRATEGY"),
        }
    }
    if let Some(duration) = env("CALVIEW_EVENT_TOAST_MS") {
        match duration.trim().parse::<u32>() {
            Ok(ms) => {
                config.event_toast_ms = ms;
                config.source = ConfigSource::Env;
            }
            Err(_) => tracing::warn!(value = %duration, "Ignoring CALVIEW_EVENT_TOAST_MS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use std::time::Duration as StdDuration;
    use tempfile::NamedTempFile;

    use crate::schedule::Deferral;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ===== Defaults =====

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.initial_view, ViewMode::Week);
        assert_eq!(config.first_day, Weekday::Mon);
        assert_eq!(config.event_text_color, "#000000");
        assert_eq!(config.event_toast_ms, 5000);
        assert_eq!(config.source(), ConfigSource::Default);
        assert_eq!(config.corrective_plan(), CorrectivePlan::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_demo_week_has_ten_events() {
        let events = default_seed_events();
        assert_eq!(events.len(), 10);
        assert_eq!(events[0].title, "Client Call");
        assert_eq!(events[0].start.to_string(), "2025-02-03 09:00:00");
        assert_eq!(events[9].color.as_deref(), Some("#FDCEDF"));
        assert!(events.iter().all(|e| e.end.is_some()));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_with_env(Some(dir.path().join("nope.toml")), no_env).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.config_file_path.is_none());
    }

    // ===== File Loading =====

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r##"
[calendar]
initial_view = "monthGrid"
first_day = 0
all_day_text = "all-day"
event_text_color = "#FFFFFF"
slot_min_time = "07:00:00"
slot_max_time = "20:00"
default_event_minutes = 30

[layout]
strategy = "next-frame"

[notifications]
event_duration_ms = 2500

[[events]]
title = "Dentist"
start = "2025-03-01T08:00:00"
color = "#abc"
"##,
        );
        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.source(), ConfigSource::File);
        assert_eq!(config.initial_view, ViewMode::Month);
        assert_eq!(config.first_day, Weekday::Sun);
        assert_eq!(config.all_day_text, "all-day");
        assert_eq!(config.slot_min_minutes, 7 * 60);
        assert_eq!(config.slot_max_minutes, 20 * 60);
        assert_eq!(config.event_toast_ms, 2500);
        assert_eq!(config.corrective_plan(), CorrectivePlan::next_frame());
        assert_eq!(config.events.len(), 1);
        assert_eq!(config.events[0].end, None);

        let options = config.surface_options();
        assert_eq!(options.default_event_duration, Duration::minutes(30));
        assert_eq!(options.hour_rows(), 13);
    }

    #[test]
    fn test_partial_file_keeps_demo_events() {
        let file = write_config("[layout]\nrelayout_delay_ms = 500\n");
        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();
        assert_eq!(config.events.len(), 10);
        assert_eq!(
            config.corrective_plan().relayout,
            Deferral::After(StdDuration::from_millis(500))
        );
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[calendar\n");
        let err = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_errors() {
        for contents in [
            "[calendar]\ninitial_view = \"dayGridMonth\"\n",
            "[calendar]\nfirst_day = 7\n",
            "[calendar]\nslot_min_time = \"18:00\"\nslot_max_time = \"08:00\"\n",
            "[calendar]\nslot_max_time = \"25:00\"\n",
            "[calendar]\ndefault_event_minutes = 0\n",
            "[calendar]\nevent_text_color = \"black\"\n",
            "[layout]\nstrategy = \"eventually\"\n",
        ] {
            let file = write_config(contents);
            let err = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap_err();
            assert!(
                matches!(err, ConfigError::ValidationError(_)),
                "expected validation error for {contents:?}, got {err:?}"
            );
        }
    }

    // ===== Environment Overrides =====

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[calendar]\ninitial_view = \"Month\"\n");
        let env: HashMap<&str, &str> = HashMap::from([
            ("CALVIEW_INITIAL_VIEW", "day"),
            ("CALVIEW_FIRST_DAY", "6"),
            ("CALVIEW_LAYOUT_STRATEGY", "next-frame"),
            ("CALVIEW_EVENT_TOAST_MS", "750"),
        ]);
        let config = load_config_with_env(Some(file.path().to_path_buf()), |key| {
            env.get(key).map(|v| (*v).to_string())
        })
        .unwrap();

        assert_eq!(config.source(), ConfigSource::Env);
        assert_eq!(config.initial_view, ViewMode::Day);
        assert_eq!(config.first_day, Weekday::Sat);
        assert_eq!(config.layout_strategy, LayoutStrategy::NextFrame);
        assert_eq!(config.controller_options().event_toast_ms, 750);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let config = load_config_with_env(None, |key| match key {
            "CALVIEW_FIRST_DAY" => Some("9".to_string()),
            "CALVIEW_INITIAL_VIEW" => Some("agenda".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.first_day, Weekday::Mon);
        assert_eq!(config.initial_view, ViewMode::Week);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#A8D5BA"));
        assert!(is_hex_color("#abc"));
        assert!(!is_hex_color("A8D5BA"));
        assert!(!is_hex_color("#A8D5B"));
        assert!(!is_hex_color("#GGGGGG"));
    }
}
