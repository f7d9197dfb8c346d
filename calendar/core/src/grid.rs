//! Grid Surface
//!
//! A headless rendering surface: it owns the anchor date, the active mode,
//! the event working set, and the grid geometry for whatever container the
//! shell gives it. Shells paint from its read accessors; the controller
//! drives it through [`RenderingSurface`].
//!
//! # Geometry
//!
//! Geometry is only recomputed on the first layout and on
//! [`force_relayout`](RenderingSurface::force_relayout). A container resize
//! on its own just records the new size, so a surface first laid out while
//! its container was hidden (zero-sized) keeps zero geometry until someone
//! asks it to relayout. That is the situation the controller's deferred
//! corrective passes exist for.

use chrono::{Duration, NaiveDate, Weekday};

use crate::clock::{Clock, SystemClock};
use crate::event::{ActivatedEvent, CalendarEvent};
use crate::format::MINUTES_PER_DAY;
use crate::mode::ViewMode;
use crate::range::{self, DateRange, MONTH_GRID_WEEKS};
use crate::store::EventStore;
use crate::surface::{RenderingSurface, SurfaceHandlers};

/// Columns reserved for slot labels in time-grid modes
pub const TIME_GUTTER_WIDTH: u16 = 10;

/// Display options fixed at surface construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// First day of the week for week ranges and month grids
    pub first_day: Weekday,
    /// Label of the all-day row (empty hides the label)
    pub all_day_text: String,
    /// Default text colour for event blocks
    pub event_text_color: String,
    /// First visible minute of the time grid
    pub slot_min_minutes: u32,
    /// End of the visible time grid, in minutes (1440 = midnight)
    pub slot_max_minutes: u32,
    /// Duration used for events without an end
    pub default_event_duration: Duration,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            first_day: Weekday::Mon,
            all_day_text: String::new(),
            event_text_color: "#000000".to_string(),
            slot_min_minutes: 0,
            slot_max_minutes: MINUTES_PER_DAY,
            default_event_duration: Duration::minutes(60),
        }
    }
}

impl SurfaceOptions {
    /// Number of hourly rows in the time grid
    pub fn hour_rows(&self) -> u16 {
        let span = self.slot_max_minutes.saturating_sub(self.slot_min_minutes);
        u16::try_from(span.div_ceil(60)).unwrap_or(u16::MAX)
    }
}

/// Pixel (cell) geometry of the grid for a given container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    /// Container width the geometry was computed for
    pub width: u16,
    /// Container height the geometry was computed for
    pub height: u16,
    /// Number of day columns
    pub columns: u16,
    /// Width of each day column
    pub column_width: u16,
    /// Number of body rows (hours for time grids, weeks for month grids)
    pub rows: u16,
    /// Height of each body row
    pub row_height: u16,
}

impl Geometry {
    /// Compute geometry for `mode` inside a `width` × `height` container
    pub fn compute(mode: ViewMode, width: u16, height: u16, options: &SurfaceOptions) -> Self {
        let (columns, rows, usable_width) = match mode {
            ViewMode::Day => (1, options.hour_rows(), width.saturating_sub(TIME_GUTTER_WIDTH)),
            ViewMode::Week => (7, options.hour_rows(), width.saturating_sub(TIME_GUTTER_WIDTH)),
            ViewMode::Month => (7, u16::try_from(MONTH_GRID_WEEKS).unwrap_or(u16::MAX), width),
        };
        let row_height = if rows == 0 { 0 } else { (height / rows).max(1) };
        Self {
            width,
            height,
            columns,
            column_width: usable_width / columns,
            rows,
            row_height: if height == 0 { 0 } else { row_height },
        }
    }

    /// Whether this geometry was computed for a `width` × `height` container
    pub fn matches(&self, width: u16, height: u16) -> bool {
        self.width == width && self.height == height
    }
}

/// Built-in date-grid rendering surface
pub struct GridSurface<C: Clock = SystemClock> {
    options: SurfaceOptions,
    handlers: SurfaceHandlers,
    clock: C,
    mode: ViewMode,
    anchor: NaiveDate,
    store: EventStore,
    container: (u16, u16),
    geometry: Geometry,
    laid_out: bool,
    relayouts: u32,
}

impl<C: Clock> GridSurface<C> {
    /// Create a surface anchored on today, not yet laid out
    pub fn new(options: SurfaceOptions, mode: ViewMode, handlers: SurfaceHandlers, clock: C) -> Self {
        let anchor = clock.today();
        Self {
            options,
            handlers,
            clock,
            mode,
            anchor,
            store: EventStore::new(),
            container: (0, 0),
            geometry: Geometry::default(),
            laid_out: false,
            relayouts: 0,
        }
    }

    /// Seed the working set at construction
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = CalendarEvent>) -> Self {
        self.store.seed(events);
        self
    }

    /// Replace the working set
    pub fn seed(&mut self, events: impl IntoIterator<Item = CalendarEvent>) {
        self.store.seed(events);
    }

    /// Complete the first layout pass inside a `width` × `height` container
    ///
    /// Emits a range-changed signal the first time, mirroring the initial
    /// render of the grid. Later calls behave like a resize plus relayout.
    pub fn complete_layout(&mut self, width: u16, height: u16) {
        self.container = (width, height);
        self.geometry = Geometry::compute(self.mode, width, height, &self.options);
        if !self.laid_out {
            self.laid_out = true;
            tracing::debug!(width, height, "Grid surface laid out");
            self.handlers.range_changed();
        }
    }

    /// Record a new container size without recomputing geometry
    pub fn resize_container(&mut self, width: u16, height: u16) {
        self.container = (width, height);
    }

    /// Jump to the range containing `date`
    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.move_anchor(date);
    }

    /// Current container size
    pub fn container(&self) -> (u16, u16) {
        self.container
    }

    /// Geometry from the last layout pass
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Whether the geometry no longer matches the container
    pub fn is_geometry_stale(&self) -> bool {
        !self.geometry.matches(self.container.0, self.container.1)
    }

    /// How many times `force_relayout` has run
    pub fn relayout_count(&self) -> u32 {
        self.relayouts
    }

    /// Active mode
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Anchor date the range is built around
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Display options
    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    /// The event working set
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Range currently rendered
    pub fn range(&self) -> DateRange {
        DateRange::for_mode(self.mode, self.anchor, self.options.first_day)
    }

    /// Days actually drawn (whole weeks in month mode)
    pub fn grid_range(&self) -> DateRange {
        match self.mode {
            ViewMode::Month => DateRange::month_grid(self.anchor, self.options.first_day),
            ViewMode::Week | ViewMode::Day => self.range(),
        }
    }

    /// Events drawn in the grid, ordered by start
    pub fn visible_events(&self) -> Vec<&CalendarEvent> {
        self.store.in_range(&self.grid_range())
    }

    /// Activate the `index`-th visible event, as if the user clicked it
    ///
    /// Returns `false` when no such event is visible.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(activated) = self
            .visible_events()
            .get(index)
            .map(|event| ActivatedEvent::from(*event))
        else {
            return false;
        };
        tracing::debug!(title = %activated.title, "Event activated");
        self.handlers.event_activated(activated);
        true
    }

    fn move_anchor(&mut self, anchor: NaiveDate) {
        let before = self.range();
        self.anchor = anchor;
        if self.range() != before {
            self.handlers.range_changed();
        }
    }
}

impl<C: Clock> RenderingSurface for GridSurface<C> {
    fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    fn current_range_title(&self) -> String {
        self.range().title(self.mode)
    }

    fn go_to_next(&mut self) {
        self.move_anchor(range::step(self.anchor, self.mode, true));
    }

    fn go_to_previous(&mut self) {
        self.move_anchor(range::step(self.anchor, self.mode, false));
    }

    fn go_to_today(&mut self) {
        self.move_anchor(self.clock.today());
    }

    fn set_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        let before = self.range();
        self.mode = mode;
        self.geometry = Geometry::compute(mode, self.container.0, self.container.1, &self.options);
        // A switch that keeps the same range stays silent
        if self.range() != before {
            self.handlers.range_changed();
        }
    }

    fn add_event(&mut self, event: CalendarEvent) {
        tracing::debug!(title = %event.title, start = %event.start, "Event added to surface");
        self.store.append(event);
    }

    fn force_relayout(&mut self) {
        let (width, height) = self.container;
        self.geometry = Geometry::compute(self.mode, width, height, &self.options);
        self.relayouts += 1;
    }

    fn event_count(&self) -> usize {
        self.store.len()
    }
}
