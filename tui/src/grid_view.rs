//! Calendar Grid Renderer
//!
//! Paints a [`GridSurface`] into a layer buffer using the geometry the
//! surface computed on its last layout pass. Geometry is never recomputed
//! here: if the surface's geometry is stale the grid draws stale, exactly
//! like a widget that measured a hidden container.
//!
//! ```text
//!            Mon 3     Tue 4     Wed 5  ...      <- header row
//! all-day                                        <- all-day row
//! 09:00 AM  ▓Client▓                             <- hourly body
//! 10:00 AM            ▓Review▓
//! ```
//!
//! Rendering returns the hitbox of every event block so mouse clicks can be
//! mapped back to visible-event indices.

use chrono::{Datelike, NaiveDate};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthChar;

use calview_core::format::{clock_12h, minute_of_day, slot_label, MINUTES_PER_DAY};
use calview_core::{CalendarEvent, Clock, GridSurface, ViewMode, TIME_GUTTER_WIDTH};

use crate::theme;

/// Rows above the grid body: day headers plus the all-day row (or a rule in month view)
pub const GRID_HEADER_ROWS: u16 = 2;

/// Screen area of a rendered event block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitbox {
    /// Layer-local area
    pub area: Rect,
    /// Index into the surface's visible events
    pub index: usize,
}

impl Hitbox {
    /// Whether a layer-local position falls inside
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.area.x && x < self.area.right() && y >= self.area.y && y < self.area.bottom()
    }
}

/// Topmost hitbox at a layer-local position (later blocks paint over earlier ones)
pub fn hit_test(hitboxes: &[Hitbox], x: u16, y: u16) -> Option<usize> {
    hitboxes
        .iter()
        .rev()
        .find(|hitbox| hitbox.contains(x, y))
        .map(|hitbox| hitbox.index)
}

/// Renders a grid surface
pub struct GridView<'a, C: Clock> {
    surface: &'a GridSurface<C>,
    today: NaiveDate,
    selected: Option<usize>,
}

impl<'a, C: Clock> GridView<'a, C> {
    /// Create a view of `surface`, highlighting `today`
    pub fn new(surface: &'a GridSurface<C>, today: NaiveDate) -> Self {
        Self {
            surface,
            today,
            selected: None,
        }
    }

    /// Highlight the selected visible event
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Paint into `buf` (its whole area) and return event hitboxes
    pub fn render(&self, buf: &mut Buffer) -> Vec<Hitbox> {
        let area = buf.area;
        let geometry = self.surface.geometry();
        if area.is_empty() || geometry.column_width == 0 || geometry.row_height == 0 {
            return Vec::new();
        }
        match self.surface.mode() {
            ViewMode::Week | ViewMode::Day => self.render_time_grid(buf, area),
            ViewMode::Month => self.render_month_grid(buf, area),
        }
    }

    fn render_time_grid(&self, buf: &mut Buffer, area: Rect) -> Vec<Hitbox> {
        let geometry = self.surface.geometry();
        let options = self.surface.options();
        let range = self.surface.grid_range();
        let column_x = |day: u16| {
            area.x
                .saturating_add(TIME_GUTTER_WIDTH)
                .saturating_add(day.saturating_mul(geometry.column_width))
        };
        let label_width = TIME_GUTTER_WIDTH.saturating_sub(1);
        let body_y = area.y.saturating_add(GRID_HEADER_ROWS);

        // Day headers
        for (offset, day) in range.days().enumerate() {
            let Ok(offset) = u16::try_from(offset) else { break };
            let x = column_x(offset);
            if x >= area.right() {
                break;
            }
            let label = truncate(&day.format("%a %-d").to_string(), geometry.column_width.saturating_sub(1));
            buf.set_string(x, area.y, label, self.day_style(day, true));
        }

        // All-day row
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                truncate(&options.all_day_text, label_width),
                Style::default().fg(theme::DIM_GRAY),
            );
        }

        // Hourly rows
        let grid_right = column_x(geometry.columns).min(area.right());
        for hour in 0..geometry.rows {
            let minute = options.slot_min_minutes + u32::from(hour) * 60;
            if minute >= options.slot_max_minutes {
                break;
            }
            let y = body_y.saturating_add(hour.saturating_mul(geometry.row_height));
            if y >= area.bottom() {
                break;
            }
            let dim = Style::default().fg(theme::DIM_GRAY);
            buf.set_string(area.x, y, truncate(&slot_label(minute), label_width), dim);
            if geometry.row_height > 1 {
                for x in column_x(0)..grid_right {
                    buf.set_string(x, y, "┈", dim);
                }
            }
        }

        // Event blocks
        let slot_min = options.slot_min_minutes;
        let row_height = u32::from(geometry.row_height);
        let mut hitboxes = Vec::new();
        for (index, event) in self.surface.visible_events().into_iter().enumerate() {
            let Ok(day) = u16::try_from((event.start.date() - range.start).num_days()) else {
                continue;
            };
            if day >= geometry.columns {
                continue;
            }

            let start_minute = minute_of_day(event.start.time());
            let end = event.effective_end(options.default_event_duration);
            let end_minute = if end.date() > event.start.date() {
                MINUTES_PER_DAY
            } else {
                minute_of_day(end.time())
            };
            let top_minute = start_minute.max(slot_min);
            let bottom_minute = end_minute.min(options.slot_max_minutes);
            if top_minute >= bottom_minute {
                continue;
            }

            let top = (top_minute - slot_min) * row_height / 60;
            let bottom = ((bottom_minute - slot_min) * row_height).div_ceil(60);
            let (Ok(top), Ok(height)) = (u16::try_from(top), u16::try_from((bottom - top).max(1)))
            else {
                continue;
            };

            let block = Rect::new(
                column_x(day),
                body_y.saturating_add(top),
                geometry.column_width.saturating_sub(1).max(1),
                height,
            )
            .intersection(area);
            if block.is_empty() {
                continue;
            }

            let style = self.event_style(event, index);
            buf.set_style(block, style);
            buf.set_string(block.x, block.y, truncate(&event.title, block.width), style);
            if block.height > 1 {
                buf.set_string(
                    block.x,
                    block.y + 1,
                    truncate(&clock_12h(event.start.time()), block.width),
                    style,
                );
            }
            hitboxes.push(Hitbox { area: block, index });
        }
        hitboxes
    }

    fn render_month_grid(&self, buf: &mut Buffer, area: Rect) -> Vec<Hitbox> {
        let geometry = self.surface.geometry();
        let column_width = geometry.column_width;
        let cell_width = column_width.saturating_sub(1).max(1);
        let body_y = area.y.saturating_add(GRID_HEADER_ROWS);
        let dim = Style::default().fg(theme::DIM_GRAY);

        // Weekday names from the configured first day
        let mut weekday = self.surface.options().first_day;
        for column in 0..geometry.columns {
            let x = area.x.saturating_add(column.saturating_mul(column_width));
            if x >= area.right() {
                break;
            }
            buf.set_string(
                x,
                area.y,
                truncate(&weekday.to_string(), cell_width),
                Style::default().fg(theme::HEADER_FG).add_modifier(Modifier::BOLD),
            );
            weekday = weekday.succ();
        }
        if area.height > 1 {
            let right = area
                .x
                .saturating_add(geometry.columns.saturating_mul(column_width))
                .min(area.right());
            for x in area.x..right {
                buf.set_string(x, area.y + 1, "─", dim);
            }
        }

        let visible = self.surface.visible_events();
        let lines_per_cell = geometry.row_height.saturating_sub(1);
        let mut hitboxes = Vec::new();

        for (offset, day) in self.surface.grid_range().days().enumerate() {
            let Ok(offset) = u16::try_from(offset) else { break };
            let (row, column) = (offset / 7, offset % 7);
            let x = area.x.saturating_add(column.saturating_mul(column_width));
            let y = body_y.saturating_add(row.saturating_mul(geometry.row_height));
            if y >= area.bottom() {
                break;
            }
            if x >= area.right() {
                continue;
            }
            buf.set_string(x, y, day.day().to_string(), self.day_style(day, false));

            let day_events: Vec<(usize, &CalendarEvent)> = visible
                .iter()
                .enumerate()
                .filter(|(_, event)| event.start.date() == day)
                .map(|(index, event)| (index, *event))
                .collect();

            for (line, (index, event)) in (0..lines_per_cell).zip(day_events.iter()) {
                let line_y = y.saturating_add(1 + line);
                if line_y >= area.bottom() {
                    break;
                }
                let overflow = day_events.len() - usize::from(line);
                if line + 1 == lines_per_cell && overflow > 1 {
                    buf.set_string(x, line_y, truncate(&format!("+{overflow} more"), cell_width), dim);
                    break;
                }
                let block = Rect::new(x, line_y, cell_width, 1).intersection(area);
                if block.is_empty() {
                    continue;
                }
                let style = self.event_style(event, *index);
                buf.set_style(block, style);
                buf.set_string(block.x, block.y, truncate(&event.title, block.width), style);
                hitboxes.push(Hitbox {
                    area: block,
                    index: *index,
                });
            }
        }
        hitboxes
    }

    fn event_style(&self, event: &CalendarEvent, index: usize) -> Style {
        theme::event_style(
            event.color.as_deref(),
            &self.surface.options().event_text_color,
            self.selected == Some(index),
        )
    }

    fn day_style(&self, day: NaiveDate, header: bool) -> Style {
        if day == self.today {
            Style::default().fg(theme::TODAY).add_modifier(Modifier::BOLD)
        } else if !header && !self.surface.range().contains(day) {
            Style::default().fg(theme::OUT_OF_RANGE)
        } else if header {
            Style::default().fg(theme::HEADER_FG).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::HEADER_FG)
        }
    }
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`
pub fn truncate(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut out = String::new();
    let mut used = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            // Make room for the ellipsis
            while used + 1 > width && !out.is_empty() {
                if let Some(last) = out.pop() {
                    used -= last.width().unwrap_or(0);
                }
            }
            if width > 0 && i > 0 {
                out.push('…');
            }
            return out;
        }
        used += w;
        out.push(c);
    }
    out
}
