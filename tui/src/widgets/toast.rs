//! ToastStack Widget
//!
//! Stacked, word-wrapped toasts with an accent edge, oldest on top. Toasts
//! are separated by one untouched (transparent) row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use textwrap::wrap;

use crate::display::DisplayToast;
use crate::theme::{TOAST_BG, TOAST_EDGE, TOAST_FG};

/// Preferred width of the toast column
pub const TOAST_WIDTH: u16 = 40;

/// Columns taken by the edge marker and its padding
const GUTTER: u16 = 2;

/// A stack of toasts
pub struct ToastStack<'a> {
    toasts: Vec<&'a str>,
}

impl<'a> ToastStack<'a> {
    /// Stack the given toasts, oldest first
    pub fn new(toasts: impl IntoIterator<Item = &'a DisplayToast>) -> Self {
        Self {
            toasts: toasts.into_iter().map(|t| t.message.as_str()).collect(),
        }
    }

    /// Rows needed to show every toast at `width`
    pub fn height(&self, width: u16) -> u16 {
        let lines: usize = self.wrapped(width).iter().map(Vec::len).sum();
        let gaps = self.toasts.len().saturating_sub(1);
        u16::try_from(lines + gaps).unwrap_or(u16::MAX)
    }

    fn wrapped(&self, width: u16) -> Vec<Vec<String>> {
        let text_width = usize::from(width.saturating_sub(GUTTER).max(1));
        self.toasts
            .iter()
            .map(|message| {
                wrap(message, text_width)
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect()
            })
            .collect()
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= GUTTER || area.height == 0 {
            return;
        }
        let edge = Style::default().fg(TOAST_EDGE).bg(TOAST_BG);
        let body = Style::default()
            .fg(TOAST_FG)
            .bg(TOAST_BG)
            .add_modifier(Modifier::BOLD);

        let mut y = area.y;
        for lines in self.wrapped(area.width) {
            for line in lines {
                if y >= area.bottom() {
                    return;
                }
                buf.set_style(Rect::new(area.x, y, area.width, 1), body);
                buf.set_string(area.x, y, "▌", edge);
                buf.set_stringn(
                    area.x + GUTTER,
                    y,
                    &line,
                    usize::from(area.width - GUTTER),
                    body,
                );
                y += 1;
            }
            y = y.saturating_add(1);
        }
    }
}
