//! Theme and Colors
//!
//! The calendar's terminal palette, plus conversion of the `#RRGGBB` tags
//! events and configuration carry.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Calendar Palette
// ============================================================================

/// Accent for the range title and the active mode
pub const ACCENT: Color = Color::Rgb(186, 140, 255);

/// Today's column or cell
pub const TODAY: Color = Color::Rgb(255, 213, 128);

/// Day headers
pub const HEADER_FG: Color = Color::Rgb(220, 220, 230);

/// Slot labels and hour rules
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Days outside the current month in month view
pub const OUT_OF_RANGE: Color = Color::Rgb(70, 70, 80);

/// Event blocks without a colour tag
pub const DEFAULT_EVENT_BG: Color = Color::Rgb(181, 216, 246);

// ============================================================================
// Toasts
// ============================================================================

/// Toast background
pub const TOAST_BG: Color = Color::Rgb(45, 45, 60);

/// Toast text
pub const TOAST_FG: Color = Color::Rgb(240, 240, 240);

/// Toast edge marker
pub const TOAST_EDGE: Color = ACCENT;

// ============================================================================
// Helpers
// ============================================================================

/// Parse `#RRGGBB` or `#RGB` into a terminal colour
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').filter(|hex| hex.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Style of an event block
pub fn event_style(color: Option<&str>, text_color: &str, selected: bool) -> Style {
    let bg = color.and_then(parse_hex_color).unwrap_or(DEFAULT_EVENT_BG);
    let fg = parse_hex_color(text_color).unwrap_or(Color::Black);
    let style = Style::default().fg(fg).bg(bg);
    if selected {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}
