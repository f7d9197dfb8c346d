//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, mouse, resize)
//! - CalendarClient wrapping the view controller
//! - DisplayState for rendering
//!
//! # Frame Cycle
//!
//! 1. Convert terminal events to intents and apply them to the client
//! 2. Run the client's per-frame work (corrective passes, surface signals)
//! 3. Drain view updates and notifications into DisplayState
//! 4. Render header, grid, status and toasts through the compositor

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use ratatui::Terminal;

use calview_core::{CalendarConfig, Clock, SystemClock, ViewMode};

use crate::calendar_client::CalendarClient;
use crate::compositor::{Compositor, LayerId};
use crate::display::DisplayState;
use crate::grid_view::{hit_test, GridView, Hitbox, GRID_HEADER_ROWS};
use crate::theme;
use crate::widgets::{ToastStack, TOAST_WIDTH};

/// Header height (title and mode picker)
const HEADER_HEIGHT: u16 = 1;

/// Status line height
const STATUS_HEIGHT: u16 = 1;

/// ~30 FPS
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Key bindings shown in the status line
const KEY_HINTS: &str = "n/p move · t today · m/w/d view · a add · Tab select · Enter open · q quit";

/// What the user asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Next range
    Next,
    /// Previous range
    Previous,
    /// Range containing today
    Today,
    /// Switch to a specific mode
    ChangeView(ViewMode),
    /// Switch to the next mode in picker order
    CycleView,
    /// Add "New Event" now
    AddEvent,
    /// Select the next visible event
    SelectNext,
    /// Select the previous visible event
    SelectPrevious,
    /// Open (activate) the selected event
    ActivateSelected,
    /// Leave the app
    Quit,
}

/// Map a key press to an intent
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Intent::Quit);
    }
    let intent = match key.code {
        KeyCode::Char('n') | KeyCode::Right => Intent::Next,
        KeyCode::Char('p') | KeyCode::Left => Intent::Previous,
        KeyCode::Char('t') => Intent::Today,
        KeyCode::Char('m') => Intent::ChangeView(ViewMode::Month),
        KeyCode::Char('w') => Intent::ChangeView(ViewMode::Week),
        KeyCode::Char('d') => Intent::ChangeView(ViewMode::Day),
        KeyCode::Char('v') => Intent::CycleView,
        KeyCode::Char('a') => Intent::AddEvent,
        KeyCode::Tab | KeyCode::Down => Intent::SelectNext,
        KeyCode::BackTab | KeyCode::Up => Intent::SelectPrevious,
        KeyCode::Enter => Intent::ActivateSelected,
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}

/// Layer IDs for UI regions
struct AppLayers {
    header: LayerId,
    grid: LayerId,
    status: LayerId,
    toast: LayerId,
}

/// Main application state
pub struct App<C: Clock + Clone + 'static = SystemClock> {
    // === Core State ===
    /// Is the app still running?
    running: bool,

    // === Controller Integration ===
    /// Client driving the embedded view controller
    client: CalendarClient<C>,
    /// Display state derived from view updates
    display: DisplayState,
    /// Clock for today's highlight
    clock: C,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Event hitboxes from the last grid render (grid-layer coordinates)
    hitboxes: Vec<Hitbox>,

    /// Terminal size
    size: (u16, u16),
}

impl App<SystemClock> {
    /// Create an App sized to the current terminal
    pub fn new(config: &CalendarConfig) -> anyhow::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Self::with_size(config, width, height)
    }

    /// Create an App for a `width` × `height` screen
    pub fn with_size(config: &CalendarConfig, width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_clock(config, width, height, SystemClock)
    }
}

impl<C: Clock + Clone + 'static> App<C> {
    /// Create an App on an explicit clock, lay the grid out and mount
    pub fn with_clock(
        config: &CalendarConfig,
        width: u16,
        height: u16,
        clock: C,
    ) -> anyhow::Result<Self> {
        let area = Rect::new(0, 0, width, height);
        let mut compositor = Compositor::new(area);

        let regions = Regions::for_screen(width, height);
        let layers = AppLayers {
            header: compositor.create_layer(regions.header, 10),
            grid: compositor.create_layer(regions.grid, 0),
            status: compositor.create_layer(regions.status, 10),
            toast: compositor.create_layer(regions.toast, 100),
        };

        let mut client = CalendarClient::with_clock(config, clock.clone());
        let (grid_width, grid_height) = regions.grid_container();
        client.start(grid_width, grid_height)?;
        tracing::info!(
            width,
            height,
            events = client.event_count(),
            "Calendar view started"
        );

        Ok(Self {
            running: true,
            client,
            display: DisplayState::new(),
            clock,
            compositor,
            layers,
            hitboxes: Vec::new(),
            size: (width, height),
        })
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current display state
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// The calendar client
    pub fn client(&self) -> &CalendarClient<C> {
        &self.client
    }

    /// Screen bounds of the grid layer
    pub fn grid_bounds(&self) -> Rect {
        self.compositor
            .layer_bounds(self.layers.grid)
            .unwrap_or_default()
    }

    /// Event hitboxes from the last render, in grid-layer coordinates
    pub fn hitboxes(&self) -> &[Hitbox] {
        &self.hitboxes
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.frame(Instant::now());
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Err(e) = self.handle_event(event) {
                                tracing::warn!("Intent failed: {}", e);
                                self.display.status = Some(e.to_string());
                            }
                        }
                        Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                        None => self.running = false,
                    }
                }

                // Frame tick
                _ = tokio::time::sleep(FRAME_INTERVAL) => {}
            }

            self.frame(Instant::now());
            self.render(terminal)?;
        }

        Ok(())
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) -> anyhow::Result<()> {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(intent) = intent_for_key(key) {
                    self.apply_intent(intent)?;
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse)?,
            Event::Resize(width, height) => self.handle_resize(width, height),
            _ => {}
        }
        Ok(())
    }

    /// Apply an intent
    pub fn apply_intent(&mut self, intent: Intent) -> anyhow::Result<()> {
        tracing::debug!(?intent, "Applying intent");
        match intent {
            Intent::Next => self.client.next()?,
            Intent::Previous => self.client.prev()?,
            Intent::Today => self.client.today()?,
            Intent::ChangeView(mode) => self.client.change_view(mode)?,
            Intent::CycleView => self.client.cycle_view()?,
            Intent::AddEvent => self.client.add_new_event(),
            Intent::SelectNext => self.display.select_next(self.client.visible_count()),
            Intent::SelectPrevious => self.display.select_previous(self.client.visible_count()),
            Intent::ActivateSelected => {
                if let Some(index) = self.display.selected {
                    self.client.activate(index);
                }
            }
            Intent::Quit => self.running = false,
        }
        Ok(())
    }

    /// Handle mouse input: clicks open events, the wheel navigates
    fn handle_mouse(&mut self, mouse: MouseEvent) -> anyhow::Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.compositor.layer_at(mouse.column, mouse.row) != Some(self.layers.grid) {
                    return Ok(());
                }
                let Some((x, y)) =
                    self.compositor
                        .to_layer_local(self.layers.grid, mouse.column, mouse.row)
                else {
                    return Ok(());
                };
                if let Some(index) = hit_test(&self.hitboxes, x, y) {
                    self.display.selected = Some(index);
                    self.client.activate(index);
                }
            }
            MouseEventKind::ScrollDown => self.apply_intent(Intent::Next)?,
            MouseEventKind::ScrollUp => self.apply_intent(Intent::Previous)?,
            _ => {}
        }
        Ok(())
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "Terminal resized");
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));

        let regions = Regions::for_screen(width, height);
        self.compositor.place_layer(self.layers.header, regions.header);
        self.compositor.place_layer(self.layers.grid, regions.grid);
        self.compositor.place_layer(self.layers.status, regions.status);
        self.compositor.place_layer(self.layers.toast, regions.toast);

        let (grid_width, grid_height) = regions.grid_container();
        self.client.resized(grid_width, grid_height);
    }

    /// Per-frame work
    pub fn frame(&mut self, now: Instant) {
        self.client.frame(now);

        for (state, change) in self.client.recv_updates() {
            self.display.apply_update(state, &change);
        }

        // The shell owns the container size; hand it back to the surface
        if self.display.take_remeasure() {
            let (grid_width, grid_height) = Regions::for_screen(self.size.0, self.size.1).grid_container();
            self.client.resized(grid_width, grid_height);
        }

        for notification in self.client.recv_notifications() {
            tracing::info!(message = %notification.message, "Toast");
            self.display.push_toast(notification, now);
        }
        self.display.expire_toasts(now);
        self.display.clamp_selection(self.client.visible_count());
    }

    /// Render the UI
    ///
    /// A pending corrective re-render clears the terminal first, so the next
    /// draw repaints every cell instead of diffing against the last frame.
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        if self.display.take_redraw() {
            tracing::debug!("Full repaint");
            terminal.clear()?;
        }

        self.render_header();
        self.render_grid();
        self.render_status();
        self.render_toasts();

        terminal.draw(|frame| {
            let output = self.compositor.composite();
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    buf[(x, y)] = output[(x, y)].clone();
                }
            }
        })?;

        Ok(())
    }

    /// Render header layer: range title on the left, mode picker on the right
    fn render_header(&mut self) {
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.header) else {
            return;
        };
        let area = buf.area;

        buf.set_string(
            area.x + 1,
            area.y,
            &self.display.view.title,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        );

        let picker_width: u16 = ViewMode::ALL
            .iter()
            .map(|mode| mode.label().len() as u16 + 3)
            .sum();
        let mut x = area.right().saturating_sub(picker_width);
        for mode in ViewMode::ALL {
            let label = format!(" {} ", mode.label());
            let style = if mode == self.display.view.mode {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme::DIM_GRAY)
            };
            buf.set_string(x, area.y, &label, style);
            x = x.saturating_add(label.len() as u16 + 1);
        }
    }

    /// Render grid layer and record event hitboxes
    fn render_grid(&mut self) {
        let today = self.clock.today();
        let view = GridView::new(self.client.surface(), today).selected(self.display.selected);
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.grid) {
            self.hitboxes = view.render(buf);
        }
    }

    /// Render status bar
    fn render_status(&mut self) {
        let visible = self.client.visible_count();
        let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) else {
            return;
        };
        let area = buf.area;

        let status = match &self.display.status {
            Some(status) => format!(" {status} | {KEY_HINTS}"),
            None => format!(" {visible} events | {KEY_HINTS}"),
        };
        buf.set_stringn(
            area.x,
            area.y,
            &status,
            usize::from(area.width),
            Style::default().fg(theme::DIM_GRAY),
        );
    }

    /// Render toast layer
    fn render_toasts(&mut self) {
        let visible = !self.display.toasts.is_empty();
        self.compositor.set_visible(self.layers.toast, visible);
        if !visible {
            return;
        }

        let stack = ToastStack::new(&self.display.toasts);
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.toast) {
            let area = buf.area;
            let height = stack.height(area.width).min(area.height);
            stack.render(Rect::new(area.x, area.y, area.width, height), buf);
        }
    }
}

/// Screen regions for a given terminal size
struct Regions {
    header: Rect,
    grid: Rect,
    status: Rect,
    toast: Rect,
}

impl Regions {
    fn for_screen(width: u16, height: u16) -> Self {
        let grid_height = height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT);
        let toast_width = TOAST_WIDTH.min(width);
        Self {
            header: Rect::new(0, 0, width, HEADER_HEIGHT.min(height)),
            grid: Rect::new(0, HEADER_HEIGHT, width, grid_height),
            status: Rect::new(0, height.saturating_sub(STATUS_HEIGHT), width, STATUS_HEIGHT.min(height)),
            toast: Rect::new(width - toast_width, HEADER_HEIGHT, toast_width, grid_height),
        }
    }

    /// Container the grid body is laid out in (below the day headers)
    fn grid_container(&self) -> (u16, u16) {
        (self.grid.width, self.grid.height.saturating_sub(GRID_HEADER_ROWS))
    }
}
