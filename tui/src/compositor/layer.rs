//! Compositor Layer
//!
//! A positioned off-screen buffer. Layers render in local coordinates
//! (origin at 0,0); the compositor offsets them when blitting.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::LayerId;

/// A single z-ordered layer
#[derive(Debug)]
pub struct Layer {
    /// Layer identity
    pub(crate) id: LayerId,
    /// Position and size on screen
    pub(crate) bounds: Rect,
    /// Stacking order; higher draws later
    pub(crate) z_index: i32,
    /// Hidden layers are skipped when compositing and hit-testing
    pub(crate) visible: bool,
    /// Local-coordinate buffer
    pub(crate) buffer: Buffer,
}

impl Layer {
    /// Create a visible layer with an empty buffer
    pub fn new(id: LayerId, bounds: Rect, z_index: i32) -> Self {
        Self {
            id,
            bounds,
            z_index,
            visible: true,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
        }
    }

    /// Layer identity
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Screen bounds
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the screen position falls inside the layer
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && y >= self.bounds.y
            && x < self.bounds.x.saturating_add(self.bounds.width)
            && y < self.bounds.y.saturating_add(self.bounds.height)
    }

    /// Convert a screen position into layer-local coordinates
    pub fn to_local(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        self.contains(x, y)
            .then(|| (x - self.bounds.x, y - self.bounds.y))
    }
}
