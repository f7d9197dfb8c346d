//! Layered Compositor
//!
//! Manages z-ordered layers for rendering: header, calendar grid, status
//! line and the toast stack on top. Each layer has its own buffer and can be
//! positioned, resized and hidden independently.
//!
//! Cells a layer never drew on (still in their reset state) are transparent,
//! so a toast layer only hides the grid where toasts are actually painted.
//! Blank cells with a background colour (event blocks) are opaque.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
pub struct Compositor {
    /// All layers by ID
    layers: HashMap<LayerId, Layer>,
    /// Layers sorted by z-index for rendering
    render_order: Vec<LayerId>,
    /// Next layer ID to assign
    next_id: u32,
    /// Output buffer (composited result)
    output: Buffer,
    /// Total area
    area: Rect,
}

impl Compositor {
    /// Create a new compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(id, bounds, z_index));
        self.update_render_order();

        id
    }

    /// Get mutable access to a layer's buffer for rendering
    ///
    /// The buffer is cleared first; layers are redrawn from scratch each frame.
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|layer| {
            layer.buffer.reset();
            &mut layer.buffer
        })
    }

    /// Screen bounds of a layer
    pub fn layer_bounds(&self, id: LayerId) -> Option<Rect> {
        self.layers.get(&id).map(Layer::bounds)
    }

    /// Move and resize a layer in one step
    pub fn place_layer(&mut self, id: LayerId, bounds: Rect) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.bounds.width != bounds.width || layer.bounds.height != bounds.height {
                layer.buffer = Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height));
            }
            layer.bounds = bounds;
        }
    }

    /// Set layer visibility
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        // Back to front
        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, self.area, layer);
                }
            }
        }

        &self.output
    }

    /// Blit a layer onto the output buffer, skipping untouched cells
    fn blit_layer(output: &mut Buffer, area: Rect, layer: &Layer) {
        let blank = Cell::default();
        let bounds = layer.bounds;

        for ly in 0..bounds.height {
            for lx in 0..bounds.width {
                let dst_x = bounds.x.saturating_add(lx);
                let dst_y = bounds.y.saturating_add(ly);
                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let Some(src) = layer.buffer.cell((lx, ly)) else {
                    continue;
                };
                if *src == blank {
                    continue;
                }
                if let Some(dst) = output.cell_mut((dst_x, dst_y)) {
                    *dst = src.clone();
                }
            }
        }
    }

    /// Find the topmost visible layer at a screen position (for mouse events)
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        self.render_order.iter().rev().copied().find(|id| {
            self.layers
                .get(id)
                .is_some_and(|layer| layer.visible && layer.contains(x, y))
        })
    }

    /// Convert a screen position to coordinates local to `id`
    pub fn to_layer_local(&self, id: LayerId, x: u16, y: u16) -> Option<(u16, u16)> {
        self.layers.get(&id).and_then(|layer| layer.to_local(x, y))
    }

    /// Update render order based on z-indices; ties keep creation order
    fn update_render_order(&mut self) {
        let mut order: Vec<(i32, LayerId)> = self
            .layers
            .values()
            .map(|layer| (layer.z_index, layer.id()))
            .collect();
        order.sort_by_key(|(z, id)| (*z, id.0));
        self.render_order = order.into_iter().map(|(_, id)| id).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Style};

    #[test]
    fn test_top_layer_wins_where_drawn() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 10, 2));
        let bottom = compositor.create_layer(Rect::new(0, 0, 10, 2), 0);
        let top = compositor.create_layer(Rect::new(5, 0, 5, 1), 10);

        compositor
            .layer_buffer_mut(bottom)
            .unwrap()
            .set_string(0, 0, "aaaaaaaaaa", Style::default());
        compositor
            .layer_buffer_mut(top)
            .unwrap()
            .set_string(0, 0, "bb", Style::default());

        let output = compositor.composite();
        assert_eq!(output[(4, 0)].symbol(), "a");
        assert_eq!(output[(5, 0)].symbol(), "b");
        assert_eq!(output[(6, 0)].symbol(), "b");
        // Untouched top-layer cells are transparent
        assert_eq!(output[(7, 0)].symbol(), "a");
    }

    #[test]
    fn test_blank_cells_with_background_are_opaque() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 4, 1));
        let bottom = compositor.create_layer(Rect::new(0, 0, 4, 1), 0);
        let top = compositor.create_layer(Rect::new(0, 0, 4, 1), 1);

        compositor
            .layer_buffer_mut(bottom)
            .unwrap()
            .set_string(0, 0, "xxxx", Style::default());
        compositor
            .layer_buffer_mut(top)
            .unwrap()
            .set_string(0, 0, "  ", Style::default().bg(Color::Blue));

        let output = compositor.composite();
        assert_eq!(output[(0, 0)].symbol(), " ");
        assert_eq!(output[(0, 0)].bg, Color::Blue);
        assert_eq!(output[(2, 0)].symbol(), "x");
    }

    #[test]
    fn test_hidden_layers_are_skipped() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 4, 1));
        let layer = compositor.create_layer(Rect::new(0, 0, 4, 1), 0);
        compositor
            .layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 0, "zz", Style::default());
        compositor.set_visible(layer, false);

        assert_eq!(compositor.composite()[(0, 0)].symbol(), " ");
        assert_eq!(compositor.layer_at(0, 0), None);
    }

    #[test]
    fn test_layer_at_prefers_front() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 20, 10));
        let grid = compositor.create_layer(Rect::new(0, 2, 20, 7), 0);
        let toast = compositor.create_layer(Rect::new(12, 2, 8, 3), 100);

        assert_eq!(compositor.layer_at(13, 3), Some(toast));
        assert_eq!(compositor.layer_at(2, 3), Some(grid));
        assert_eq!(compositor.layer_at(2, 0), None);
        assert_eq!(compositor.to_layer_local(grid, 2, 3), Some((2, 1)));
    }

    #[test]
    fn test_place_layer_reallocates_on_size_change() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 20, 10));
        let layer = compositor.create_layer(Rect::new(0, 0, 5, 5), 0);
        compositor.place_layer(layer, Rect::new(2, 3, 8, 4));
        assert_eq!(compositor.layer_bounds(layer), Some(Rect::new(2, 3, 8, 4)));
        assert_eq!(
            compositor.layer_buffer_mut(layer).unwrap().area,
            Rect::new(0, 0, 8, 4)
        );
    }
}
