//! Layered Compositor
//!
//! Z-ordered layers, each with its own buffer. Layers are painted back to
//! front; a blank cell (a space) lets whatever is behind it show through,
//! which is how the particle background stays visible behind the content.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
pub struct Compositor {
    layers: HashMap<LayerId, Layer>,
    /// Layers sorted by z-index, back to front
    render_order: Vec<LayerId>,
    next_id: u32,
    /// Composited result
    output: Buffer,
    area: Rect,
}

impl Compositor {
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(id, bounds, z_index));
        self.update_render_order();

        id
    }

    /// Mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    pub fn layer_bounds(&self, id: LayerId) -> Option<Rect> {
        self.layers.get(&id).map(|l| l.bounds)
    }

    pub fn is_visible(&self, id: LayerId) -> bool {
        self.layers.get(&id).is_some_and(|l| l.visible)
    }

    pub fn set_z_index(&mut self, id: LayerId, z_index: i32) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.z_index != z_index {
                layer.z_index = z_index;
                self.update_render_order();
            }
        }
    }

    pub fn move_layer(&mut self, id: LayerId, x: u16, y: u16) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.bounds.x = x;
            layer.bounds.y = y;
        }
    }

    /// Resize a layer; a no-op when the size is unchanged
    pub fn resize_layer(&mut self, id: LayerId, width: u16, height: u16) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.bounds.width != width || layer.bounds.height != height {
                layer.set_size(width, height);
            }
        }
    }

    /// Move and resize in one go
    pub fn place_layer(&mut self, id: LayerId, bounds: Rect) {
        self.move_layer(id, bounds.x, bounds.y);
        self.resize_layer(id, bounds.width, bounds.height);
    }

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

        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, self.area, layer);
                }
            }
        }

        &self.output
    }

    /// Composite and copy the result into a frame buffer
    pub fn render_into(&mut self, target: &mut Buffer) {
        let target_area = target.area;
        let output = self.composite();
        let width = target_area.width.min(output.area.width);
        let height = target_area.height.min(output.area.height);

        for y in 0..height {
            for x in 0..width {
                if let (Some(src), Some(dst)) = (
                    output.cell((x, y)),
                    target.cell_mut((target_area.x + x, target_area.y + y)),
                ) {
                    *dst = src.clone();
                }
            }
        }
    }

    /// Paint a layer onto the output, skipping blank cells
    fn blit_layer(output: &mut Buffer, area: Rect, layer: &Layer) {
        let lb = layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x.saturating_add(lx);
                let dst_y = lb.y.saturating_add(ly);
                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let Some(src) = layer.buffer.cell((lx, ly)) else {
                    continue;
                };
                if src.symbol() == " " && src.bg == Color::Reset {
                    continue;
                }
                if let Some(dst) = output.cell_mut((dst_x, dst_y)) {
                    // Text without its own background keeps the one beneath
                    let bg = if src.bg == Color::Reset { dst.bg } else { src.bg };
                    *dst = src.clone();
                    dst.bg = bg;
                }
            }
        }
    }

    /// Topmost visible layer at a screen position (for mouse events)
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        self.render_order.iter().rev().copied().find(|id| {
            self.layers
                .get(id)
                .is_some_and(|l| l.visible && l.contains(x, y))
        })
    }

    fn update_render_order(&mut self) {
        let mut order: Vec<(i32, LayerId)> = self
            .layers
            .values()
            .map(|l| (l.z_index, l.id))
            .collect();
        // Creation order breaks ties so equal z-indices stay stable
        order.sort_by_key(|(z, id)| (*z, id.0));
        self.render_order = order.into_iter().map(|(_, id)| id).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Style;

    fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
        buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default()
    }

    #[test]
    fn test_front_layer_occludes() {
        let mut comp = Compositor::new(Rect::new(0, 0, 4, 1));
        let back = comp.create_layer(Rect::new(0, 0, 4, 1), 0);
        let front = comp.create_layer(Rect::new(1, 0, 2, 1), 10);

        comp.layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 0, "....", Style::default());
        comp.layer_buffer_mut(front)
            .unwrap()
            .set_string(0, 0, "X ", Style::default());

        let out = comp.composite();
        // Blank cell in the front layer lets the back layer through
        assert_eq!(symbol(out, 0, 0), ".");
        assert_eq!(symbol(out, 1, 0), "X");
        assert_eq!(symbol(out, 2, 0), ".");
    }

    #[test]
    fn test_text_keeps_background_beneath() {
        let mut comp = Compositor::new(Rect::new(0, 0, 1, 1));
        let back = comp.create_layer(Rect::new(0, 0, 1, 1), 0);
        let front = comp.create_layer(Rect::new(0, 0, 1, 1), 1);
        comp.layer_buffer_mut(back)
            .unwrap()
            .set_style(Rect::new(0, 0, 1, 1), Style::default().bg(Color::Blue));
        comp.layer_buffer_mut(front)
            .unwrap()
            .set_string(0, 0, "t", Style::default().fg(Color::White));

        let cell = comp.composite().cell((0, 0)).unwrap().clone();
        assert_eq!(cell.symbol(), "t");
        assert_eq!(cell.bg, Color::Blue);
        assert_eq!(cell.fg, Color::White);
    }

    #[test]
    fn test_hidden_layer_skipped() {
        let mut comp = Compositor::new(Rect::new(0, 0, 2, 1));
        let layer = comp.create_layer(Rect::new(0, 0, 2, 1), 0);
        comp.layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 0, "ab", Style::default());
        comp.set_visible(layer, false);
        assert_eq!(symbol(comp.composite(), 0, 0), " ");
        assert_eq!(comp.layer_at(0, 0), None);
    }

    #[test]
    fn test_layer_at_prefers_front() {
        let mut comp = Compositor::new(Rect::new(0, 0, 10, 10));
        let back = comp.create_layer(Rect::new(0, 0, 10, 10), 0);
        let front = comp.create_layer(Rect::new(2, 2, 3, 3), 5);
        assert_eq!(comp.layer_at(3, 3), Some(front));
        assert_eq!(comp.layer_at(8, 8), Some(back));

        comp.set_z_index(back, 10);
        assert_eq!(comp.layer_at(3, 3), Some(back));
    }

    #[test]
    fn test_offscreen_cells_clipped() {
        let mut comp = Compositor::new(Rect::new(0, 0, 3, 1));
        let layer = comp.create_layer(Rect::new(2, 0, 3, 1), 0);
        comp.layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 0, "xyz", Style::default());

        let mut target = Buffer::empty(Rect::new(0, 0, 3, 1));
        comp.render_into(&mut target);
        assert_eq!(symbol(&target, 2, 0), "x");
    }

    #[test]
    fn test_place_layer() {
        let mut comp = Compositor::new(Rect::new(0, 0, 20, 5));
        let layer = comp.create_layer(Rect::new(0, 0, 1, 1), 0);
        comp.place_layer(layer, Rect::new(4, 1, 6, 2));
        assert_eq!(comp.layer_bounds(layer), Some(Rect::new(4, 1, 6, 2)));
        assert_eq!(comp.layer_buffer_mut(layer).unwrap().area, Rect::new(0, 0, 6, 2));
    }
}
