//! Layer - A single compositable layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::LayerId;

/// A single layer in the compositor
pub struct Layer {
    pub id: LayerId,
    /// Z-order (higher = in front)
    pub z_index: i32,
    /// Screen position and size
    pub bounds: Rect,
    pub visible: bool,
    /// Render buffer in layer-local coordinates (origin 0,0)
    pub buffer: Buffer,
}

impl Layer {
    pub fn new(id: LayerId, bounds: Rect, z_index: i32) -> Self {
        Self {
            id,
            z_index,
            bounds,
            visible: true,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
        }
    }

    /// Check if a screen point is within this layer's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x.saturating_add(self.bounds.width)
            && y >= self.bounds.y
            && y < self.bounds.y.saturating_add(self.bounds.height)
    }

    /// Reallocate the buffer for a new size (contents are dropped)
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.bounds.width = width;
        self.bounds.height = height;
        self.buffer = Buffer::empty(Rect::new(0, 0, width, height));
    }
}
