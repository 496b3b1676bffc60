//! Custom Cursor
//!
//! A ring drawn around the mouse position on its own top layer. It stays
//! hidden until the mouse first moves, widens over anything clickable and
//! squares off its corners while a button is held.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme;

/// Mouse cursor state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: Option<(u16, u16)>,
    visible: bool,
    hovering: bool,
    pressed: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the mouse; the first move reveals the cursor
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.pos = Some((x, y));
        self.visible = true;
    }

    pub fn position(&self) -> Option<(u16, u16)> {
        self.pos
    }

    /// The pointer left the window
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The pointer came back; only shown again once it has a position
    pub fn show(&mut self) {
        self.visible = self.pos.is_some();
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.pos.is_some()
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Ring size in cells
    fn size(&self) -> (u16, u16) {
        if self.hovering {
            (5, 3)
        } else {
            (3, 3)
        }
    }

    /// Screen rectangle the ring occupies, clipped to `screen`
    pub fn footprint(&self, screen: Rect) -> Option<Rect> {
        if !self.is_visible() {
            return None;
        }
        let (x, y) = self.pos?;
        let (w, h) = self.size();
        let left = x.saturating_sub(w / 2).max(screen.x);
        let top = y.saturating_sub(h / 2).max(screen.y);
        let right = (x + w - w / 2).min(screen.right());
        let bottom = (y + h - h / 2).min(screen.bottom());
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Draw the ring into a layer buffer placed at `footprint`
    ///
    /// Only the ring corners and the centre dot are drawn; the rest stays
    /// blank so the page shows through.
    pub fn render(&self, buf: &mut Buffer, footprint: Rect) {
        buf.reset();
        let Some((cx, cy)) = self.pos else {
            return;
        };
        let (w, h) = self.size();
        let left = i32::from(cx) - i32::from(w / 2);
        let top = i32::from(cy) - i32::from(h / 2);
        let right = left + i32::from(w) - 1;
        let bottom = top + i32::from(h) - 1;

        let (tl, tr, bl, br) = if self.pressed {
            ("┌", "┐", "└", "┘")
        } else {
            ("╭", "╮", "╰", "╯")
        };
        let ring = Style::default().fg(if self.hovering {
            theme::ACCENT_LIGHT
        } else {
            theme::ACCENT
        });
        let dot = Style::default()
            .fg(theme::FOREGROUND)
            .add_modifier(Modifier::BOLD);

        let marks = [
            (left, top, tl, ring),
            (right, top, tr, ring),
            (left, bottom, bl, ring),
            (right, bottom, br, ring),
            (i32::from(cx), i32::from(cy), "•", dot),
        ];
        for (x, y, symbol, style) in marks {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if x < footprint.x || y < footprint.y || x >= footprint.right() || y >= footprint.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x - footprint.x, y - footprint.y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCREEN: Rect = Rect::new(0, 0, 80, 24);

    fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
        buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default()
    }

    #[test]
    fn test_hidden_until_first_move() {
        let mut cursor = Cursor::new();
        assert!(!cursor.is_visible());
        assert_eq!(cursor.footprint(SCREEN), None);

        cursor.show();
        assert!(!cursor.is_visible());

        cursor.move_to(10, 10);
        assert!(cursor.is_visible());
        assert_eq!(cursor.footprint(SCREEN), Some(Rect::new(9, 9, 3, 3)));

        cursor.hide();
        assert_eq!(cursor.footprint(SCREEN), None);
        cursor.show();
        assert!(cursor.is_visible());
    }

    #[test]
    fn test_hover_widens() {
        let mut cursor = Cursor::new();
        cursor.move_to(10, 10);
        cursor.set_hovering(true);
        assert_eq!(cursor.footprint(SCREEN), Some(Rect::new(8, 9, 5, 3)));
    }

    #[test]
    fn test_footprint_clipped_at_edge() {
        let mut cursor = Cursor::new();
        cursor.move_to(0, 0);
        assert_eq!(cursor.footprint(SCREEN), Some(Rect::new(0, 0, 2, 2)));
    }

    #[test]
    fn test_render_ring_and_press() {
        let mut cursor = Cursor::new();
        cursor.move_to(10, 10);
        let fp = cursor.footprint(SCREEN).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, fp.width, fp.height));

        cursor.render(&mut buf, fp);
        assert_eq!(symbol(&buf, 0, 0), "╭");
        assert_eq!(symbol(&buf, 2, 2), "╯");
        assert_eq!(symbol(&buf, 1, 1), "•");
        assert_eq!(symbol(&buf, 1, 0), " ");

        cursor.set_pressed(true);
        cursor.render(&mut buf, fp);
        assert_eq!(symbol(&buf, 0, 0), "┌");
    }
}
