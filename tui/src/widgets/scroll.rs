//! Scroll View
//!
//! Sections draw onto a tall off-screen page; the scroll view copies the
//! visible window of that page into the content layer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Rows in the off-screen page
pub const PAGE_ROWS: u16 = 600;

/// Scroll position of one page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled past the top
    pub offset: u16,
    /// Rows of content on the page
    pub content_height: u16,
    /// Rows visible at once
    pub viewport: u16,
}

impl ScrollState {
    /// Scroll by delta (positive = down), clamped to the content
    pub fn scroll(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.offset = u16::try_from(next).unwrap_or(0);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport)
    }

    /// Record new measurements and re-clamp
    pub fn update(&mut self, content_height: u16, viewport: u16) {
        self.content_height = content_height;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll the least amount that brings rows `top..bottom` into view
    pub fn reveal(&mut self, top: u16, bottom: u16) {
        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset.saturating_add(self.viewport) {
            self.offset = bottom.saturating_sub(self.viewport);
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn has_more_below(&self) -> bool {
        self.offset < self.max_offset()
    }
}

/// Copy rows `offset..offset + target.height` of `page` into `target`
pub fn blit_window(page: &Buffer, offset: u16, target: &mut Buffer) {
    let area = target.area;
    for y in 0..area.height {
        let src_y = offset.saturating_add(y);
        if src_y >= page.area.height {
            break;
        }
        for x in 0..area.width.min(page.area.width) {
            if let (Some(src), Some(dst)) = (
                page.cell((x, src_y)),
                target.cell_mut((area.x + x, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Style;

    #[test]
    fn test_scroll_clamps() {
        let mut state = ScrollState::default();
        state.update(50, 20);
        state.scroll(100);
        assert_eq!(state.offset, 30);
        state.scroll(-5);
        assert_eq!(state.offset, 25);
        state.scroll(-100);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_update_reclamps_on_shrink() {
        let mut state = ScrollState::default();
        state.update(100, 10);
        state.scroll(80);
        state.update(30, 10);
        assert_eq!(state.offset, 20);
    }

    #[test]
    fn test_reveal() {
        let mut state = ScrollState::default();
        state.update(100, 10);
        state.reveal(25, 30);
        assert_eq!(state.offset, 20);
        state.reveal(5, 8);
        assert_eq!(state.offset, 5);
        assert!(state.has_more_below());
    }

    #[test]
    fn test_blit_window() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 10));
        page.set_string(0, 3, "abc", Style::default());
        page.set_string(0, 6, "z", Style::default());

        let mut target = Buffer::empty(Rect::new(0, 0, 4, 2));
        blit_window(&page, 3, &mut target);
        assert_eq!(target.cell((0, 0)).map(|c| c.symbol()), Some("a"));
    }
}
