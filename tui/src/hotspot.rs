//! Interactive Regions
//!
//! Rendering records every clickable rectangle along with what it does.
//! Mouse clicks and cursor hover look positions up here, so hit-testing always
//! matches the frame the user is looking at.

use ratatui::layout::Rect;

use folio_core::{CategoryFilter, Field, SortOrder};

use crate::nav::Section;

/// What activating a region does
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hotspot {
    /// Switch to a section
    Nav(Section),
    /// External URL
    Link(String),
    /// Project category filter
    Filter(CategoryFilter),
    /// Project sort order
    Sort(SortOrder),
    /// Lift the project page limit
    ShowAll,
    /// Focus a contact form field
    Field(Field),
    /// Send the contact form
    Submit,
}

/// Regions recorded during a render, last one wins on overlap
#[derive(Clone, Debug, Default)]
pub struct Hotspots {
    spots: Vec<(Rect, Hotspot)>,
}

impl Hotspots {
    pub fn clear(&mut self) {
        self.spots.clear();
    }

    pub fn push(&mut self, rect: Rect, hotspot: Hotspot) {
        if rect.width > 0 && rect.height > 0 {
            self.spots.push((rect, hotspot));
        }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Rect, Hotspot)> {
        self.spots.iter()
    }

    /// The region under a position
    pub fn at(&self, x: u16, y: u16) -> Option<&Hotspot> {
        self.spots
            .iter()
            .rev()
            .find(|(r, _)| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
            .map(|(_, h)| h)
    }

    /// Map page regions onto the screen
    ///
    /// Rows `offset..offset + viewport.height` of the page are visible at
    /// `viewport`; anything outside is dropped and partial regions clipped.
    pub fn project_into(&self, offset: u16, viewport: Rect, out: &mut Hotspots) {
        let top = offset;
        let bottom = offset.saturating_add(viewport.height);
        for (rect, hotspot) in &self.spots {
            let y0 = rect.y.max(top);
            let y1 = rect.bottom().min(bottom);
            if y0 >= y1 || rect.x >= viewport.width {
                continue;
            }
            let width = rect.width.min(viewport.width - rect.x);
            let screen = Rect::new(
                viewport.x + rect.x,
                viewport.y + (y0 - top),
                width,
                y1 - y0,
            );
            out.push(screen, hotspot.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_prefers_latest() {
        let mut spots = Hotspots::default();
        spots.push(Rect::new(0, 0, 10, 2), Hotspot::ShowAll);
        spots.push(Rect::new(2, 1, 3, 1), Hotspot::Submit);

        assert_eq!(spots.at(3, 1), Some(&Hotspot::Submit));
        assert_eq!(spots.at(0, 0), Some(&Hotspot::ShowAll));
        assert_eq!(spots.at(10, 0), None);
    }

    #[test]
    fn test_empty_rects_ignored() {
        let mut spots = Hotspots::default();
        spots.push(Rect::new(0, 0, 0, 1), Hotspot::ShowAll);
        assert!(spots.is_empty());
    }

    #[test]
    fn test_project_into_viewport() {
        let mut page = Hotspots::default();
        page.push(Rect::new(2, 5, 4, 1), Hotspot::Submit);
        page.push(Rect::new(2, 40, 4, 3), Hotspot::ShowAll);

        let viewport = Rect::new(0, 1, 80, 20);
        let mut screen = Hotspots::default();
        page.project_into(30, viewport, &mut screen);

        // Row 5 is scrolled off, rows 40..43 land at 11..14
        assert_eq!(screen.len(), 1);
        assert_eq!(screen.at(3, 11), Some(&Hotspot::ShowAll));
        assert_eq!(screen.at(3, 13), Some(&Hotspot::ShowAll));
        assert_eq!(screen.at(3, 14), None);
    }
}
