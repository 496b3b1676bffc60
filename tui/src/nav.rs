//! Section Navigation
//!
//! The page is split into sections, one shown at a time. The navigation bar
//! across the top lists them and highlights the active one.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::hotspot::{Hotspot, Hotspots};
use crate::theme;

/// A page section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Featured,
    Projects,
    Stats,
    Skills,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Featured,
        Section::Projects,
        Section::Stats,
        Section::Skills,
        Section::Resume,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Featured => "Featured",
            Self::Projects => "Projects",
            Self::Stats => "LeetCode",
            Self::Skills => "Skills",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Brand shown at the left of the bar
const BRAND: &str = "AP.";

/// Where each entry lands in a bar of `width` cells
///
/// Entries that don't fit are dropped from the right.
pub fn layout(area: Rect) -> Vec<(Rect, Section)> {
    let brand_width = BRAND.width() as u16 + 3;
    let mut x = area.x + brand_width;
    let right = area.x + area.width;
    let mut out = Vec::with_capacity(Section::ALL.len());

    for section in Section::ALL {
        let w = section.label().width() as u16 + 2;
        if x + w > right {
            break;
        }
        out.push((Rect::new(x, area.y, w, 1), section));
        x += w + 1;
    }
    out
}

/// Draw the navigation bar and register its entries as hotspots
pub fn render(buf: &mut Buffer, area: Rect, active: Section, hotspots: &mut Hotspots) {
    buf.set_style(area, Style::default().bg(theme::SURFACE));
    buf.set_string(
        area.x + 1,
        area.y,
        BRAND,
        Style::default()
            .fg(theme::ACCENT_LIGHT)
            .bg(theme::SURFACE)
            .add_modifier(Modifier::BOLD),
    );

    for (rect, section) in layout(area) {
        let style = if section == active {
            Style::default()
                .fg(theme::FOREGROUND)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::MUTED).bg(theme::SURFACE)
        };
        buf.set_string(rect.x, rect.y, format!(" {} ", section.label()), style);
        hotspots.push(rect, Hotspot::Nav(section));
    }
}
