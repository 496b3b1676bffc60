//! Page Sections
//!
//! Each section draws itself onto a tall off-screen page through [`Page`],
//! which tracks the write position and records clickable regions. The app
//! then scrolls a window of that page into view.

mod about;
mod contact;
mod featured;
mod hero;
mod projects;
mod resume;
mod skills;
mod stats;

use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Widget};
use unicode_width::UnicodeWidthStr;

use folio_core::profile::Heading;
use folio_core::{ContactForm, Profile, ProjectView, StatsLoad, TypingSnapshot};

use crate::hotspot::{Hotspot, Hotspots};
use crate::loader::RepoLoad;
use crate::nav::Section;
use crate::theme;
use crate::widgets::TextBlock;

/// Widest the page content gets, in cells
const MAX_CONTENT_WIDTH: u16 = 110;

/// Everything a section may draw from
pub struct View<'a> {
    pub profile: &'a Profile,
    /// Full hero text, for centring the typed prefix
    pub hero_text: &'a str,
    pub typing: &'a TypingSnapshot,
    pub caret_on: bool,
    pub repos: &'a RepoLoad,
    pub featured_order: &'a [String],
    pub projects: &'a ProjectView,
    /// Index into the visible project cards
    pub selected: Option<usize>,
    pub stats: &'a StatsLoad,
    pub contact: &'a ContactForm,
    /// Whether keystrokes go into the contact form
    pub editing: bool,
    pub now: DateTime<Utc>,
}

/// Draw one section; returns the rows it used
pub fn render(section: Section, view: &View<'_>, page: &mut Page<'_>) -> u16 {
    match section {
        Section::Home => hero::render(view, page),
        Section::About => about::render(view, page),
        Section::Featured => featured::render(view, page),
        Section::Projects => projects::render(view, page),
        Section::Stats => stats::render(view, page),
        Section::Skills => skills::render(view, page),
        Section::Resume => resume::render(view, page),
        Section::Contact => contact::render(view, page),
    }
    page.gap(1);
    footer(view.profile, view.now, page);
    page.y()
}

fn footer(profile: &Profile, now: DateTime<Utc>, page: &mut Page<'_>) {
    use chrono::Datelike;

    let y = page.y();
    let rule = "─".repeat(usize::from(page.width()));
    page.text_at(0, y, &rule, Style::default().fg(theme::BORDER));
    page.advance(1);

    let y = page.y();
    page.text_at(0, y, &profile.copyright(now.year()), theme::muted());
    let github = "GitHub";
    let leetcode = "LeetCode";
    let right = page.width();
    let lc_x = right.saturating_sub(leetcode.width() as u16);
    let gh_x = lc_x.saturating_sub(github.width() as u16 + 2);
    page.link_at(gh_x, y, github, &profile.github_url());
    page.link_at(lc_x, y, leetcode, &profile.leetcode_url());
    page.advance(1);
}

// ============================================================================
// Page Writer
// ============================================================================

/// Write position on the off-screen page
///
/// Coordinates passed to the `*_at` helpers are relative to the content
/// column; rows are absolute page rows.
pub struct Page<'a> {
    buf: &'a mut Buffer,
    hotspots: &'a mut Hotspots,
    left: u16,
    width: u16,
    y: u16,
    /// Rows of the element keyboard focus is on, if any
    focus_rows: Option<(u16, u16)>,
}

impl<'a> Page<'a> {
    pub fn new(buf: &'a mut Buffer, hotspots: &'a mut Hotspots) -> Self {
        let total = buf.area.width;
        let width = total.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(1);
        let left = total.saturating_sub(width) / 2;
        Self {
            buf,
            hotspots,
            left,
            width,
            y: 1,
            focus_rows: None,
        }
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn focus_rows(&self) -> Option<(u16, u16)> {
        self.focus_rows
    }

    /// Remember where the keyboard focus is so the view can follow it
    pub fn mark_focus(&mut self, top: u16, bottom: u16) {
        self.focus_rows = Some((top, bottom));
    }

    pub fn advance(&mut self, rows: u16) {
        self.y = self.y.saturating_add(rows);
    }

    pub fn gap(&mut self, rows: u16) {
        self.advance(rows);
    }

    fn max_row(&self) -> u16 {
        self.buf.area.height
    }

    /// Page rectangle for a content-relative rectangle
    pub fn abs(&self, x: u16, y: u16, w: u16, h: u16) -> Rect {
        let x0 = self.left.saturating_add(x);
        let right = (self.left + self.width).min(x0.saturating_add(w));
        let bottom = self.max_row().min(y.saturating_add(h));
        Rect::new(x0, y, right.saturating_sub(x0), bottom.saturating_sub(y))
    }

    /// Write text at a content-relative column; returns the column after it
    pub fn text_at(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        if y >= self.max_row() || x >= self.width {
            return x;
        }
        let room = usize::from(self.width - x);
        let (end, _) = self
            .buf
            .set_stringn(self.left + x, y, text, room, style);
        end - self.left
    }

    /// Write a styled line; returns the column after it
    pub fn line_at(&mut self, x: u16, y: u16, line: &Line<'_>) -> u16 {
        if y >= self.max_row() || x >= self.width {
            return x;
        }
        let (end, _) = self.buf.set_line(self.left + x, y, line, self.width - x);
        end - self.left
    }

    /// Clickable text that activates `hotspot`
    pub fn hotspot_at(&mut self, x: u16, y: u16, text: &str, style: Style, hotspot: Hotspot) -> u16 {
        let end = self.text_at(x, y, text, style);
        let rect = self.abs(x, y, end - x, 1);
        self.hotspots.push(rect, hotspot);
        end
    }

    pub fn link_at(&mut self, x: u16, y: u16, text: &str, url: &str) -> u16 {
        self.hotspot_at(x, y, text, theme::link(), Hotspot::Link(url.to_string()))
    }

    /// `[ label ]` style button
    pub fn button_at(&mut self, x: u16, y: u16, label: &str, active: bool, hotspot: Hotspot) -> u16 {
        self.hotspot_at(x, y, &format!(" {label} "), theme::button(active), hotspot)
    }

    /// Register a region without drawing anything
    pub fn region(&mut self, x: u16, y: u16, w: u16, h: u16, hotspot: Hotspot) {
        let rect = self.abs(x, y, w, h);
        self.hotspots.push(rect, hotspot);
    }

    /// Bordered card; returns the inner rectangle in content coordinates
    pub fn card_at(&mut self, x: u16, y: u16, w: u16, h: u16, highlight: bool) -> Rect {
        let rect = self.abs(x, y, w, h);
        if rect.width < 2 || rect.height < 2 {
            return Rect::new(x, y, 0, 0);
        }
        let border = if highlight { theme::ACCENT } else { theme::BORDER };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme::SURFACE))
            .render(rect, self.buf);
        Rect::new(x + 1, y + 1, rect.width - 2, rect.height - 2)
    }

    /// Wrapped text inside a content-relative rectangle; returns rows used
    pub fn wrap_at(&mut self, area: Rect, text: &str, style: Style) -> u16 {
        let block = TextBlock::new(text).style(style);
        let used = block.height(area.width).min(area.height);
        let rect = self.abs(area.x, area.y, area.width, used);
        block.render(rect, self.buf);
        used
    }

    /// Wrapped paragraph at the current row, full content width
    pub fn paragraph(&mut self, text: &str, style: Style) {
        let rows = TextBlock::new(text).height(self.width);
        let area = Rect::new(0, self.y, self.width, rows);
        let used = self.wrap_at(area, text, style);
        self.advance(used);
    }

    /// Paragraph with every wrapped line centred
    pub fn centered_paragraph(&mut self, text: &str, style: Style) {
        let width = self.width.min(80);
        for line in TextBlock::new(text).lines(width) {
            self.centered(&line, style);
        }
    }

    /// A single centred line at the current row
    pub fn centered(&mut self, text: &str, style: Style) {
        let w = (text.width() as u16).min(self.width);
        let x = (self.width - w) / 2;
        let y = self.y;
        self.text_at(x, y, text, style);
        self.advance(1);
    }

    /// Section label, title and blurb
    pub fn heading(&mut self, heading: &Heading) {
        self.gap(1);
        let y = self.y;
        let label = heading.label.to_uppercase();
        self.text_at(0, y, &label, theme::label());
        self.advance(1);
        let y = self.y;
        self.text_at(
            0,
            y,
            &heading.title,
            theme::title().add_modifier(Modifier::UNDERLINED),
        );
        self.advance(1);
        if !heading.description.is_empty() {
            self.paragraph(&heading.description, theme::muted());
        }
        self.gap(1);
    }

    /// Small bold subheading
    pub fn subheading(&mut self, text: &str) {
        let y = self.y;
        self.text_at(0, y, text, theme::title());
        self.advance(1);
    }
}

/// Columns for a card grid at `width`
pub fn grid_columns(width: u16, min_card: u16) -> u16 {
    ((width + 2) / (min_card + 2)).clamp(1, 3)
}

/// X offset and width of column `col` in a `cols`-wide grid
pub fn grid_cell(width: u16, cols: u16, col: u16) -> (u16, u16) {
    let gap = 2;
    let w = (width.saturating_sub(gap * (cols - 1))) / cols;
    (col * (w + gap), w)
}

/// Cut `text` to `max` cells, with an ellipsis when shortened
pub fn truncate(text: &str, max: u16) -> String {
    let max = usize::from(max);
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_page_centres_content_column() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 200, 20));
        let mut spots = Hotspots::default();
        let page = Page::new(&mut buf, &mut spots);
        assert_eq!(page.width(), MAX_CONTENT_WIDTH);
        assert_eq!(page.abs(0, 0, 1, 1).x, 45);
    }

    #[test]
    fn test_heading_and_paragraph_advance() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 24, 20));
        let mut spots = Hotspots::default();
        let mut page = Page::new(&mut buf, &mut spots);
        page.heading(&Heading {
            label: "About".into(),
            title: "Hi".into(),
            description: "one two three four five six".into(),
        });
        let y = page.y();
        // blank, label, title, two wrapped lines, blank
        assert_eq!(y, 1 + 1 + 1 + 1 + 2 + 1);
        assert!(row(&buf, 2).contains("ABOUT"));
    }

    #[test]
    fn test_buttons_register_hotspots() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 5));
        let mut spots = Hotspots::default();
        let mut page = Page::new(&mut buf, &mut spots);
        let end = page.button_at(0, 1, "Go", true, Hotspot::ShowAll);
        assert_eq!(end, 4);
        assert_eq!(spots.at(3, 1), Some(&Hotspot::ShowAll));
        assert_eq!(spots.at(6, 1), None);
    }

    #[test]
    fn test_grid_and_truncate() {
        assert_eq!(grid_columns(100, 30), 3);
        assert_eq!(grid_columns(60, 30), 1);
        assert_eq!(grid_columns(70, 30), 2);
        assert_eq!(grid_cell(62, 2, 1), (32, 30));
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
