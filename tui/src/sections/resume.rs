//! Resume: highlight cards and the download panel.

use ratatui::layout::Rect;

use super::{grid_cell, grid_columns, Page, View};
use crate::hotspot::Hotspot;
use crate::theme;

const CARD_HEIGHT: u16 = 5;

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    let profile = view.profile;
    page.heading(&profile.headings.resume);

    let cols = grid_columns(page.width(), 30);
    for (r, chunk) in profile.highlights.chunks(usize::from(cols)).enumerate() {
        if r > 0 {
            page.gap(1);
        }
        let y = page.y();
        for (c, item) in chunk.iter().enumerate() {
            let (x, w) = grid_cell(page.width(), cols, c as u16);
            let inner = page.card_at(x, y, w, CARD_HEIGHT, false);
            page.text_at(inner.x + 1, inner.y, &item.title, theme::label());
            let body = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 2);
            page.wrap_at(body, &item.details, theme::muted());
        }
        page.advance(CARD_HEIGHT);
    }

    page.gap(1);
    let y = page.y();
    let height = 5;
    let inner = page.card_at(0, y, page.width(), height, false);
    page.text_at(inner.x + 1, inner.y, "Resume.pdf", theme::title());
    page.text_at(
        inner.x + 1,
        inner.y + 1,
        "The PDF preview opens in your browser.",
        theme::muted(),
    );
    page.button_at(
        inner.x + 1,
        inner.y + 2,
        "Download PDF",
        true,
        Hotspot::Link(profile.resume_url.clone()),
    );
    page.advance(height);
}
