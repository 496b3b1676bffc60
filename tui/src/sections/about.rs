//! About: bio, expertise grid and the journey timeline.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::{grid_cell, grid_columns, Page, View};
use crate::theme;

const CARD_HEIGHT: u16 = 5;

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    let profile = view.profile;
    page.heading(&profile.headings.about);

    for paragraph in &profile.bio {
        page.paragraph(paragraph, theme::text());
        page.gap(1);
    }

    let cols = grid_columns(page.width(), 30);
    for (i, chunk) in profile.expertise.chunks(usize::from(cols)).enumerate() {
        if i > 0 {
            page.gap(1);
        }
        let y = page.y();
        for (col, item) in chunk.iter().enumerate() {
            let (x, w) = grid_cell(page.width(), cols, col as u16);
            let inner = page.card_at(x, y, w, CARD_HEIGHT, false);
            page.text_at(inner.x + 1, inner.y, &item.label, theme::label());
            let body = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 2);
            page.wrap_at(body, &item.description, theme::muted());
        }
        page.advance(CARD_HEIGHT);
    }

    if profile.timeline.is_empty() {
        return;
    }
    page.gap(1);
    page.subheading("Journey");
    for milestone in &profile.timeline {
        let y = page.y();
        let x = page.text_at(
            0,
            y,
            &milestone.year,
            Style::default()
                .fg(theme::ACCENT_LIGHT)
                .add_modifier(Modifier::BOLD),
        );
        page.text_at(x, y, "  │ ", Style::default().fg(theme::BORDER));
        page.text_at(x + 4, y, &milestone.event, theme::text());
        page.advance(1);
    }
}
