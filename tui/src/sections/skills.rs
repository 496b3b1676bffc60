//! Skills: one card per category with the skills laid out as chips.

use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use super::{grid_cell, grid_columns, Page, View};
use crate::theme;

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    let profile = view.profile;
    page.heading(&profile.headings.skills);

    let cols = grid_columns(page.width(), 40).min(2);
    for (r, chunk) in profile.skills.chunks(usize::from(cols)).enumerate() {
        if r > 0 {
            page.gap(1);
        }
        let y = page.y();
        let mut tallest = 0;
        for (c, category) in chunk.iter().enumerate() {
            let (_, w) = grid_cell(page.width(), cols, c as u16);
            let rows = chip_rows(&category.skills, w.saturating_sub(4));
            tallest = tallest.max(rows.len() as u16);
        }
        // Title, blank, chips, plus borders
        let height = tallest + 4;

        for (c, category) in chunk.iter().enumerate() {
            let (x, w) = grid_cell(page.width(), cols, c as u16);
            let inner = page.card_at(x, y, w, height, false);
            page.text_at(inner.x + 1, inner.y, &category.title, theme::label());
            for (i, row) in chip_rows(&category.skills, inner.width.saturating_sub(2))
                .into_iter()
                .enumerate()
            {
                let row_y = inner.y + 2 + i as u16;
                let mut cx = inner.x + 1;
                for skill in row {
                    cx = page.text_at(
                        cx,
                        row_y,
                        &format!(" {skill} "),
                        Style::default().fg(theme::FOREGROUND).bg(theme::BORDER),
                    ) + 1;
                }
            }
        }
        page.advance(height);
    }
}

/// Greedy flow of chips into rows of at most `width` cells
fn chip_rows(skills: &[String], width: u16) -> Vec<Vec<&str>> {
    let width = usize::from(width.max(1));
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut used = 0;

    for skill in skills {
        let w = skill.width() + 2;
        let needed = if current.is_empty() { w } else { w + 1 };
        if !current.is_empty() && used + needed > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used += if current.is_empty() { w } else { w + 1 };
        current.push(skill);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
