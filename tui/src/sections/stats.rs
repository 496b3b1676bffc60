//! LeetCode statistics: headline cards, difficulty bars and the submission
//! heatmap.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::stats::HEATMAP_WEEKS;
use folio_core::{CodingStats, Difficulty};

use super::{grid_cell, Page, View};
use crate::theme;

const CARD_HEIGHT: u16 = 4;

/// Weekday labels down the heatmap's left edge (Sunday first)
const DAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    page.heading(&view.profile.headings.stats);

    if view.stats.is_loading() {
        page.paragraph("Loading stats...", theme::muted());
        return;
    }
    let Some(stats) = view.stats.stats() else {
        page.paragraph("Unable to load LeetCode stats.", theme::muted());
        return;
    };

    cards(stats, page);
    page.gap(1);
    difficulty(stats, page);

    if stats.has_calendar() {
        page.gap(1);
        heatmap(stats, view, page);
    }

    page.gap(1);
    let label = "View Full Profile on LeetCode →";
    let x = page.width().saturating_sub(label.width() as u16) / 2;
    let y = page.y();
    page.link_at(x, y, label, &stats.profile_url());
    page.advance(1);
}

fn cards(stats: &CodingStats, page: &mut Page<'_>) {
    let solved = stats.total_solved.to_string();
    let contributions = stats.contribution_points.to_string();
    let ranking = stats.ranking_label();
    let acceptance = stats.acceptance_label();
    let items: [(&str, &str, Color); 4] = [
        ("Problems Solved", &solved, theme::ACCENT_LIGHT),
        ("Global Ranking", &ranking, theme::MEDIUM),
        ("Acceptance Rate", &acceptance, theme::SUCCESS_GREEN),
        ("Contributions", &contributions, theme::PURPLE),
    ];

    let cols: u16 = if page.width() >= 72 { 4 } else { 2 };
    for (r, row) in items.chunks(usize::from(cols)).enumerate() {
        if r > 0 {
            page.gap(1);
        }
        let y = page.y();
        for (c, (label, value, color)) in row.iter().enumerate() {
            let (x, w) = grid_cell(page.width(), cols, c as u16);
            let inner = page.card_at(x, y, w, CARD_HEIGHT, false);
            page.text_at(
                inner.x + 1,
                inner.y,
                value,
                Style::default()
                    .fg(*color)
                    .add_modifier(Modifier::BOLD),
            );
            page.text_at(inner.x + 1, inner.y + 1, label, theme::muted());
        }
        page.advance(CARD_HEIGHT);
    }
}

fn difficulty(stats: &CodingStats, page: &mut Page<'_>) {
    page.subheading("Difficulty Breakdown");
    page.gap(1);

    let label_w = 8;
    let count_w = 12;
    let bar_w = page.width().saturating_sub(label_w + count_w + 2).min(60);

    for d in Difficulty::ALL {
        let color = match d {
            Difficulty::Easy => theme::EASY,
            Difficulty::Medium => theme::MEDIUM,
            Difficulty::Hard => theme::HARD,
        };
        let filled = (stats.progress(d) * f64::from(bar_w)).round() as u16;
        let filled = filled.min(bar_w);
        let line = Line::from(vec![
            Span::styled(
                format!("{:<width$}", d.label(), width = usize::from(label_w)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█".repeat(usize::from(filled)), Style::default().fg(color)),
            Span::styled(
                "░".repeat(usize::from(bar_w - filled)),
                Style::default().fg(theme::BORDER),
            ),
            Span::styled(
                format!("  {}/{}", stats.solved(d), stats.total(d)),
                theme::muted(),
            ),
        ]);
        let y = page.y();
        page.line_at(0, y, &line);
        page.advance(1);
    }
}

fn heatmap(stats: &CodingStats, view: &View<'_>, page: &mut Page<'_>) {
    page.subheading("Recent Activity");
    page.gap(1);

    let columns = stats.heatmap(view.now.date_naive());
    let label_w: u16 = 4;
    // Two cells per week; drop the oldest weeks if the page is narrow
    let fit = usize::from(page.width().saturating_sub(label_w) / 2);
    let skip = columns.len().saturating_sub(fit.min(HEATMAP_WEEKS as usize + 1));
    let top = page.y();

    for (row, label) in DAY_LABELS.iter().enumerate() {
        let y = top + row as u16;
        page.text_at(0, y, label, theme::muted());
        for (i, week) in columns.iter().skip(skip).enumerate() {
            let Some(day) = week.get(row) else {
                continue;
            };
            let color = theme::HEAT[usize::from(day.level())];
            page.text_at(label_w + i as u16 * 2, y, "■", Style::default().fg(color));
        }
    }
    page.advance(DAY_LABELS.len() as u16);
    page.gap(1);

    let y = page.y();
    let mut x = page.text_at(label_w, y, "Less ", theme::muted());
    for color in theme::HEAT {
        x = page.text_at(x, y, "■", Style::default().fg(color));
    }
    page.text_at(x, y, " More", theme::muted());
    page.advance(1);
}
