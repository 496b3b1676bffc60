//! Project grid with filter and sort controls.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::projects::{language_color, time_ago};
use folio_core::{CategoryFilter, Repo, SortOrder};

use super::{grid_cell, grid_columns, truncate, Page, View};
use crate::hotspot::Hotspot;
use crate::loader::RepoLoad;
use crate::theme;

const CARD_HEIGHT: u16 = 7;

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    page.heading(&view.profile.headings.projects);
    controls(view, page);
    page.gap(1);

    let repos = match view.repos {
        RepoLoad::Loading => {
            page.paragraph("Loading repositories...", theme::muted());
            return;
        }
        RepoLoad::Failed => {
            page.paragraph("Could not reach GitHub.", theme::muted());
            return;
        }
        RepoLoad::Loaded(repos) => repos,
    };

    let visible = view.projects.visible(repos);
    if visible.is_empty() {
        page.paragraph("No projects in this category.", theme::muted());
        return;
    }

    let cols = grid_columns(page.width(), 32);
    for (r, chunk) in visible.chunks(usize::from(cols)).enumerate() {
        if r > 0 {
            page.gap(1);
        }
        let y = page.y();
        for (c, repo) in chunk.iter().enumerate() {
            let index = r * usize::from(cols) + c;
            let selected = view.selected == Some(index);
            let (x, w) = grid_cell(page.width(), cols, c as u16);
            card(repo, Rect::new(x, y, w, CARD_HEIGHT), selected, view, page);
            if selected {
                page.mark_focus(y, y + CARD_HEIGHT);
            }
        }
        page.advance(CARD_HEIGHT);
    }

    if let Some(total) = view.projects.show_all_offer(repos) {
        page.gap(1);
        let label = format!("Show All ({total} projects)");
        let x = page.width().saturating_sub(label.width() as u16 + 2) / 2;
        let y = page.y();
        page.button_at(x, y, &label, false, Hotspot::ShowAll);
        page.advance(1);
    }
}

fn controls(view: &View<'_>, page: &mut Page<'_>) {
    let y = page.y();
    let mut x = 0;
    for (i, filter) in CategoryFilter::ALL.into_iter().enumerate() {
        let active = view.projects.filter() == filter;
        let label = format!("{} {}", i + 1, filter.label());
        x = page.button_at(x, y, &label, active, Hotspot::Filter(filter)) + 1;
    }

    let sorts = [SortOrder::Updated, SortOrder::Stars];
    let sort_width: u16 = sorts.iter().map(|s| s.label().width() as u16 + 3).sum();
    let mut x = page.width().saturating_sub(sort_width).max(x + 2);
    for sort in sorts {
        let style = if view.projects.sort() == sort {
            Style::default().fg(theme::FOREGROUND).bg(theme::BORDER)
        } else {
            theme::muted()
        };
        x = page.hotspot_at(x, y, &format!(" {} ", sort.label()), style, Hotspot::Sort(sort)) + 1;
    }
    page.advance(1);
    let y = page.y();
    page.text_at(
        0,
        y,
        "1-5 filter · s sort · a show all · j/k select · Enter open",
        Style::default().fg(theme::BORDER),
    );
    page.advance(1);
}

fn card(repo: &Repo, area: Rect, selected: bool, view: &View<'_>, page: &mut Page<'_>) {
    page.region(area.x, area.y, area.width, area.height, Hotspot::Link(repo.html_url.clone()));
    let inner = page.card_at(area.x, area.y, area.width, area.height, selected);
    let room = inner.width.saturating_sub(2);

    let mut counts = String::new();
    if repo.stargazers_count > 0 {
        counts.push_str(&format!("★ {}", repo.stargazers_count));
    }
    if repo.forks_count > 0 {
        if !counts.is_empty() {
            counts.push(' ');
        }
        counts.push_str(&format!("⑂ {}", repo.forks_count));
    }
    let counts_w = counts.width() as u16;
    let name_room = room.saturating_sub(counts_w + 1);
    let name_style = if selected {
        Style::default()
            .fg(theme::ACCENT_LIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::title()
    };
    page.text_at(inner.x + 1, inner.y, &truncate(&repo.name, name_room), name_style);
    if !counts.is_empty() && counts_w <= room {
        page.text_at(inner.x + 1 + room - counts_w, inner.y, &counts, theme::muted());
    }

    let body = Rect::new(inner.x + 1, inner.y + 1, room, 2);
    page.wrap_at(body, repo.description_or_fallback(), theme::muted());

    let row = inner.y + 4;
    if let Some(lang) = repo.language.as_deref() {
        let line = Line::from(vec![
            Span::styled("● ", Style::default().fg(theme::rgb(language_color(lang)))),
            Span::styled(lang, theme::muted()),
        ]);
        page.line_at(inner.x + 1, row, &line);
    }
    let ago = format!("◷ {}", time_ago(repo.pushed_at, view.now));
    let ago_w = ago.width() as u16;
    if ago_w < room {
        page.text_at(inner.x + 1 + room - ago_w, row, &ago, theme::muted());
    }
}
