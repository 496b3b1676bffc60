//! Featured projects, in the curated order, one wide card each.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::projects::{featured, featured_description, featured_tags, language_color};
use folio_core::Repo;

use super::{Page, View};
use crate::hotspot::Hotspot;
use crate::loader::RepoLoad;
use crate::theme;

const CARD_HEIGHT: u16 = 7;

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    page.heading(&view.profile.headings.featured);

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

    let picks = featured(repos, view.featured_order);
    if picks.is_empty() {
        page.paragraph("No featured projects to show.", theme::muted());
        return;
    }

    for (i, repo) in picks.into_iter().enumerate() {
        if i > 0 {
            page.gap(1);
        }
        card(repo, page);
    }
}

fn card(repo: &Repo, page: &mut Page<'_>) {
    let y = page.y();
    let width = page.width();
    // Whole card opens the repository; the buttons below take precedence
    page.region(0, y, width, CARD_HEIGHT, Hotspot::Link(repo.html_url.clone()));
    let inner = page.card_at(0, y, width, CARD_HEIGHT, false);

    let mut title = vec![Span::styled(
        repo.name.as_str(),
        Style::default()
            .fg(theme::FOREGROUND)
            .add_modifier(Modifier::BOLD),
    )];
    if repo.stargazers_count > 0 {
        title.push(Span::styled(
            format!("  ★ {}", repo.stargazers_count),
            Style::default().fg(theme::MEDIUM),
        ));
    }
    page.line_at(inner.x + 1, inner.y, &Line::from(title));

    let body = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 2);
    page.wrap_at(body, featured_description(repo), theme::muted());

    let mut meta = Vec::new();
    if let Some(lang) = repo.language.as_deref() {
        meta.push(Span::styled("● ", Style::default().fg(theme::rgb(language_color(lang)))));
        meta.push(Span::styled(format!("{lang}   "), theme::muted()));
    }
    for tag in featured_tags(&repo.name) {
        meta.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(theme::ACCENT_LIGHT).bg(theme::BACKGROUND),
        ));
        meta.push(Span::raw(" "));
    }
    page.line_at(inner.x + 1, inner.y + 3, &Line::from(meta));

    let row = inner.y + 4;
    let x = page.button_at(inner.x + 1, row, "Code", false, Hotspot::Link(repo.html_url.clone()));
    if let Some(demo) = repo.demo_url() {
        page.button_at(x + 1, row, "Demo", true, Hotspot::Link(demo.to_string()));
    }

    page.advance(CARD_HEIGHT);
}
