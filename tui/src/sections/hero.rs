//! Hero: role line, the typed name, tagline, calls to action and the
//! terminal intro box.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{Page, View};
use crate::hotspot::Hotspot;
use crate::nav::Section;
use crate::theme;

const CARET: &str = "▌";

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    let profile = view.profile;
    page.gap(2);
    page.centered(&profile.role.to_uppercase(), theme::label());
    page.gap(1);

    // Anchor on the full text so the name grows rightwards without jitter
    let full = view.hero_text.width() as u16 + 1;
    let x = page.width().saturating_sub(full) / 2;
    let y = page.y();
    let name = Style::default()
        .fg(theme::FOREGROUND)
        .add_modifier(Modifier::BOLD);
    let end = page.text_at(x, y, &view.typing.text, name);
    if view.typing.mutating || view.caret_on {
        page.text_at(end, y, CARET, Style::default().fg(theme::ACCENT));
    }
    page.advance(1);
    page.gap(1);

    page.centered(&profile.tagline, Style::default().fg(theme::ACCENT_LIGHT));
    page.gap(1);
    page.centered_paragraph(&profile.summary, theme::muted());
    page.gap(1);

    actions(view, page);
    page.gap(2);
    terminal_box(view, page);
    page.gap(1);

    let hint = "←/→ sections · ↑/↓ scroll · click or Enter to open · q quit";
    page.centered(hint, Style::default().fg(theme::BORDER));
}

fn actions(view: &View<'_>, page: &mut Page<'_>) {
    let profile = view.profile;
    let buttons: [(&str, bool, Hotspot); 3] = [
        ("View Projects ↓", true, Hotspot::Nav(Section::Projects)),
        ("Download Resume", false, Hotspot::Link(profile.resume_url.clone())),
        ("GitHub", false, Hotspot::Link(profile.github_url())),
    ];
    let total: u16 = buttons
        .iter()
        .map(|(label, _, _)| label.width() as u16 + 2)
        .sum::<u16>()
        + 2 * (buttons.len() as u16 - 1);

    let y = page.y();
    let mut x = page.width().saturating_sub(total) / 2;
    for (label, primary, hotspot) in buttons {
        x = page.button_at(x, y, label, primary, hotspot) + 2;
    }
    page.advance(1);
}

fn terminal_box(view: &View<'_>, page: &mut Page<'_>) {
    let lines = &view.profile.terminal;
    if lines.is_empty() {
        return;
    }
    let width = page.width().min(64);
    let x = (page.width() - width) / 2;
    let height = 3 + lines.len() as u16 * 2;
    let y = page.y();
    let inner = page.card_at(x, y, width, height, false);

    let dots = Line::from(vec![
        Span::styled("● ", Style::default().fg(theme::ERROR_RED)),
        Span::styled("● ", Style::default().fg(theme::MEDIUM)),
        Span::styled("● ", Style::default().fg(theme::SUCCESS_GREEN)),
        Span::styled(" ~/portfolio", theme::muted()),
    ]);
    page.line_at(inner.x + 1, inner.y, &dots);

    let mut row = inner.y + 1;
    for line in lines {
        let prompt = Line::from(vec![
            Span::styled("$ ", Style::default().fg(theme::SUCCESS_GREEN)),
            Span::styled(line.command.as_str(), theme::text()),
        ]);
        page.line_at(inner.x + 1, row, &prompt);
        page.text_at(inner.x + 1, row + 1, &line.output, theme::muted());
        row += 2;
    }
    page.advance(height);
}
