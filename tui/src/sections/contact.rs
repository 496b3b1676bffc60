//! Contact form.
//!
//! Fields are drawn as bordered boxes; the focused one gets an accent border
//! and a caret while editing. Results are announced by the app's toast.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use folio_core::Field;

use super::{Page, View};
use crate::hotspot::Hotspot;
use crate::theme;
use crate::widgets::TextBlock;

/// Visible rows of the message box
const MESSAGE_ROWS: u16 = 5;

pub(super) fn render(view: &View<'_>, page: &mut Page<'_>) {
    page.heading(&view.profile.headings.contact);

    let width = page.width();
    if width >= 60 {
        let half = (width - 2) / 2;
        let y = page.y();
        field(view, page, Field::Name, Rect::new(0, y, half, 4));
        field(view, page, Field::Email, Rect::new(half + 2, y, width - half - 2, 4));
        page.advance(4);
    } else {
        for f in [Field::Name, Field::Email] {
            let y = page.y();
            field(view, page, f, Rect::new(0, y, width, 4));
            page.advance(4);
        }
    }
    page.gap(1);
    let y = page.y();
    field(view, page, Field::Company, Rect::new(0, y, width, 4));
    page.advance(4);
    page.gap(1);
    let y = page.y();
    field(view, page, Field::Message, Rect::new(0, y, width, MESSAGE_ROWS + 3));
    page.advance(MESSAGE_ROWS + 3);
    page.gap(1);

    let sending = view.contact.status().is_sending();
    let y = page.y();
    let label = if sending { "Sending..." } else { "➤ Send Message" };
    let end = page.button_at(0, y, label, !sending, Hotspot::Submit);
    page.text_at(end + 2, y, "◷ Typically responds within 24 hours.", theme::muted());
    page.advance(1);

    let hint = if view.editing {
        "Tab/Shift-Tab switch field · Ctrl-S send · Esc stop typing"
    } else {
        "Enter or click a field to start typing"
    };
    let y = page.y();
    page.text_at(0, y, hint, Style::default().fg(theme::BORDER));
    page.advance(2);

    let y = page.y();
    let x = page.text_at(0, y, "Or reach out directly at ", theme::muted());
    let email = &view.profile.email;
    page.link_at(x, y, email, &format!("mailto:{email}"));
    page.advance(1);
}

/// Label row plus a three-row box (taller for the message)
fn field(view: &View<'_>, page: &mut Page<'_>, f: Field, area: Rect) {
    let form = view.contact;
    let focused = view.editing && form.focus() == f;

    let mut label = vec![Span::styled(f.label(), theme::muted())];
    if f.is_required() {
        label.push(Span::styled(" *", Style::default().fg(theme::ACCENT_LIGHT)));
    }
    page.line_at(area.x, area.y, &Line::from(label));

    let box_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    page.region(area.x, area.y, area.width, area.height, Hotspot::Field(f));
    let inner = page.card_at(box_area.x, box_area.y, box_area.width, box_area.height, focused);
    if focused {
        page.mark_focus(area.y, area.y + area.height);
    }
    let room = inner.width.saturating_sub(2);
    if room == 0 {
        return;
    }

    let value = form.value(f);
    if value.is_empty() && !focused {
        page.text_at(inner.x + 1, inner.y, f.placeholder(), Style::default().fg(theme::BORDER));
        return;
    }

    let text_style = theme::text();
    let caret_style = Style::default()
        .fg(theme::ACCENT)
        .add_modifier(Modifier::BOLD);

    if f == Field::Message {
        // Keep the tail of the message in view; leave a cell for the caret
        let mut lines = TextBlock::new(value).lines(room.saturating_sub(1).max(1));
        if value.ends_with('\n') {
            lines.push(String::new());
        }
        let start = lines.len().saturating_sub(usize::from(inner.height));
        let mut last = (inner.x + 1, inner.y);
        for (i, line) in lines[start..].iter().enumerate() {
            let y = inner.y + i as u16;
            let end = page.text_at(inner.x + 1, y, line, text_style);
            last = (end, y);
        }
        if focused && view.caret_on {
            page.text_at(last.0, last.1, "▏", caret_style);
        }
    } else {
        let shown = tail(value, room.saturating_sub(1));
        let end = page.text_at(inner.x + 1, inner.y, shown, text_style);
        if focused && view.caret_on {
            page.text_at(end, inner.y, "▏", caret_style);
        }
    }
}

/// Longest suffix of `text` that fits in `max` cells
fn tail(text: &str, max: u16) -> &str {
    let max = usize::from(max);
    if text.width() <= max {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (i, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}
