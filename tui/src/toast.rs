//! Toast notifications stacked in the bottom-right corner.

use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            Self::Info => "→",
            Self::Success => "✓",
            Self::Error => "!",
        }
    }

    fn color(self) -> ratatui::style::Color {
        match self {
            Self::Info => theme::ACCENT,
            Self::Success => theme::SUCCESS_GREEN,
            Self::Error => theme::ERROR_RED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn width(&self) -> u16 {
        // " ! text "
        u16::try_from(self.text.width() + 5).unwrap_or(u16::MAX)
    }
}

/// Size of the stack, capped at `max_width`
pub fn stack_size(toasts: &[Toast], max_width: u16) -> (u16, u16) {
    let width = toasts.iter().map(Toast::width).max().unwrap_or(0).min(max_width);
    (width, u16::try_from(toasts.len()).unwrap_or(u16::MAX))
}

/// Draw the stack, one toast per row, right-aligned
pub fn render(toasts: &[Toast], buf: &mut Buffer) {
    buf.reset();
    let area = buf.area;
    for (row, toast) in toasts.iter().enumerate() {
        let Ok(y) = u16::try_from(row) else {
            break;
        };
        if y >= area.height {
            break;
        }
        let width = toast.width().min(area.width);
        let x = area.width - width;
        let bg = Style::default().bg(theme::SURFACE);
        buf.set_style(ratatui::layout::Rect::new(x, y, width, 1), bg);
        buf.set_string(
            x + 1,
            y,
            toast.kind.icon(),
            bg.fg(toast.kind.color()).add_modifier(Modifier::BOLD),
        );
        buf.set_stringn(
            x + 3,
            y,
            &toast.text,
            usize::from(width.saturating_sub(4)),
            bg.fg(theme::FOREGROUND),
        );
    }
}
