//! TextBlock Widget
//!
//! A borderless block of wrapped text. Paragraph breaks (`\n`) are kept;
//! each paragraph is wrapped to the render width with `textwrap`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use textwrap::wrap;

/// A borderless block of wrapped text
pub struct TextBlock<'a> {
    content: &'a str,
    style: Style,
}

impl<'a> TextBlock<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The wrapped lines at `width`
    pub fn lines(&self, width: u16) -> Vec<String> {
        let width = usize::from(width.max(1));
        self.content
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width)
                        .into_iter()
                        .map(|cow| cow.into_owned())
                        .collect()
                }
            })
            .collect()
    }

    /// Rows needed at `width`
    pub fn height(&self, width: u16) -> u16 {
        u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX)
    }
}

impl Widget for TextBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self
            .lines(area.width)
            .iter()
            .take(usize::from(area.height))
            .enumerate()
        {
            let y = area.y + i as u16;
            buf.set_stringn(area.x, y, line, usize::from(area.width), self.style);
        }
    }
}
