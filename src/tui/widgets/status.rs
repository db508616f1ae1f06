//! One-line status bar showing the breadcrumb of the primary selection.

use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};
use unicode_width::UnicodeWidthChar;

/// Inverted one-line bar: two columns of lead-in, then the breadcrumb text
/// clipped to the remaining width.
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for StatusLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let scheme = colors();
        let style = Style::default().fg(scheme.status_fg).bg(scheme.status_bg);
        let y = area.y;

        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_style(style);
            }
        }

        let mut x = area.x as usize + 2;
        for ch in self.text.chars() {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            if x + width > area.right() as usize {
                break;
            }
            if let Some(cell) = buf.cell_mut((x as u16, y)) {
                cell.set_char(ch).set_style(style);
            }
            x += width;
        }
    }
}
