//! Toast notification component
//!
//! The TUI stand-in for the original's alert() notices: a small overlay
//! in the bottom-right corner that auto-dismisses after a few seconds.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a notice stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// An auto-dismissing notice
pub struct Toast {
    pub message: String,
    created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Whether the notice should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }

    /// Render in the bottom-right corner, on top of other content
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent());

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(theme.text())
            .block(block);

        // Clear first so the notice sits on top of the view beneath
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
