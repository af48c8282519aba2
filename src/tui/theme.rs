// Semantic color theme for the TUI
//
// Two built-in palettes, selected by the `theme` config key. Views never
// hardcode colors; they pull semantic roles from here.

use ratatui::style::{Color, Modifier, Style};

/// Resolved color roles used by the views
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub border: Color,
    pub selection_bg: Color,
}

impl Theme {
    /// Look up a theme by config name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            foreground: Color::Gray,
            muted: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            border: Color::DarkGray,
            selection_bg: Color::Rgb(40, 60, 40),
        }
    }

    pub fn light() -> Self {
        Self {
            foreground: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            error: Color::Red,
            border: Color::Gray,
            selection_bg: Color::Rgb(220, 230, 255),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
