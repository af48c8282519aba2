// View rendering - draw dispatch for the three slides
//
// Each slide has its own render function over `&App`; the dispatcher adds
// the shared chrome (slide tabs on top, status bar below, toast overlay).
// Render functions never mutate state.

pub mod detail;
pub mod favorites;
pub mod list;

use super::app::{App, View};
use super::components::status_bar;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one full frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // slide tabs
            Constraint::Min(0),    // slide content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    render_slide_tabs(f, chunks[0], app);

    match app.view {
        View::List => list::render(f, chunks[1], app),
        View::Detail => detail::render(f, chunks[1], app),
        View::Favorites => favorites::render(f, chunks[1], app),
    }

    status_bar::render(f, chunks[2], app);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// The carousel affordance: three slide names, current one highlighted
fn render_slide_tabs(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    for (i, view) in [View::List, View::Detail, View::Favorites]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" │ ", theme.muted()));
        }
        let label = format!("{} {}", i + 1, view.name());
        if view == app.view {
            spans.push(Span::styled(label, theme.title()));
        } else {
            spans.push(Span::styled(label, theme.muted()));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
