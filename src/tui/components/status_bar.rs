// Status bar - one line at the bottom of every view
//
// Shows the current slide, favorites count, key hints, and the most
// recent captured warning or error (logs can't go to stdout while the
// alternate screen is active).

use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let hints = match app.view {
        View::List => "Enter details  f fav  / name  e species  s status  ←/→ page",
        View::Detail => "f fav  Tab next slide",
        View::Favorites => "Enter details  d remove",
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", app.view.name()), theme.title()),
        Span::styled(format!("♥{} ", app.favorites.len()), theme.accent()),
        Span::styled(hints, theme.muted()),
    ];

    if let Some(problem) = app.log_buffer.latest_problem() {
        spans.push(Span::styled(
            format!("  [{}] {}", problem.level, problem.message),
            theme.error(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
