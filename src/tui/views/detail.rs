// Detail view - one character with its episode list (slide 1)
//
// With no character selected the slide shows a placeholder, exactly like
// the original before any "Details" click. Episodes appear only after the
// whole fetch batch has settled; while it is in flight a single loading
// line stands in.

use crate::tui::app::{App, EpisodeLoad};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let Some(character) = &app.detail else {
        f.render_widget(
            Paragraph::new("No character selected yet.").style(theme.muted()),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(character.name.clone(), theme.title())),
        Line::default(),
        field_line(app, "Status", &character.status.to_string()),
        field_line(app, "Species", &character.species),
        field_line(app, "Gender", &character.gender),
        field_line(app, "Origin", &character.origin.name),
        field_line(app, "Location", &character.location.name),
        field_line(app, "Image", &character.image),
        Line::default(),
        Line::from(Span::styled("Episodes:", theme.accent())),
    ];

    match &app.episodes {
        EpisodeLoad::Idle => {}
        EpisodeLoad::Loading => {
            lines.push(Line::from(Span::styled(
                "  Loading episode info...",
                theme.muted(),
            )));
        }
        EpisodeLoad::Loaded(episodes) => {
            if episodes.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  No episodes found.",
                    theme.muted(),
                )));
            }
            for episode in episodes {
                lines.push(Line::from(Span::styled(
                    format!("  {}", episode.display_line()),
                    theme.text(),
                )));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Character ", theme.accent()));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(app: &App, label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), app.theme.muted()),
        Span::styled(value.to_string(), app.theme.text()),
    ])
}
