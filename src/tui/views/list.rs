// List view - paginated character search (slide 0)
//
// Layout: filter bar, then the load state (placeholder, error message, or
// up to 10 cards), then the pagination line. The error message text is
// kept verbatim from the original UI.

use crate::api::models::Character;
use crate::tui::app::{App, FilterFocus, ListLoad, SEARCH_ERROR_MESSAGE};
use crate::util::truncate_display;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // filter bar
            Constraint::Min(0),    // results
            Constraint::Length(1), // pagination
        ])
        .split(area);

    render_filter_bar(f, chunks[0], app);
    render_results(f, chunks[1], app);
    render_pagination(f, chunks[2], app);
}

/// Filter bar pre-populated with the current draft values
fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let field = |label: &str, value: &str, focused: bool| -> Vec<Span<'static>> {
        let value = if value.is_empty() {
            "any".to_string()
        } else {
            value.to_string()
        };
        let mut spans = vec![Span::styled(format!("{}: ", label), theme.muted())];
        if focused {
            spans.push(Span::styled(format!("{}▏", value), theme.selected()));
        } else {
            spans.push(Span::styled(value, theme.text()));
        }
        spans
    };

    let mut spans = field("Name", &app.draft.name, app.focus == FilterFocus::Name);
    spans.push(Span::raw("   "));
    spans.extend(field("Status", app.draft.status.label(), false));
    spans.push(Span::raw("   "));
    spans.extend(field(
        "Species",
        &app.draft.species,
        app.focus == FilterFocus::Species,
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Search ", theme.accent()));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    match &app.list {
        ListLoad::Loading => {
            f.render_widget(
                Paragraph::new("Loading characters...").style(theme.muted()),
                area,
            );
        }
        ListLoad::Failed => {
            f.render_widget(
                Paragraph::new(SEARCH_ERROR_MESSAGE).style(theme.error()),
                area,
            );
        }
        ListLoad::Loaded(_) => {
            let cards = app.visible_cards();
            let items: Vec<ListItem> = cards
                .iter()
                .enumerate()
                .map(|(i, character)| {
                    let line = Line::from(card_line(character));
                    if i == app.list_selected {
                        ListItem::new(line).style(theme.selected())
                    } else {
                        ListItem::new(line).style(theme.text())
                    }
                })
                .collect();
            f.render_widget(List::new(items), area);
        }
    }
}

fn render_pagination(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    if app.can_prev_page() {
        spans.push(Span::styled("[← Prev] ", theme.accent()));
    }
    if app.can_next_page() {
        spans.push(Span::styled("[Next →] ", theme.accent()));
    }
    spans.push(Span::styled(page_indicator(app), theme.muted()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One card as a single row: name, status, species
fn card_line(character: &Character) -> String {
    format!(
        "{:<26} {:<8} {}",
        truncate_display(&character.name, 26),
        character.status.to_string(),
        character.species
    )
}

/// The "Page X of Y" indicator; Y is unknown until a result arrives
fn page_indicator(app: &App) -> String {
    match app.max_page() {
        Some(max) => format!("Page {} of {}", app.query.page, max),
        None => format!("Page {}", app.query.page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{
        CharacterPage, CharacterStatus, PageInfo, ResourceRef, StatusFilter,
    };
    use crate::favorites::FavoritesStore;
    use crate::logging::LogBuffer;
    use crate::pagination::max_user_page;
    use crate::tui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn character(id: u32, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            gender: "Male".to_string(),
            image: String::new(),
            origin: ResourceRef {
                name: "Earth".to_string(),
            },
            location: ResourceRef {
                name: "Earth".to_string(),
            },
            episode: vec![],
        }
    }

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::new(dir.path().join("favorites.json"));
        let app = App::new(store, Theme::default(), LogBuffer::new());
        (app, dir)
    }

    /// Render the view into a test buffer and flatten it to text
    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, f.area(), app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_failed_search_renders_error_and_no_cards() {
        let (mut app, _dir) = test_app();
        app.list = ListLoad::Failed;
        let text = render_to_text(&app);
        assert!(text.contains(SEARCH_ERROR_MESSAGE));
        assert!(!text.contains("Rick"));
    }

    #[test]
    fn test_loading_placeholder() {
        let (app, _dir) = test_app();
        let text = render_to_text(&app);
        assert!(text.contains("Loading characters..."));
    }

    #[test]
    fn test_loaded_page_renders_cards_and_indicator() {
        let (mut app, _dir) = test_app();
        app.list = ListLoad::Loaded(CharacterPage {
            info: PageInfo {
                count: 40,
                pages: 2,
                next: Some("page=2".to_string()),
                prev: None,
            },
            results: (1..=20).map(|i| character(i, &format!("Char {}", i))).collect(),
        });
        let text = render_to_text(&app);
        // Odd page shows the first ten cards only
        assert!(text.contains("Char 1 "));
        assert!(text.contains("Char 10"));
        assert!(!text.contains("Char 11"));
        assert!(text.contains("Page 1 of 4"));
        assert!(text.contains("Next"));
        assert!(!text.contains("Prev"));
    }

    #[test]
    fn test_no_next_on_last_user_page() {
        let (mut app, _dir) = test_app();
        app.query.page = max_user_page(2);
        app.list = ListLoad::Loaded(CharacterPage {
            info: PageInfo {
                count: 40,
                pages: 2,
                next: None,
                prev: Some("page=1".to_string()),
            },
            results: (21..=40).map(|i| character(i, &format!("Char {}", i))).collect(),
        });
        let text = render_to_text(&app);
        assert!(!text.contains("Next"));
        assert!(text.contains("Prev"));
        assert!(text.contains("Page 4 of 4"));
    }

    #[test]
    fn test_filter_bar_shows_draft_values() {
        let (mut app, _dir) = test_app();
        app.draft.name = "rick".to_string();
        app.draft.status = StatusFilter::Alive;
        let text = render_to_text(&app);
        assert!(text.contains("Name: rick"));
        assert!(text.contains("Status: Alive"));
        assert!(text.contains("Species: any"));
    }
}
