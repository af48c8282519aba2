// Input handling - key events mapped to Actions
//
// This layer only translates; it never mutates state. The mapping depends
// on the app's current mode (filter edit vs. navigation) and view, which
// is why it takes the state by reference, but the function stays pure so
// keybindings can be tested as plain data.

use super::app::{Action, App, FilterFocus, View};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal key event into a user action, if it means one
pub fn map_key(app: &App, event: KeyEvent) -> Option<Action> {
    // Crossterm on some platforms reports Release/Repeat too
    if event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl-C quits from anywhere, edit mode included
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.focus != FilterFocus::None {
        return map_edit_key(event.code);
    }
    map_normal_key(app, event.code)
}

/// Keys while a filter field is being edited
fn map_edit_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter => Some(Action::ApplySearch),
        KeyCode::Esc => Some(Action::CancelEdit),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

/// Keys in navigation mode
fn map_normal_key(app: &App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextSlide),
        KeyCode::BackTab => Some(Action::PrevSlide),
        KeyCode::Char('1') => Some(Action::SlideTo(View::List)),
        KeyCode::Char('2') => Some(Action::SlideTo(View::Detail)),
        KeyCode::Char('3') => Some(Action::SlideTo(View::Favorites)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectDown),
        KeyCode::Right | KeyCode::Char('n') => Some(Action::NextPage),
        KeyCode::Left | KeyCode::Char('p') => Some(Action::PrevPage),
        KeyCode::Char('/') => Some(Action::EditName),
        KeyCode::Char('e') => Some(Action::EditSpecies),
        KeyCode::Char('s') => Some(Action::CycleStatus),
        KeyCode::Char('c') => Some(Action::CycleSpeciesSuggestion),
        KeyCode::Char('S') => Some(Action::ApplySearch),
        KeyCode::Enter => Some(Action::ViewDetails),
        KeyCode::Char('f') => Some(Action::AddFavorite),
        // Remove only makes sense on the favorites slide
        KeyCode::Char('d') if app.view == View::Favorites => Some(Action::RemoveFavorite),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FavoritesStore;
    use crate::logging::LogBuffer;
    use crate::tui::theme::Theme;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::new(dir.path().join("favorites.json"));
        let app = App::new(store, Theme::default(), LogBuffer::new());
        (app, dir)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let (app, _dir) = test_app();
        assert_eq!(map_key(&app, press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            map_key(
                &app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_enter_views_details_in_normal_mode() {
        let (app, _dir) = test_app();
        assert_eq!(
            map_key(&app, press(KeyCode::Enter)),
            Some(Action::ViewDetails)
        );
    }

    #[test]
    fn test_edit_mode_captures_text() {
        let (mut app, _dir) = test_app();
        app.focus = FilterFocus::Name;
        assert_eq!(
            map_key(&app, press(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        );
        assert_eq!(
            map_key(&app, press(KeyCode::Backspace)),
            Some(Action::InputBackspace)
        );
        assert_eq!(
            map_key(&app, press(KeyCode::Enter)),
            Some(Action::ApplySearch)
        );
        assert_eq!(map_key(&app, press(KeyCode::Esc)), Some(Action::CancelEdit));
    }

    #[test]
    fn test_remove_only_on_favorites_slide() {
        let (mut app, _dir) = test_app();
        assert_eq!(map_key(&app, press(KeyCode::Char('d'))), None);
        app.view = View::Favorites;
        assert_eq!(
            map_key(&app, press(KeyCode::Char('d'))),
            Some(Action::RemoveFavorite)
        );
    }

    #[test]
    fn test_slide_jump_keys() {
        let (app, _dir) = test_app();
        assert_eq!(
            map_key(&app, press(KeyCode::Char('3'))),
            Some(Action::SlideTo(View::Favorites))
        );
        assert_eq!(map_key(&app, press(KeyCode::Tab)), Some(Action::NextSlide));
    }

    #[test]
    fn test_release_events_ignored() {
        let (app, _dir) = test_app();
        let mut event = press(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(&app, event), None);
    }
}
