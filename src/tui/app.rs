// TUI application state
//
// All mutable state lives in the explicit `App` struct and is threaded
// through the render functions; nothing is captured in module scope.
// Input handling produces `Action`s (see input.rs), `apply_action` turns
// them into state transitions, and any network work is returned as a
// `Command` for the caller to hand to the Fetcher. That split keeps every
// transition unit-testable without a terminal or a network.

use super::components::toast::Toast;
use super::theme::Theme;
use crate::api::models::{Character, CharacterPage, Episode, StatusFilter};
use crate::api::FetchOutcome;
use crate::events::AppEvent;
use crate::favorites::{AddOutcome, FavoritesStore};
use crate::logging::LogBuffer;
use crate::pagination::{max_user_page, slice_for_user_page, to_remote_page};

/// The literal List-view failure message from the original UI
pub const SEARCH_ERROR_MESSAGE: &str = "No characters found or error fetching data.";

/// The three carousel slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List, // Slide 0: paginated character search
    Detail,    // Slide 1: one character with episodes
    Favorites, // Slide 2: persisted favorites
}

impl View {
    /// Carousel slide index (List=0, Detail=1, Favorites=2)
    #[allow(dead_code)]
    pub fn slide_index(self) -> usize {
        match self {
            View::List => 0,
            View::Detail => 1,
            View::Favorites => 2,
        }
    }

    /// Get the next slide in cycle
    pub fn next(self) -> Self {
        match self {
            View::List => View::Detail,
            View::Detail => View::Favorites,
            View::Favorites => View::List,
        }
    }

    /// Get the previous slide in cycle
    pub fn prev(self) -> Self {
        match self {
            View::List => View::Favorites,
            View::Detail => View::List,
            View::Favorites => View::Detail,
        }
    }

    /// Display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::List => "Characters",
            View::Detail => "Details",
            View::Favorites => "Favorites",
        }
    }
}

/// The applied search filters plus the current user page
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub name: String,
    pub status: StatusFilter,
    pub species: String,
    pub page: u32,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            status: StatusFilter::Any,
            species: String::new(),
            page: 1,
        }
    }
}

/// Draft filter edits, shown in the filter bar until applied with Enter
#[derive(Debug, Clone, Default)]
pub struct FilterDraft {
    pub name: String,
    pub status: StatusFilter,
    pub species: String,
}

/// Which filter field is being edited, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterFocus {
    #[default]
    None,
    Name,
    Species,
}

/// Load state of the List view
#[derive(Debug, Clone, PartialEq)]
pub enum ListLoad {
    Loading,
    /// Transport error, non-2xx, or a 404 "nothing matched" answer;
    /// both render the single generic message
    Failed,
    Loaded(CharacterPage),
}

/// Load state of the episode section in the Detail view
#[derive(Debug, Clone, PartialEq)]
pub enum EpisodeLoad {
    /// No character shown yet
    Idle,
    Loading,
    Loaded(Vec<Episode>),
}

/// User intent, produced by the input layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSlide,
    PrevSlide,
    SlideTo(View),
    SelectUp,
    SelectDown,
    NextPage,
    PrevPage,
    EditName,
    EditSpecies,
    CycleStatus,
    CycleSpeciesSuggestion,
    ApplySearch,
    CancelEdit,
    InputChar(char),
    InputBackspace,
    ViewDetails,
    AddFavorite,
    RemoveFavorite,
}

/// Network work requested by a state transition.
///
/// The event loop forwards these to the Fetcher; App itself never touches
/// the network.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search {
        remote_page: u32,
        user_page: u32,
        name: String,
        status: StatusFilter,
        species: String,
    },
    FetchDetail {
        id: u32,
    },
    FetchEpisodes {
        character_id: u32,
        urls: Vec<String>,
    },
}

/// Species suggestions offered by the filter bar (free text also works)
pub const SPECIES_SUGGESTIONS: &[&str] = &["any", "Human", "Alien", "Robot", "Animal"];

/// Main application state
pub struct App {
    /// Currently visible slide
    pub view: View,

    /// Applied search filters and page
    pub query: SearchQuery,

    /// Unapplied filter edits shown in the filter bar
    pub draft: FilterDraft,

    /// Which filter field is in edit mode
    pub focus: FilterFocus,

    /// List view load state (one remote page when loaded)
    pub list: ListLoad,

    /// Selection cursor within the visible cards
    pub list_selected: usize,

    /// Character shown in the Detail view, if any
    pub detail: Option<Character>,

    /// Episode section state for the Detail view
    pub episodes: EpisodeLoad,

    /// Cached favorites, refreshed on every mutation and view entry
    pub favorites: Vec<Character>,

    /// Selection cursor within the favorites cards
    pub favorites_selected: usize,

    /// Auto-dismissing notice overlay
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    pub theme: Theme,

    /// Captured logs for the status bar
    pub log_buffer: LogBuffer,

    store: FavoritesStore,
}

impl App {
    pub fn new(store: FavoritesStore, theme: Theme, log_buffer: LogBuffer) -> Self {
        let favorites = store.list();
        Self {
            view: View::default(),
            query: SearchQuery::new(),
            draft: FilterDraft::default(),
            focus: FilterFocus::default(),
            list: ListLoad::Loading,
            list_selected: 0,
            detail: None,
            episodes: EpisodeLoad::Idle,
            favorites,
            favorites_selected: 0,
            toast: None,
            should_quit: false,
            theme,
            log_buffer,
            store,
        }
    }

    /// The initial search issued on startup (slide 0 renders first)
    pub fn startup_command(&mut self) -> Command {
        self.list = ListLoad::Loading;
        self.search_command()
    }

    /// Characters visible on the current user page (up to 10)
    pub fn visible_cards(&self) -> Vec<Character> {
        match &self.list {
            ListLoad::Loaded(page) => slice_for_user_page(&page.results, self.query.page),
            _ => Vec::new(),
        }
    }

    /// Highest reachable user page, once a result has arrived
    pub fn max_page(&self) -> Option<u32> {
        match &self.list {
            ListLoad::Loaded(page) => Some(max_user_page(page.info.pages)),
            _ => None,
        }
    }

    /// Prev is available on any page past the first
    pub fn can_prev_page(&self) -> bool {
        self.query.page > 1
    }

    /// Next needs both a reported next remote page and headroom within
    /// the user-page range
    pub fn can_next_page(&self) -> bool {
        match &self.list {
            ListLoad::Loaded(page) => {
                page.info.next.is_some() && self.query.page < max_user_page(page.info.pages)
            }
            _ => false,
        }
    }

    /// Apply one user action; returns the network work it requires, if any
    pub fn apply_action(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::NextSlide => {
                self.set_view(self.view.next());
                None
            }
            Action::PrevSlide => {
                self.set_view(self.view.prev());
                None
            }
            Action::SlideTo(view) => {
                self.set_view(view);
                None
            }
            Action::SelectUp => {
                self.move_selection(-1);
                None
            }
            Action::SelectDown => {
                self.move_selection(1);
                None
            }
            Action::NextPage => {
                if self.view == View::List && self.can_next_page() {
                    self.query.page += 1;
                    self.reload_list();
                    return Some(self.search_command());
                }
                None
            }
            Action::PrevPage => {
                if self.view == View::List && self.can_prev_page() {
                    self.query.page -= 1;
                    self.reload_list();
                    return Some(self.search_command());
                }
                None
            }
            Action::EditName => {
                self.focus = FilterFocus::Name;
                None
            }
            Action::EditSpecies => {
                self.focus = FilterFocus::Species;
                None
            }
            Action::CycleStatus => {
                self.draft.status = self.draft.status.next();
                None
            }
            Action::CycleSpeciesSuggestion => {
                self.draft.species = next_species_suggestion(&self.draft.species);
                None
            }
            Action::InputChar(c) => {
                match self.focus {
                    FilterFocus::Name => self.draft.name.push(c),
                    FilterFocus::Species => self.draft.species.push(c),
                    FilterFocus::None => {}
                }
                None
            }
            Action::InputBackspace => {
                match self.focus {
                    FilterFocus::Name => {
                        self.draft.name.pop();
                    }
                    FilterFocus::Species => {
                        self.draft.species.pop();
                    }
                    FilterFocus::None => {}
                }
                None
            }
            Action::CancelEdit => {
                self.focus = FilterFocus::None;
                None
            }
            Action::ApplySearch => {
                // Search resets to page 1, like the original's Search button
                self.focus = FilterFocus::None;
                self.query.name = self.draft.name.trim().to_string();
                self.query.status = self.draft.status;
                self.query.species = self.draft.species.trim().to_string();
                self.query.page = 1;
                self.reload_list();
                Some(self.search_command())
            }
            Action::ViewDetails => self.view_details(),
            Action::AddFavorite => {
                if let Some(character) = self.card_under_cursor().cloned() {
                    self.add_favorite(&character);
                }
                None
            }
            Action::RemoveFavorite => {
                if self.view == View::Favorites {
                    if let Some(character) = self.favorites.get(self.favorites_selected).cloned() {
                        self.remove_favorite(character.id);
                    }
                }
                None
            }
        }
    }

    /// Fold a completed fetch into the state
    pub fn apply_event(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::SearchLoaded { user_page, outcome } => {
                // Last writer wins; a stale result for an old page still
                // replaces the list, matching the original's behavior of
                // rebuilding the whole section per response
                if user_page != self.query.page {
                    tracing::debug!(
                        "applying search result for page {} while on page {}",
                        user_page,
                        self.query.page
                    );
                }
                self.list = match outcome {
                    FetchOutcome::Success(page) => ListLoad::Loaded(page),
                    FetchOutcome::NotFound | FetchOutcome::Failed => ListLoad::Failed,
                };
                self.list_selected = 0;
                None
            }
            AppEvent::DetailLoaded { outcome } => {
                // The original slides to the detail pane only after the
                // fetch settles, placeholder or not
                let command = match outcome {
                    FetchOutcome::Success(character) => {
                        let command = if character.episode.is_empty() {
                            self.episodes = EpisodeLoad::Loaded(Vec::new());
                            None
                        } else {
                            self.episodes = EpisodeLoad::Loading;
                            Some(Command::FetchEpisodes {
                                character_id: character.id,
                                urls: character.episode.clone(),
                            })
                        };
                        self.detail = Some(character);
                        command
                    }
                    FetchOutcome::NotFound | FetchOutcome::Failed => {
                        self.detail = None;
                        self.episodes = EpisodeLoad::Idle;
                        None
                    }
                };
                self.set_view(View::Detail);
                command
            }
            AppEvent::EpisodesLoaded {
                character_id,
                episodes,
            } => {
                // Drop batches for a character the view has moved past
                if self.detail.as_ref().map(|c| c.id) == Some(character_id) {
                    self.episodes = EpisodeLoad::Loaded(episodes);
                } else {
                    tracing::debug!("dropping stale episode batch for character {}", character_id);
                }
                None
            }
        }
    }

    /// Expire the toast; called from the render tick
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    fn set_view(&mut self, view: View) {
        if view == View::Favorites {
            // The store is re-read every time the slide is shown
            self.favorites = self.store.list();
            self.clamp_favorites_cursor();
        }
        self.view = view;
        self.focus = FilterFocus::None;
    }

    fn reload_list(&mut self) {
        self.list = ListLoad::Loading;
        self.list_selected = 0;
    }

    fn search_command(&self) -> Command {
        Command::Search {
            remote_page: to_remote_page(self.query.page),
            user_page: self.query.page,
            name: self.query.name.clone(),
            status: self.query.status,
            species: self.query.species.clone(),
        }
    }

    /// The card the cursor points at in the current view
    fn card_under_cursor(&self) -> Option<&Character> {
        match self.view {
            View::Favorites => self.favorites.get(self.favorites_selected),
            View::List => match &self.list {
                ListLoad::Loaded(page) => {
                    let cards = slice_for_user_page(&page.results, self.query.page);
                    // ids are unique within a page, so the slice entry can
                    // be mapped back to the remote page it came from
                    cards
                        .get(self.list_selected)
                        .map(|c| c.id)
                        .and_then(|id| page.results.iter().find(|c| c.id == id))
                }
                _ => None,
            },
            View::Detail => self.detail.as_ref(),
        }
    }

    fn view_details(&mut self) -> Option<Command> {
        let id = self.card_under_cursor().map(|c| c.id)?;
        // Fetch the full record first; the summary card may lack the
        // episode list. The slide switches when the fetch settles.
        Some(Command::FetchDetail { id })
    }

    fn add_favorite(&mut self, character: &Character) {
        match self.store.add(character) {
            Ok(AddOutcome::Added) => {
                self.toast = Some(Toast::new(format!("{} added to Favorites!", character.name)));
            }
            Ok(AddOutcome::AlreadyPresent) => {
                self.toast = Some(Toast::new(format!(
                    "{} is already in Favorites",
                    character.name
                )));
            }
            Err(e) => {
                tracing::error!("failed to save favorite: {:#}", e);
                self.toast = Some(Toast::new("Could not save favorite"));
            }
        }
        self.favorites = self.store.list();
        self.clamp_favorites_cursor();
    }

    fn remove_favorite(&mut self, id: u32) {
        if let Err(e) = self.store.remove(id) {
            tracing::error!("failed to remove favorite: {:#}", e);
        }
        self.favorites = self.store.list();
        self.clamp_favorites_cursor();
    }

    fn clamp_favorites_cursor(&mut self) {
        if self.favorites_selected >= self.favorites.len() {
            self.favorites_selected = self.favorites.len().saturating_sub(1);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let (cursor, len) = match self.view {
            View::List => {
                let len = self.visible_cards().len();
                (&mut self.list_selected, len)
            }
            View::Favorites => (&mut self.favorites_selected, self.favorites.len()),
            View::Detail => return,
        };
        if len == 0 {
            return;
        }
        let next = cursor.saturating_add_signed(delta).min(len - 1);
        *cursor = next;
    }
}

/// Advance through the species suggestion ring; free text not matching a
/// suggestion restarts at the beginning
fn next_species_suggestion(current: &str) -> String {
    // Empty free text is the "any" placeholder
    let current = if current.is_empty() { "any" } else { current };
    let position = SPECIES_SUGGESTIONS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(current));
    let next = match position {
        Some(i) => SPECIES_SUGGESTIONS[(i + 1) % SPECIES_SUGGESTIONS.len()],
        None => SPECIES_SUGGESTIONS[0],
    };
    // "any" is the no-filter placeholder; represent it as empty free text
    if next == "any" {
        String::new()
    } else {
        next.to_string()
    }
}
