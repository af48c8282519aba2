// Events that flow from spawned fetch tasks back to the UI loop
//
// Network fetches run as tokio tasks so the UI never blocks; their results
// come back over an mpsc channel as one of these variants and are folded
// into the application state by the event loop. Using an enum keeps the
// task/UI boundary type-safe and pattern-matchable.

use crate::api::models::{Character, CharacterPage, Episode};
use crate::api::FetchOutcome;

/// A completed fetch, tagged with enough context to apply it
#[derive(Debug)]
pub enum AppEvent {
    /// A character search finished. `user_page` is the page the search was
    /// issued for; a stale result simply overwrites the list state (last
    /// writer wins, matching the original's replace-the-whole-section
    /// rendering).
    SearchLoaded {
        user_page: u32,
        outcome: FetchOutcome<CharacterPage>,
    },

    /// A full character record arrived for the detail view
    DetailLoaded { outcome: FetchOutcome<Character> },

    /// The whole episode batch for one character settled.
    ///
    /// This is sent only after every episode URL has resolved or failed
    /// (a join barrier, never incremental); failed fetches have already
    /// been dropped, and the survivors keep the character's original
    /// episode order. `character_id` lets the UI drop a batch that
    /// belongs to a character it is no longer showing.
    EpisodesLoaded {
        character_id: u32,
        episodes: Vec<Episode>,
    },
}
