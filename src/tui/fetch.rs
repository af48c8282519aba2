// Fetch plumbing - spawns network tasks and feeds results back as events
//
// Each `Command` from the app state becomes a tokio task holding a clone
// of the API client and the event sender. Tasks are never cancelled: if
// the user navigates away, the result still arrives and the app state
// decides what to do with it.

use crate::api::models::{Episode, StatusFilter};
use crate::api::{ApiClient, FetchOutcome};
use crate::events::AppEvent;
use crate::tui::app::Command;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Spawns fetch tasks for app commands
#[derive(Clone)]
pub struct Fetcher {
    client: Arc<ApiClient>,
    tx: mpsc::Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(client: ApiClient, tx: mpsc::Sender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            tx,
        }
    }

    /// Execute one command as a background task
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::Search {
                remote_page,
                user_page,
                name,
                status,
                species,
            } => self.spawn_search(remote_page, user_page, name, status, species),
            Command::FetchDetail { id } => self.spawn_detail(id),
            Command::FetchEpisodes { character_id, urls } => {
                self.spawn_episodes(character_id, urls)
            }
        }
    }

    fn spawn_search(
        &self,
        remote_page: u32,
        user_page: u32,
        name: String,
        status: StatusFilter,
        species: String,
    ) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client
                .search_characters(remote_page, &name, status, &species)
                .await;
            let _ = tx.send(AppEvent::SearchLoaded { user_page, outcome }).await;
        });
    }

    fn spawn_detail(&self, id: u32) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client.character_by_id(id).await;
            let _ = tx.send(AppEvent::DetailLoaded { outcome }).await;
        });
    }

    /// Fetch every episode URL concurrently and send one event once the
    /// whole batch has settled. This is a join barrier on purpose: the
    /// detail view renders the full episode list at once, in the
    /// character's original order, never incrementally.
    fn spawn_episodes(&self, character_id: u32, urls: Vec<String>) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let fetches = urls.iter().map(|url| client.episode_by_url(url));
            let outcomes = join_all(fetches).await;
            let episodes = collect_episodes(outcomes);
            let _ = tx
                .send(AppEvent::EpisodesLoaded {
                    character_id,
                    episodes,
                })
                .await;
        });
    }
}

/// Keep the successful episodes in their original order; failed fetches
/// are silently dropped rather than shown as errors
fn collect_episodes(outcomes: Vec<FetchOutcome<Episode>>) -> Vec<Episode> {
    outcomes
        .into_iter()
        .filter_map(FetchOutcome::success)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(code: &str, name: &str) -> Episode {
        Episode {
            name: name.to_string(),
            episode: code.to_string(),
        }
    }

    #[test]
    fn test_failed_fetches_silently_skipped() {
        let outcomes = vec![
            FetchOutcome::Success(episode("S01E01", "Pilot")),
            FetchOutcome::Failed,
        ];
        let episodes = collect_episodes(outcomes);
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].display_line(), "S01E01 - Pilot");
    }

    #[test]
    fn test_order_preserved() {
        let outcomes = vec![
            FetchOutcome::Success(episode("S01E01", "Pilot")),
            FetchOutcome::NotFound,
            FetchOutcome::Success(episode("S01E03", "Anatomy Park")),
        ];
        let codes: Vec<String> = collect_episodes(outcomes)
            .iter()
            .map(|e| e.episode.clone())
            .collect();
        assert_eq!(codes, vec!["S01E01", "S01E03"]);
    }

    #[test]
    fn test_all_failed_yields_empty() {
        let outcomes: Vec<FetchOutcome<Episode>> = vec![FetchOutcome::Failed, FetchOutcome::Failed];
        assert!(collect_episodes(outcomes).is_empty());
    }
}
