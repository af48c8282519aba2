// API client for the Rick and Morty REST API
//
// Three fetch operations: paged character search, character by id, and
// episode by absolute URL. All of them share one failure policy: nothing
// here returns `Err`. Every transport error, decode error, or non-2xx
// response is absorbed into a `FetchOutcome` variant plus a logged
// diagnostic, and the view layer renders whatever shape it receives.
// There are no retries and no imposed timeouts.

pub mod models;

use models::{Character, CharacterPage, Episode, StatusFilter};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Result of a single fetch operation.
///
/// `NotFound` is the API's "nothing matched" answer (HTTP 404, which the
/// character search uses for an empty result set); `Failed` covers
/// transport errors, decode errors, and every other non-2xx status.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    NotFound,
    Failed,
}

impl<T> FetchOutcome<T> {
    /// The payload, if the fetch succeeded
    pub fn success(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// Shared HTTP client over the remote API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Search characters on one remote page (20 per page).
    ///
    /// Empty or "any" filters are omitted from the query string entirely;
    /// free-text values are percent-encoded by the query serializer.
    pub async fn search_characters(
        &self,
        remote_page: u32,
        name: &str,
        status: StatusFilter,
        species: &str,
    ) -> FetchOutcome<CharacterPage> {
        let url = format!("{}/character", self.base_url);
        let params = search_params(remote_page, name, status, species);
        self.get_json(self.http.get(&url).query(&params), &url).await
    }

    /// Fetch one full character record by id
    pub async fn character_by_id(&self, id: u32) -> FetchOutcome<Character> {
        let url = format!("{}/character/{}", self.base_url, id);
        self.get_json(self.http.get(&url), &url).await
    }

    /// Fetch one episode by the absolute URL embedded in a character record
    pub async fn episode_by_url(&self, url: &str) -> FetchOutcome<Episode> {
        self.get_json(self.http.get(url), url).await
    }

    /// Issue a GET and decode the JSON body, folding every failure mode
    /// into a `FetchOutcome`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> FetchOutcome<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("request to {} failed: {}", url, e);
                return FetchOutcome::Failed;
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("{} returned 404", url);
            return FetchOutcome::NotFound;
        }
        if !status.is_success() {
            tracing::warn!("{} returned HTTP {}", url, status);
            return FetchOutcome::Failed;
        }

        match response.json::<T>().await {
            Ok(value) => FetchOutcome::Success(value),
            Err(e) => {
                tracing::warn!("failed to decode response from {}: {}", url, e);
                FetchOutcome::Failed
            }
        }
    }
}

/// Build the query parameters for a character search.
///
/// `page` is always present; `name` and `species` only when non-empty
/// after trimming (and species not the "any" placeholder); `status` only
/// when an actual filter is selected.
pub fn search_params(
    remote_page: u32,
    name: &str,
    status: StatusFilter,
    species: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", remote_page.to_string())];

    let name = name.trim();
    if !name.is_empty() {
        params.push(("name", name.to_string()));
    }
    if let Some(status) = status.as_param() {
        params.push(("status", status.to_string()));
    }
    let species = species.trim();
    if !species.is_empty() && !species.eq_ignore_ascii_case("any") {
        params.push(("species", species.to_string()));
    }

    params
}
