// Data models for the Rick and Morty REST API
//
// These mirror the JSON payloads returned by the API. Characters are
// treated as immutable snapshots once deserialized; the same shape is
// reused verbatim for the persisted favorites file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life status as reported by the API (exact spellings preserved)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterStatus::Alive => write!(f, "Alive"),
            CharacterStatus::Dead => write!(f, "Dead"),
            CharacterStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// A named reference to another API resource (origin, last known location)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
}

/// One character record from the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub gender: String,
    /// Portrait image URL (shown as a link; terminals don't render it)
    pub image: String,
    pub origin: ResourceRef,
    pub location: ResourceRef,
    /// Episode resource URLs, in the character's canonical episode order
    #[serde(default)]
    pub episode: Vec<String>,
}

/// One episode record, fetched lazily per detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub name: String,
    /// Episode code, e.g. "S01E01"
    pub episode: String,
}

impl Episode {
    /// The display line used in the detail view: "S01E01 - Pilot"
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.episode, self.name)
    }
}

/// Pagination metadata attached to every search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    /// Number of remote pages (20 characters each)
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// A full character-search response: metadata plus one remote page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Status filter for the search form; `Any` means "no filter"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Alive,
    Dead,
    Unknown,
}

impl StatusFilter {
    /// Cycle to the next option (used by the filter bar)
    pub fn next(self) -> Self {
        match self {
            StatusFilter::Any => StatusFilter::Alive,
            StatusFilter::Alive => StatusFilter::Dead,
            StatusFilter::Dead => StatusFilter::Unknown,
            StatusFilter::Unknown => StatusFilter::Any,
        }
    }

    /// The query-parameter value, or None when no filter applies
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            StatusFilter::Any => None,
            StatusFilter::Alive => Some("alive"),
            StatusFilter::Dead => Some("dead"),
            StatusFilter::Unknown => Some("unknown"),
        }
    }

    /// Display label for the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Any => "Any",
            StatusFilter::Alive => "Alive",
            StatusFilter::Dead => "Dead",
            StatusFilter::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_deserializes_from_api_shape() {
        let json = r#"{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": {"name": "Earth (C-137)", "url": ""},
            "location": {"name": "Citadel of Ricks", "url": ""},
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": ["https://rickandmortyapi.com/api/episode/1"],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        }"#;

        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.status, CharacterStatus::Alive);
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.episode.len(), 1);
    }

    #[test]
    fn test_unknown_status_spelling() {
        let status: CharacterStatus = serde_json::from_str(r#""unknown""#).unwrap();
        assert_eq!(status, CharacterStatus::Unknown);
        assert_eq!(status.to_string(), "unknown");
    }

    #[test]
    fn test_episode_display_line() {
        let ep = Episode {
            name: "Pilot".to_string(),
            episode: "S01E01".to_string(),
        };
        assert_eq!(ep.display_line(), "S01E01 - Pilot");
    }

    #[test]
    fn test_status_filter_cycle_covers_all_options() {
        let mut filter = StatusFilter::Any;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(filter);
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::Any);
        assert_eq!(seen.len(), 4);
    }
}
