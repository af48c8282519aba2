// Favorites store - persisted list of saved character snapshots
//
// The backing store is one JSON file holding a single array of Character
// records, unique by id. Every operation reads the whole file, mutates the
// in-memory list, and rewrites the whole array in one write call, so the
// on-disk state always matches the in-memory list when an operation
// returns. Missing or corrupt data is treated as an empty list, never as
// an error.

use crate::api::models::Character;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Result of an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A favorite with this id already exists; the stored snapshot is kept
    /// as-is and the incoming one is discarded
    AlreadyPresent,
}

/// File-backed favorites list
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// The currently persisted favorites, oldest first.
    ///
    /// A missing file, unreadable file, or invalid JSON all yield an empty
    /// list: a fresh install and a corrupted store look the same to the UI.
    pub fn list(&self) -> Vec<Character> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&data) {
            Ok(favorites) => favorites,
            Err(e) => {
                tracing::warn!(
                    "favorites file {:?} held invalid JSON ({}), treating as empty",
                    self.path,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Append a character unless one with the same id is already stored
    pub fn add(&self, character: &Character) -> Result<AddOutcome> {
        let mut favorites = self.list();
        if favorites.iter().any(|f| f.id == character.id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        favorites.push(character.clone());
        self.persist(&favorites)?;
        Ok(AddOutcome::Added)
    }

    /// Remove the favorite with the given id, if present.
    ///
    /// Persists unconditionally: removing an id that was never stored
    /// rewrites the unchanged list.
    pub fn remove(&self, id: u32) -> Result<()> {
        let mut favorites = self.list();
        favorites.retain(|f| f.id != id);
        self.persist(&favorites)
    }

    /// Delete the backing file entirely (CLI `favorites --clear`)
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("failed to delete favorites file"),
        }
    }

    /// Serialize and write the whole list in one call
    fn persist(&self, favorites: &[Character]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("failed to create favorites directory")?;
        }
        let json = serde_json::to_string(favorites).context("failed to serialize favorites")?;
        fs::write(&self.path, json).context("failed to write favorites file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{CharacterStatus, ResourceRef};

    fn character(id: u32, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            gender: "Male".to_string(),
            image: format!("https://example.com/avatar/{}.jpeg", id),
            origin: ResourceRef {
                name: "Earth".to_string(),
            },
            location: ResourceRef {
                name: "Earth".to_string(),
            },
            episode: vec![],
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> FavoritesStore {
        FavoritesStore::new(dir.path().join("favorites.json"))
    }

    #[test]
    fn test_empty_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).list().is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.add(&character(1, "Rick")).unwrap(), AddOutcome::Added);
        let favorites = store.list();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "Rick");
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(&character(1, "Rick")).unwrap();
        // Second add with the same id keeps the original snapshot
        let outcome = store.add(&character(1, "Rick (older)")).unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyPresent);
        let favorites = store.list();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "Rick");
    }

    #[test]
    fn test_remove_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(&character(1, "Rick")).unwrap();
        store.add(&character(2, "Morty")).unwrap();
        store.remove(1).unwrap();
        let favorites = store.list();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, 2);
    }

    #[test]
    fn test_remove_nonexistent_keeps_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(&character(1, "Rick")).unwrap();
        store.remove(99).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_corrupt_file_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json {").unwrap();
        assert!(store.list().is_empty());
        // And the store recovers on the next write
        store.add(&character(1, "Rick")).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(&character(3, "Summer")).unwrap();
        store.add(&character(1, "Rick")).unwrap();
        store.add(&character(2, "Morty")).unwrap();
        let ids: Vec<u32> = store.list().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(&character(1, "Rick")).unwrap();
        store.clear().unwrap();
        assert!(store.list().is_empty());
        // Clearing a missing file is fine too
        store.clear().unwrap();
    }
}
