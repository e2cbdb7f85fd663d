//! State store: whole-document load/save of the game state.
//!
//! The store contract is deliberately coarse: there is no partial-field
//! update. Callers load the document, mutate a copy, and save it back.
//!
//! ## Self-healing load
//!
//! A missing or unparseable document is not an error. `load` reinitializes
//! the store to the default document and returns that, logging a warning.
//! Corruption therefore never propagates past this layer.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::core::GameState;

/// Whole-document persistence contract for the game state.
pub trait StateStore {
    /// Return the persisted document, reinitializing on missing or
    /// unreadable content. Never fails.
    fn load(&self) -> GameState;

    /// Persist the full document, replacing any prior content.
    fn save(&self, state: &GameState) -> io::Result<()>;

    /// Write and return the default document.
    fn reset(&self) -> io::Result<GameState> {
        let state = GameState::default();
        self.save(&state)?;
        Ok(state)
    }
}

/// File-backed store persisting the document as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reinitialize to the default document after a failed load.
    ///
    /// If even the rewrite fails the default is still returned; the next
    /// successful save will repair the file.
    fn heal(&self) -> GameState {
        let state = GameState::default();
        if let Err(error) = self.save(&state) {
            warn!(path = %self.path.display(), %error, "failed to reinitialize state document");
        }
        state
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> GameState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %error, "state document unreadable; reinitializing");
                }
                return self.heal();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "state document corrupt; reinitializing");
                self.heal()
            }
        }
    }

    fn save(&self, state: &GameState) -> io::Result<()> {
        let json = serde_json::to_string_pretty(state).map_err(io::Error::from)?;

        // Write-then-rename so a crash mid-write never leaves a torn document.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<GameState>,
}

impl StateStore for MemoryStore {
    fn load(&self) -> GameState {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn save(&self, state: &GameState) -> io::Result<()> {
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = state.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, PlayerKind};

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("game_data.json"))
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load(), GameState::default());
        // The heal pass also wrote the document back.
        assert!(dir.path().join("game_data.json").exists());
    }

    #[test]
    fn test_corrupt_file_self_heals() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("game_data.json"), "{not json").unwrap();

        assert_eq!(store.load(), GameState::default());
        // Subsequent loads see the repaired document.
        assert_eq!(store.load(), GameState::default());
    }

    #[test]
    fn test_save_then_load_observes_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut state = GameState::default();
        state
            .players
            .insert("Jon".to_string(), Player::new("Stark", PlayerKind::Human));
        state.turn_order.push("Jon".to_string());

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut state = GameState::default();
        state.record_event("stale");
        store.save(&state).unwrap();

        let first = store.reset().unwrap();
        let second = store.reset().unwrap();

        assert_eq!(first, GameState::default());
        assert_eq!(first, second);
        assert_eq!(store.load(), GameState::default());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.load(), GameState::default());

        let mut state = GameState::default();
        state.record_event("hello");
        store.save(&state).unwrap();

        assert_eq!(store.load(), state);
        assert_eq!(store.reset().unwrap(), GameState::default());
    }
}
