//! Persistence port for saved games. The engine never calls this itself;
//! integrating applications pick a backend and decide when to save.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::{error::StoreError, game::GameState};

pub trait GameStore {
    fn save(&mut self, slot: &str, state: &GameState) -> Result<(), StoreError>;

    /// `Ok(None)` when nothing was saved under `slot`.
    fn load(&self, slot: &str) -> Result<Option<GameState>, StoreError>;

    fn remove(&mut self, slot: &str) -> Result<(), StoreError>;
}

/// Keeps snapshots in memory; useful for tests and short-lived sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, GameState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, slot: &str, state: &GameState) -> Result<(), StoreError> {
        self.slots.insert(slot.to_string(), state.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<GameState>, StoreError> {
        Ok(self.slots.get(slot).cloned())
    }

    fn remove(&mut self, slot: &str) -> Result<(), StoreError> {
        self.slots.remove(slot);
        Ok(())
    }
}

/// One pretty-printed `<slot>.json` file per slot under a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, slot: &str) -> Result<PathBuf, StoreError> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidSlot(slot.to_string()));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl GameStore for JsonFileStore {
    fn save(&mut self, slot: &str, state: &GameState) -> Result<(), StoreError> {
        let path = self.path_for(slot)?;
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&path, json)?;
        tracing::debug!(path = %path.display(), "saved game");
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<GameState>, StoreError> {
        let path = self.path_for(slot)?;
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn remove(&mut self, slot: &str) -> Result<(), StoreError> {
        let path = self.path_for(slot)?;
        match std::fs::remove_file(&path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Move, Square};

    fn played() -> GameState {
        GameState::new_game()
            .apply_move(Move::new(Square::new(2, 1), Square::new(3, 2)))
            .unwrap()
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load("a").unwrap().is_none());
        store.save("a", &played()).unwrap();
        assert_eq!(store.load("a").unwrap(), Some(played()));
        store.remove("a").unwrap();
        assert!(store.load("a").unwrap().is_none());
    }

    #[test]
    fn test_json_file_store() {
        let dir = std::env::temp_dir().join(format!("checkers_store_{}", std::process::id()));
        let mut store = JsonFileStore::new(&dir);

        assert!(store.load("slot-1").unwrap().is_none());
        store.save("slot-1", &played()).unwrap();
        assert_eq!(store.load("slot-1").unwrap(), Some(played()));
        store.remove("slot-1").unwrap();
        assert!(store.load("slot-1").unwrap().is_none());
        // Removing twice is fine
        store.remove("slot-1").unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_slot_names_cannot_escape_directory() {
        let store = JsonFileStore::new(std::env::temp_dir());
        assert!(matches!(
            store.load("../etc/passwd"),
            Err(StoreError::InvalidSlot(_))
        ));
        assert!(matches!(store.load(""), Err(StoreError::InvalidSlot(_))));
    }
}
