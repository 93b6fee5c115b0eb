//! Bridge between the in-memory note list and its persisted slot
//!
//! The whole list lives as one JSON array under [`STORAGE_KEY`]. Loading is
//! forgiving: anything that is not a JSON array comes back as an empty list.

use log::{debug, warn};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;
use crate::models::Note;

/// Key of the slot holding the serialized note list
pub const STORAGE_KEY: &str = "notes-crud-localstorage";

/// Minimal string key-value backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store, used by tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw slot value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// Owns the backend and reads/writes the notes slot
pub struct NoteStore<S> {
    backend: S,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Read the persisted list. Never fails: missing or corrupt data yields `[]`.
    pub fn load(&self) -> Vec<Note> {
        match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => parse_notes(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read notes slot, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full list, empty lists included.
    pub fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        let json = serde_json::to_string(notes)?;
        self.backend.set(STORAGE_KEY, &json)?;
        debug!("saved {} notes", notes.len());
        Ok(())
    }

    /// Raw slot contents, if any
    pub fn export(&self) -> Result<Option<String>, StoreError> {
        self.backend.get(STORAGE_KEY)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(STORAGE_KEY)
    }
}

/// Decode a slot value. Non-arrays become `[]`; malformed elements are skipped.
pub fn parse_notes(raw: &str) -> Vec<Note> {
    decode_notes(raw).unwrap_or_default()
}

/// Decode a JSON array of notes, skipping malformed elements.
/// `None` when `raw` is not JSON or not an array.
pub fn decode_notes(raw: &str) -> Option<Vec<Note>> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            debug!("discarding unparseable notes slot: {}", e);
            return None;
        }
    };

    let Value::Array(items) = value else {
        debug!("discarding notes slot that is not an array");
        return None;
    };

    let total = items.len();
    let notes: Vec<Note> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if notes.len() < total {
        debug!("skipped {} malformed note entries", total - notes.len());
    }

    Some(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn sample_notes() -> Vec<Note> {
        vec![
            Note {
                id: "b".to_string(),
                text: "second \"quoted\" ✓".to_string(),
                created_at: 2_000,
                updated_at: 2_500,
            },
            Note::new("a".to_string(), "first".to_string(), 1_000),
        ]
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = NoteStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let store = NoteStore::new(MemoryStore::new());
        let notes = sample_notes();
        store.save(&notes).unwrap();
        assert_eq!(store.load(), notes);
    }

    #[test]
    fn test_save_empty_list_writes_array() {
        let store = NoteStore::new(MemoryStore::new());
        store.save(&sample_notes()).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.backend().raw(STORAGE_KEY).as_deref(), Some("[]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_values_load_empty() {
        for raw in ["not json", "42", "{}", "\"text\"", "null", "true", ""] {
            let store = NoteStore::new(MemoryStore::with_value(STORAGE_KEY, raw));
            assert!(store.load().is_empty(), "expected empty for {:?}", raw);
        }
    }

    #[test]
    fn test_persisted_layout() {
        let raw = r#"[{"id":"x1","text":"hi","createdAt":5,"updatedAt":7}]"#;
        let store = NoteStore::new(MemoryStore::with_value(STORAGE_KEY, raw));
        let notes = store.load();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "x1");
        assert_eq!(notes[0].created_at, 5);
        assert_eq!(notes[0].updated_at, 7);
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let raw = r#"[{"id":"x1","text":"ok","createdAt":1,"updatedAt":1}, 42, {"id":"x2"}]"#;
        let notes = parse_notes(raw);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "x1");
    }

    #[test]
    fn test_decode_tells_arrays_apart() {
        assert_eq!(decode_notes("[{\"id\":\"a\",\"text\":\"alp"), None);
        assert_eq!(decode_notes("{}"), None);
        assert_eq!(decode_notes("[]"), Some(Vec::new()));
        assert_eq!(decode_notes("[1, 2]"), Some(Vec::new()));
    }

    #[test]
    fn test_read_failure_loads_empty() {
        let store = NoteStore::new(BrokenStore);
        assert!(store.load().is_empty());
        assert!(store.save(&sample_notes()).is_err());
    }

    #[test]
    fn test_clear_and_export() {
        let store = NoteStore::new(MemoryStore::new());
        assert_eq!(store.export().unwrap(), None);
        store.save(&sample_notes()).unwrap();
        assert!(store.export().unwrap().unwrap().starts_with('['));
        store.clear().unwrap();
        assert_eq!(store.export().unwrap(), None);
    }
}
