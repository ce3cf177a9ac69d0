//! Local persistence of the grade book
//!
//! The grade book is stored as a JSON blob under a fixed key in a simple
//! key-value store. Loading never fails: a missing blob yields a fresh grade
//! book, a corrupt one is discarded.

use crate::core::error::StorageError;
use crate::core::models::GradeBook;
use crate::{error, info};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key under which the grade book is stored
pub const STATE_KEY: &str = "gpa_calculator_data";

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` if the key is absent
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value; deleting an absent key succeeds
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be modified
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root` (created lazily on first write)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the stored files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{file_stem}.json"))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| io_error(&self.root, e))?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| io_error(&path, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(io_error(&path, e)),
            _ => Ok(()),
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Saves and restores the [`GradeBook`] through a [`KeyValueStore`]
#[derive(Debug)]
pub struct StateRepository<S: KeyValueStore> {
    store: S,
    default_system: String,
}

impl<S: KeyValueStore> StateRepository<S> {
    /// Wrap a store; `default_system` seeds fresh grade books
    pub fn new(store: S, default_system: impl Into<String>) -> Self {
        Self {
            store,
            default_system: default_system.into(),
        }
    }

    /// Underlying store
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Grade book used when nothing usable is stored
    #[must_use]
    pub fn default_book(&self) -> GradeBook {
        GradeBook::new(self.default_system.clone())
    }

    /// Load the stored grade book, falling back to a fresh one
    ///
    /// Corrupt or empty data is removed from the store so the next save
    /// starts clean.
    pub fn load(&mut self) -> GradeBook {
        let raw = match self.store.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.default_book(),
            Err(e) => {
                error!("Failed to load state: {e}");
                return self.default_book();
            }
        };

        match serde_json::from_str::<GradeBook>(&raw) {
            Ok(mut book) if !book.semesters.is_empty() => {
                if book.system.trim().is_empty() {
                    book.system.clone_from(&self.default_system);
                }
                info!("Loaded {} semester(s) from storage", book.semesters.len());
                book
            }
            Ok(_) => {
                info!("Stored grade book has no semesters; starting fresh");
                self.discard();
                self.default_book()
            }
            Err(e) => {
                error!("Failed to load state: {e}");
                self.discard();
                self.default_book()
            }
        }
    }

    /// Persist the grade book
    ///
    /// # Errors
    /// Returns an error if serialization or the store write fails
    pub fn save(&mut self, book: &GradeBook) -> Result<(), StorageError> {
        let json = serde_json::to_string(book)?;
        self.store.set(STATE_KEY, &json)
    }

    /// Remove the stored grade book
    ///
    /// # Errors
    /// Returns an error if the store cannot be modified
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(STATE_KEY)
    }

    fn discard(&mut self) {
        if let Err(e) = self.store.remove(STATE_KEY) {
            error!("Failed to discard stored state: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SubjectEntry;

    fn repo_with(raw: &str) -> StateRepository<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, raw).unwrap();
        StateRepository::new(store, "AUS")
    }

    #[test]
    fn test_absent_state_gives_default() {
        let mut repo = StateRepository::new(MemoryStore::new(), "MY");
        let book = repo.load();
        assert_eq!(book, GradeBook::new("MY"));
    }

    #[test]
    fn test_malformed_json_is_discarded() {
        let mut repo = repo_with("{not json");
        let book = repo.load();
        assert_eq!(book.semester_count(), 1);
        assert_eq!(book.system, "AUS");
        assert_eq!(repo.store().get(STATE_KEY).unwrap(), None);
    }

    #[test]
    fn test_empty_semester_list_is_discarded() {
        let mut repo = repo_with(r#"{"system":"MY","semesters":[]}"#);
        assert_eq!(repo.load(), GradeBook::new("AUS"));
        assert_eq!(repo.store().get(STATE_KEY).unwrap(), None);
    }

    #[test]
    fn test_null_fields_keep_entered_rows() {
        let mut repo = repo_with(
            r#"{"system":null,"semesters":[[{"code":"FIT1045","name":"Algorithms","grade":"D","credits":"6"},{"code":null,"name":null,"grade":null,"credits":null}]]}"#,
        );
        let book = repo.load();

        assert_eq!(book.system, "AUS");
        assert_eq!(book.semesters[0].len(), 2);
        assert_eq!(book.semesters[0][0], SubjectEntry::new("FIT1045", "Algorithms", "D", "6"));
        assert_eq!(book.semesters[0][1], SubjectEntry::blank());
        assert!(repo.store().get(STATE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_null_semesters_is_discarded() {
        let mut repo = repo_with(r#"{"system":"MY","semesters":null}"#);
        assert_eq!(repo.load(), GradeBook::new("AUS"));
        assert_eq!(repo.store().get(STATE_KEY).unwrap(), None);
    }

    #[test]
    fn test_missing_system_uses_default() {
        let mut repo = repo_with(r#"{"semesters":[[{"code":"A","name":"B","credits":"6"}]]}"#);
        let book = repo.load();
        assert_eq!(book.system, "AUS");
        assert_eq!(book.semesters[0][0], SubjectEntry::new("A", "B", "HD", "6"));
    }

    #[test]
    fn test_save_then_load() {
        let mut repo = StateRepository::new(MemoryStore::new(), "AUS");
        let mut book = GradeBook::new("MY");
        book.add_subject(1, SubjectEntry::new("X", "Y", "D", "12")).unwrap();
        book.add_semester();

        repo.save(&book).unwrap();

        assert_eq!(repo.load(), book);
    }

    #[test]
    fn test_persisted_shape() {
        let mut repo = StateRepository::new(MemoryStore::new(), "AUS");
        repo.save(&GradeBook::new("AUS")).unwrap();
        let raw = repo.store().get(STATE_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"{"system":"AUS","semesters":[[{"code":"","name":"","grade":"HD","credits":""}]]}"#
        );
    }

    #[test]
    fn test_clear_removes_state() {
        let mut repo = StateRepository::new(MemoryStore::new(), "AUS");
        repo.save(&GradeBook::new("MY")).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.load(), GradeBook::new("AUS"));
    }

    #[test]
    fn test_file_store_path_sanitizes_key() {
        let store = FileStore::new("/tmp/gpa");
        assert_eq!(
            store.path_for("gpa_calculator_data"),
            PathBuf::from("/tmp/gpa/gpa_calculator_data.json")
        );
        assert_eq!(
            store.path_for("../evil key"),
            PathBuf::from("/tmp/gpa/___evil_key.json")
        );
    }
}
