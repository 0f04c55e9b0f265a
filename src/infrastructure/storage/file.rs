// SPDX-License-Identifier: MPL-2.0
//! File-backed key-value storage.
//!
//! Each key maps to `<key>.json` inside one base directory, resolved via
//! [`crate::app::paths`] for the production store. Writes replace the
//! whole file; a missing file reads as an absent key.

use crate::app::paths;
use crate::application::port::storage::{KeyValueStore, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Key-value store persisting one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Creates a store over an explicit base directory (tests, portable
    /// deployments). The directory is created lazily on first write.
    #[must_use]
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Creates the production store under the application data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if no data directory can be
    /// resolved for this platform.
    pub fn open_default() -> Result<Self, StorageError> {
        let base_dir = paths::get_app_data_dir().ok_or_else(|| {
            StorageError::Unavailable("could not determine application data directory".to_string())
        })?;
        Ok(Self::new(base_dir))
    }

    /// Resolves the file path for a key.
    ///
    /// Keys are short stable names; anything outside `[A-Za-z0-9._-]` is
    /// replaced so a key can never traverse out of the base directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{safe}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::Io(error.to_string())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir).map_err(|error| StorageError::Io(error.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|error| StorageError::Io(error.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StorageError::Io(error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_of_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.read("ecofly-feedbacks").unwrap(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.write("ecofly-feedbacks", "[1,2,3]").unwrap();
        assert_eq!(
            store.read("ecofly-feedbacks").unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn write_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.write("key", "old").unwrap();
        store.write("key", "new").unwrap();
        assert_eq!(store.read("key").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.write("key", "value").unwrap();
        store.remove("key").unwrap();
        store.remove("key").unwrap();
        assert_eq!(store.read("key").unwrap(), None);
    }

    #[test]
    fn keys_are_sanitized_into_the_base_directory() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.write("../escape/attempt", "value").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(!dir.path().parent().unwrap().join("escape").exists());
    }

    #[test]
    fn keys_do_not_collide_across_stores_in_different_dirs() {
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        let mut store_a = FileStore::new(dir_a.path().to_path_buf());
        let store_b = FileStore::new(dir_b.path().to_path_buf());

        store_a.write("key", "value").unwrap();
        assert_eq!(store_b.read("key").unwrap(), None);
    }
}
