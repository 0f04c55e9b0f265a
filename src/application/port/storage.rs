// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence port definition.
//!
//! This module defines the [`KeyValueStore`] trait over which the
//! feedback and favorites stores persist their collections.
//! Infrastructure adapters implement this trait to provide concrete
//! storage (a JSON file per key under the app data directory, or an
//! in-memory map for tests). Values are opaque serialized documents;
//! consumers always round-trip full collections.

use std::fmt;

// =============================================================================
// StorageError
// =============================================================================

/// Errors that can occur while reading or writing durable storage.
///
/// These are never fatal to the application: stores log them and keep
/// operating in memory for the rest of the session.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    Io(String),
    /// The storage location could not be determined or created.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "I/O error: {msg}"),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

// =============================================================================
// KeyValueStore Trait
// =============================================================================

/// Port for durable key-value persistence.
///
/// Keys are short stable names (e.g. `"ecofly-feedbacks"`); values are
/// opaque strings, serialized and deserialized entirely by the caller.
///
/// # Contract
///
/// - `read` returns `Ok(None)` for a key that has never been written or
///   has been removed; absence is not an error.
/// - `write` replaces the whole value for the key.
/// - `remove` is idempotent: removing an absent key succeeds.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Removing an absent key is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
