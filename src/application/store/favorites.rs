// SPDX-License-Identifier: MPL-2.0
//! Locally persisted favorites list.
//!
//! Concrete adapter behind the [`Favorites`] capability port: a list of
//! product snapshots mirrored to durable storage under [`STORAGE_KEY`],
//! with the same hydrate/overwrite/self-heal discipline as the feedback
//! store.

use crate::application::port::favorites::{FavoriteToggle, Favorites};
use crate::application::port::storage::KeyValueStore;
use crate::domain::catalog::{FavoriteItem, ProductId};

/// Durable storage key holding the serialized favorites list.
pub const STORAGE_KEY: &str = "ecofly-favorites";

/// Favorites list mirrored to durable storage.
#[derive(Debug)]
pub struct LocalFavorites<S> {
    storage: S,
    items: Vec<FavoriteItem>,
    is_loaded: bool,
}

impl<S: KeyValueStore> LocalFavorites<S> {
    /// Creates an empty, not-yet-hydrated list over the given storage.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            items: Vec::new(),
            is_loaded: false,
        }
    }

    /// Loads the persisted list. Runs once; later calls are no-ops.
    /// Corrupt content is discarded and the durable entry removed.
    pub fn hydrate(&mut self) {
        if self.is_loaded {
            return;
        }

        match self.storage.read(STORAGE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<FavoriteItem>>(&payload) {
                Ok(items) => self.items = items,
                Err(error) => {
                    eprintln!("Discarding corrupt favorites storage: {error}");
                    if let Err(error) = self.storage.remove(STORAGE_KEY) {
                        eprintln!("Failed to remove corrupt favorites storage: {error}");
                    }
                    self.items = Vec::new();
                }
            },
            Ok(None) => self.items = Vec::new(),
            Err(error) => {
                eprintln!("Failed to read favorites storage: {error}");
                self.items = Vec::new();
            }
        }

        self.is_loaded = true;
    }

    /// Current snapshots, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    fn persist(&mut self) {
        if !self.is_loaded {
            return;
        }

        match serde_json::to_string(&self.items) {
            Ok(payload) => {
                if let Err(error) = self.storage.write(STORAGE_KEY, &payload) {
                    eprintln!("Failed to persist favorites: {error}");
                }
            }
            Err(error) => eprintln!("Failed to serialize favorites: {error}"),
        }
    }
}

impl<S: KeyValueStore> Favorites for LocalFavorites<S> {
    fn is_favorite(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    fn toggle(&mut self, item: FavoriteItem) -> FavoriteToggle {
        let outcome = if self.is_favorite(item.id) {
            self.items.retain(|existing| existing.id != item.id);
            FavoriteToggle::Removed
        } else {
            self.items.push(item);
            FavoriteToggle::Added
        };

        self.persist();
        outcome
    }
}
