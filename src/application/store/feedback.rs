// SPDX-License-Identifier: MPL-2.0
//! Durable, append-mostly log of customer feedback.
//!
//! Entries are kept most-recent-first in memory and mirrored as one JSON
//! document under the [`STORAGE_KEY`] durable key. The collection is
//! small and user-editable on a single client, so every mutation
//! re-serializes and overwrites the whole entry; no deltas, no log.

use crate::application::port::storage::KeyValueStore;
use crate::domain::feedback::{FeedbackDraft, FeedbackMessage};
use std::sync::atomic::{AtomicU64, Ordering};

/// Durable storage key holding the serialized feedback collection.
pub const STORAGE_KEY: &str = "ecofly-feedbacks";

/// Generates a feedback id: millisecond timestamp plus a
/// process-monotonic suffix.
///
/// Uniqueness is best-effort across sessions (entries are never looked
/// up by id in this scope) and exact within one.
fn next_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = COUNTER.fetch_add(1, Ordering::Relaxed) % 10_000;
    format!("{millis}-{suffix:04}")
}

/// Formats the creation timestamp shown next to an entry.
///
/// Day-first ordering, matching the store's Brazilian-Portuguese
/// audience.
fn format_date() -> String {
    chrono::Local::now().format("%d/%m/%Y %H:%M").to_string()
}

/// In-memory feedback collection mirrored to durable storage.
#[derive(Debug)]
pub struct FeedbackStore<S> {
    storage: S,
    /// Most-recent-first.
    feedbacks: Vec<FeedbackMessage>,
    /// Set once [`hydrate`](Self::hydrate) has run. Gates persistence so
    /// an empty pre-hydration list can never overwrite durable storage.
    is_loaded: bool,
}

impl<S: KeyValueStore> FeedbackStore<S> {
    /// Creates an empty, not-yet-hydrated store over the given storage.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            feedbacks: Vec::new(),
            is_loaded: false,
        }
    }

    /// Loads the persisted collection. Runs once; later calls are no-ops.
    ///
    /// Corrupt durable content is discarded and the durable entry
    /// removed; the store restarts empty and stays usable. Read failures
    /// leave the store empty for this session.
    pub fn hydrate(&mut self) {
        if self.is_loaded {
            return;
        }

        match self.storage.read(STORAGE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<FeedbackMessage>>(&payload) {
                Ok(feedbacks) => self.feedbacks = feedbacks,
                Err(error) => {
                    eprintln!("Discarding corrupt feedback storage: {error}");
                    if let Err(error) = self.storage.remove(STORAGE_KEY) {
                        eprintln!("Failed to remove corrupt feedback storage: {error}");
                    }
                    self.feedbacks = Vec::new();
                }
            },
            Ok(None) => self.feedbacks = Vec::new(),
            Err(error) => {
                eprintln!("Failed to read feedback storage: {error}");
                self.feedbacks = Vec::new();
            }
        }

        self.is_loaded = true;
    }

    /// Appends a validated draft as the newest entry and persists the
    /// collection. Returns the generated id.
    pub fn add(&mut self, draft: FeedbackDraft) -> String {
        let message = FeedbackMessage {
            id: next_id(),
            name: draft.name,
            email: draft.email,
            product: draft.product,
            message: draft.message,
            rating: draft.rating,
            date: format_date(),
        };
        let id = message.id.clone();

        self.feedbacks.insert(0, message);
        self.persist();
        id
    }

    /// Returns up to `limit` entries, newest first. A `limit` beyond the
    /// collection size returns everything available.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[FeedbackMessage] {
        &self.feedbacks[..limit.min(self.feedbacks.len())]
    }

    /// All entries, newest first.
    #[must_use]
    pub fn all(&self) -> &[FeedbackMessage] {
        &self.feedbacks
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.feedbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feedbacks.is_empty()
    }

    /// Whether [`hydrate`](Self::hydrate) has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Empties the collection and removes the durable entry. Idempotent.
    pub fn clear(&mut self) {
        self.feedbacks.clear();
        if let Err(error) = self.storage.remove(STORAGE_KEY) {
            eprintln!("Failed to clear feedback storage: {error}");
        }
    }

    /// Serializes the whole collection over the durable entry.
    ///
    /// No-op before hydration: the gate prevents a pre-hydration empty
    /// list from wiping storage on first render.
    fn persist(&mut self) {
        if !self.is_loaded {
            return;
        }

        match serde_json::to_string(&self.feedbacks) {
            Ok(payload) => {
                if let Err(error) = self.storage.write(STORAGE_KEY, &payload) {
                    eprintln!("Failed to persist feedback: {error}");
                }
            }
            Err(error) => eprintln!("Failed to serialize feedback: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::Rating;
    use crate::infrastructure::storage::MemoryStore;

    fn draft(name: &str, message: &str, rating: u8) -> FeedbackDraft {
        FeedbackDraft {
            name: name.to_string(),
            email: None,
            product: None,
            message: message.to_string(),
            rating: Rating::new(rating).unwrap(),
        }
    }

    fn hydrated_store() -> FeedbackStore<MemoryStore> {
        let mut store = FeedbackStore::new(MemoryStore::new());
        store.hydrate();
        store
    }

    #[test]
    fn hydrate_from_empty_storage_yields_empty_store() {
        let store = hydrated_store();
        assert!(store.is_loaded());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn add_then_recent_returns_the_entry_first() {
        let mut store = hydrated_store();
        let id = store.add(draft("Ana", "Ótimo produto", 5));

        let recent = store.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, id);
        assert_eq!(recent[0].name, "Ana");
        assert_eq!(recent[0].rating.stars(), 5);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn entries_are_kept_most_recent_first() {
        let mut store = hydrated_store();
        store.add(draft("first", "a", 3));
        store.add(draft("second", "b", 4));
        store.add(draft("third", "c", 5));

        let names: Vec<&str> = store.recent(3).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["third", "second", "first"]);
    }

    #[test]
    fn recent_tolerates_limit_beyond_collection_size() {
        let mut store = hydrated_store();
        store.add(draft("Ana", "msg", 4));
        assert_eq!(store.recent(100).len(), 1);
        assert_eq!(store.recent(0).len(), 0);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut store = hydrated_store();
        let a = store.add(draft("Ana", "a", 5));
        let b = store.add(draft("Bia", "b", 5));
        assert_ne!(a, b);
    }

    #[test]
    fn add_persists_and_a_fresh_store_rehydrates_it() {
        let mut store = hydrated_store();
        store.add(draft("Ana", "Ótimo produto", 5));

        let mut fresh = FeedbackStore::new(store.storage.clone());
        fresh.hydrate();
        assert_eq!(fresh.count(), 1);
        assert_eq!(fresh.recent(5)[0].name, "Ana");
    }

    #[test]
    fn clear_empties_store_and_durable_entry() {
        let mut store = hydrated_store();
        store.add(draft("Ana", "msg", 2));
        store.clear();
        assert_eq!(store.count(), 0);

        let mut fresh = FeedbackStore::new(store.storage.clone());
        fresh.hydrate();
        assert_eq!(fresh.count(), 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = hydrated_store();
        store.clear();
        store.clear();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn corrupt_storage_self_heals_to_an_empty_usable_store() {
        let mut storage = MemoryStore::new();
        storage.write(STORAGE_KEY, "{not json").unwrap();

        let mut store = FeedbackStore::new(storage);
        store.hydrate();
        assert!(store.is_loaded());
        assert_eq!(store.count(), 0);

        // The corrupt entry was removed and the store keeps working.
        assert_eq!(store.storage.read(STORAGE_KEY).unwrap(), None);
        store.add(draft("Ana", "still works", 4));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn out_of_range_rating_in_storage_counts_as_corruption() {
        let mut storage = MemoryStore::new();
        let payload = r#"[{"id":"1-0001","name":"Ana","message":"m","rating":9,"date":"d"}]"#;
        storage.write(STORAGE_KEY, payload).unwrap();

        let mut store = FeedbackStore::new(storage);
        store.hydrate();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn persist_is_gated_until_hydration() {
        let mut seeded = MemoryStore::new();
        seeded
            .write(STORAGE_KEY, r#"[{"id":"1-0001","name":"Ana","message":"m","rating":5,"date":"d"}]"#)
            .unwrap();

        // A store that never hydrated must not overwrite the seeded data.
        let mut store = FeedbackStore::new(seeded);
        store.persist();
        assert!(store.storage.read(STORAGE_KEY).unwrap().is_some());

        store.hydrate();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn hydrate_runs_once() {
        let mut store = hydrated_store();
        store.add(draft("Ana", "msg", 5));

        // A second hydrate must not re-read storage over live state.
        store.hydrate();
        assert_eq!(store.count(), 1);
    }
}
