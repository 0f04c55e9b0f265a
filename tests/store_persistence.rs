// SPDX-License-Identifier: MPL-2.0
//! End-to-end persistence tests: the stores over the file-backed
//! adapter, across simulated sessions.

use ecofly::application::port::favorites::{FavoriteToggle, Favorites};
use ecofly::application::port::storage::KeyValueStore;
use ecofly::application::store::feedback::STORAGE_KEY;
use ecofly::application::store::{FeedbackStore, LocalFavorites};
use ecofly::domain::catalog::{Product, ProductId, ProductImage};
use ecofly::domain::feedback::{FeedbackDraft, Rating};
use ecofly::infrastructure::storage::FileStore;
use tempfile::tempdir;

fn draft(name: &str, message: &str, rating: u8) -> FeedbackDraft {
    FeedbackDraft {
        name: name.to_string(),
        email: None,
        product: None,
        message: message.to_string(),
        rating: Rating::new(rating).expect("valid rating"),
    }
}

#[test]
fn feedback_survives_a_session_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // Session 1: submit feedback.
    {
        let mut store = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
        store.hydrate();
        store.add(draft("Ana", "Ótimo produto", 5));
        store.add(draft("Bia", "Bom", 4));
    }

    // Session 2: a fresh store over the same directory sees both
    // entries, newest first.
    let mut store = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
    store.hydrate();
    assert_eq!(store.count(), 2);

    let recent = store.recent(5);
    assert_eq!(recent[0].name, "Bia");
    assert_eq!(recent[1].name, "Ana");
    assert_eq!(recent[1].rating.stars(), 5);
}

#[test]
fn submitted_entry_is_returned_first_with_generated_fields() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut store = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
    store.hydrate();

    let id = store.add(draft("Ana", "Ótimo produto", 5));

    assert_eq!(store.count(), 1);
    let recent = store.recent(5);
    assert_eq!(recent[0].id, id);
    assert_eq!(recent[0].name, "Ana");
    assert_eq!(recent[0].message, "Ótimo produto");
    assert_eq!(recent[0].rating.stars(), 5);
    assert!(!recent[0].date.is_empty());
}

#[test]
fn clear_then_rehydrate_yields_an_empty_collection() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut store = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
    store.hydrate();
    store.add(draft("Ana", "msg", 3));
    store.clear();

    let mut fresh = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
    fresh.hydrate();
    assert_eq!(fresh.count(), 0);
}

#[test]
fn corrupt_file_on_disk_self_heals() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut raw = FileStore::new(dir.path().to_path_buf());
    raw.write(STORAGE_KEY, "definitely not json")
        .expect("seed corrupt payload");

    let mut store = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
    store.hydrate();
    assert_eq!(store.count(), 0);

    // The corrupt entry is gone from disk and the store stays usable.
    assert_eq!(raw.read(STORAGE_KEY).expect("read back"), None);
    store.add(draft("Ana", "still works", 4));
    assert_eq!(store.count(), 1);
}

#[test]
fn favorites_round_trip_through_the_product_snapshot() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let product = Product::new(
        ProductId(6),
        "Cinzeiro Universo Místico",
        "Cinzeiros",
        vec![ProductImage {
            url: "https://cdn.example/universo.jpg".to_string(),
            alt: "Vista superior".to_string(),
        }],
        "Design cósmico com olho central e estrelas",
    );

    // Session 1: toggle on.
    {
        let mut favorites = LocalFavorites::new(FileStore::new(dir.path().to_path_buf()));
        favorites.hydrate();
        let outcome = favorites.toggle(product.favorite_snapshot());
        assert_eq!(outcome, FavoriteToggle::Added);
        assert!(favorites.is_favorite(ProductId(6)));
    }

    // Session 2: still favorited, snapshot intact.
    let mut favorites = LocalFavorites::new(FileStore::new(dir.path().to_path_buf()));
    favorites.hydrate();
    assert!(favorites.is_favorite(ProductId(6)));
    assert_eq!(favorites.items()[0].image, "https://cdn.example/universo.jpg");

    // Toggle off and verify removal persists.
    assert_eq!(
        favorites.toggle(product.favorite_snapshot()),
        FavoriteToggle::Removed
    );
    let mut fresh = LocalFavorites::new(FileStore::new(dir.path().to_path_buf()));
    fresh.hydrate();
    assert!(!fresh.is_favorite(ProductId(6)));
}

#[test]
fn feedback_and_favorites_share_a_directory_without_clashing() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut feedback = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
    feedback.hydrate();
    feedback.add(draft("Ana", "msg", 5));

    let mut favorites = LocalFavorites::new(FileStore::new(dir.path().to_path_buf()));
    favorites.hydrate();
    favorites.toggle(
        Product::new(ProductId(1), "EcoBag", "EcoBags", Vec::new(), "d").favorite_snapshot(),
    );

    // Each store re-reads only its own key.
    let mut feedback_again = FeedbackStore::new(FileStore::new(dir.path().to_path_buf()));
    feedback_again.hydrate();
    assert_eq!(feedback_again.count(), 1);

    let mut favorites_again = LocalFavorites::new(FileStore::new(dir.path().to_path_buf()));
    favorites_again.hydrate();
    assert_eq!(favorites_again.count(), 1);
}
