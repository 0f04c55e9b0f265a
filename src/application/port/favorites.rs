// SPDX-License-Identifier: MPL-2.0
//! Favorites capability port.
//!
//! The product-card widget only depends on these two operations; who
//! persists the favorites list and how is an adapter concern
//! ([`crate::application::store::favorites::LocalFavorites`] in this
//! application).

use crate::domain::catalog::{FavoriteItem, ProductId};

/// Outcome of a favorite toggle, derived from the state observed before
/// the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    /// The product was not a favorite and has been added.
    Added,
    /// The product was a favorite and has been removed.
    Removed,
}

impl FavoriteToggle {
    /// Returns the i18n key for the confirmation toast.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FavoriteToggle::Added => "favorite-added",
            FavoriteToggle::Removed => "favorite-removed",
        }
    }
}

/// Port for the user's favorites list.
///
/// Implementations must toggle exactly the product identified by the
/// snapshot's id; the remaining snapshot fields are display data captured
/// at toggle time.
pub trait Favorites {
    /// Returns whether the product is currently favorited.
    fn is_favorite(&self, id: ProductId) -> bool;

    /// Toggles the favorite state for the snapshot's product and reports
    /// which transition happened.
    fn toggle(&mut self, item: FavoriteItem) -> FavoriteToggle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_outcomes_have_distinct_keys() {
        assert_ne!(
            FavoriteToggle::Added.i18n_key(),
            FavoriteToggle::Removed.i18n_key()
        );
    }
}
