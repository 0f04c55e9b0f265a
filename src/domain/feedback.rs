// SPDX-License-Identifier: MPL-2.0
//! Customer feedback types and submission validation.
//!
//! A [`FeedbackDraft`] is what the form produces after validation; the
//! store turns it into a [`FeedbackMessage`] by stamping an id and a
//! creation date. Messages are never mutated after creation and are only
//! removed by bulk clear.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Star rating, 1 through 5.
///
/// Serialized as the bare star count; deserialization re-validates the
/// range so an out-of-range value in durable storage is a parse error
/// and triggers the store's corruption handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Rating::new(stars).ok_or_else(|| format!("rating out of range: {stars}"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating, rejecting values outside 1..=5.
    ///
    /// A zero means "no stars selected yet" in the form and is not a
    /// valid rating.
    #[must_use]
    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    #[must_use]
    pub fn stars(self) -> u8 {
        self.0
    }

    /// Returns the i18n key for this rating's label
    /// (`rating-1` .. `rating-5`).
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self.0 {
            1 => "rating-1",
            2 => "rating-2",
            3 => "rating-3",
            4 => "rating-4",
            _ => "rating-5",
        }
    }
}

/// Reasons a feedback submission is rejected before touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name field is empty or whitespace.
    MissingName,
    /// The message field is empty or whitespace.
    MissingMessage,
    /// No star rating was selected.
    MissingRating,
}

impl ValidationError {
    /// Returns the i18n message key for the corrective toast.
    ///
    /// Name and message share one message, mirroring the single
    /// "fill in at least name and message" prompt of the form.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::MissingName | ValidationError::MissingMessage => {
                "error-feedback-missing-field"
            }
            ValidationError::MissingRating => "error-feedback-missing-rating",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingName => write!(f, "name is required"),
            ValidationError::MissingMessage => write!(f, "message is required"),
            ValidationError::MissingRating => write!(f, "a star rating is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated feedback submission, before id/date assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: Option<String>,
    pub product: Option<String>,
    pub message: String,
    pub rating: Rating,
}

impl FeedbackDraft {
    /// Validates raw form input and builds a draft.
    ///
    /// `rating` is the raw star count from the form, where 0 means no
    /// selection. Optional fields are trimmed and dropped when empty.
    /// Checks run in form order: name, message, rating.
    pub fn from_form(
        name: &str,
        email: &str,
        product: &str,
        message: &str,
        rating: u8,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        let rating = Rating::new(rating).ok_or(ValidationError::MissingRating)?;

        Ok(Self {
            name: name.to_string(),
            email: non_empty(email),
            product: non_empty(product),
            message: message.to_string(),
            rating,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A stored feedback entry. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    /// Unique id generated at creation time.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub message: String,
    pub rating: Rating,
    /// Human-readable creation timestamp, formatted at creation time.
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_zero_and_six() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
    }

    #[test]
    fn rating_accepts_full_range() {
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).unwrap().stars(), stars);
        }
    }

    #[test]
    fn rating_i18n_keys_follow_star_count() {
        assert_eq!(Rating::new(1).unwrap().i18n_key(), "rating-1");
        assert_eq!(Rating::new(5).unwrap().i18n_key(), "rating-5");
    }

    #[test]
    fn draft_requires_name() {
        let result = FeedbackDraft::from_form("  ", "", "", "Ótimo produto", 5);
        assert_eq!(result.unwrap_err(), ValidationError::MissingName);
    }

    #[test]
    fn draft_requires_message() {
        let result = FeedbackDraft::from_form("Ana", "", "", "   ", 5);
        assert_eq!(result.unwrap_err(), ValidationError::MissingMessage);
    }

    #[test]
    fn draft_requires_rating() {
        let result = FeedbackDraft::from_form("Ana", "", "", "Ótimo produto", 0);
        assert_eq!(result.unwrap_err(), ValidationError::MissingRating);
    }

    #[test]
    fn draft_drops_empty_optional_fields() {
        let draft = FeedbackDraft::from_form("Ana", " ", "", "Ótimo produto", 4).unwrap();
        assert_eq!(draft.email, None);
        assert_eq!(draft.product, None);
    }

    #[test]
    fn draft_keeps_trimmed_optional_fields() {
        let draft =
            FeedbackDraft::from_form("Ana", " ana@example.com ", "EcoBag", "Bom", 3).unwrap();
        assert_eq!(draft.email.as_deref(), Some("ana@example.com"));
        assert_eq!(draft.product.as_deref(), Some("EcoBag"));
    }

    #[test]
    fn name_and_message_errors_share_the_form_prompt_key() {
        assert_eq!(
            ValidationError::MissingName.i18n_key(),
            ValidationError::MissingMessage.i18n_key()
        );
        assert_ne!(
            ValidationError::MissingName.i18n_key(),
            ValidationError::MissingRating.i18n_key()
        );
    }

    #[test]
    fn out_of_range_rating_fails_deserialization() {
        let result: std::result::Result<Rating, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn feedback_message_round_trips_through_json() {
        let message = FeedbackMessage {
            id: "1759190000000-0001".to_string(),
            name: "Ana".to_string(),
            email: None,
            product: Some("EcoBag".to_string()),
            message: "Ótimo produto".to_string(),
            rating: Rating::new(5).unwrap(),
            date: "30/09/2025 01:44".to_string(),
        };

        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("email"), "skipped when None: {json}");
        let back: FeedbackMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
