// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation state for one product card.
//!
//! A [`GalleryState`] tracks two independent positions over the same
//! bounded image list: the inline card preview (`current_index`) and the
//! enlarged zoom modal (`modal_index`). Navigation is cyclic in both
//! directions and never leaves the list bounds.
//!
//! # Index synchronization
//!
//! Opening the modal copies the inline index into the modal index, so the
//! modal always opens on the image the user was looking at. From then on
//! the two indices evolve independently: browsing inside the modal does
//! not move the inline preview.
//!
//! # Load tracking
//!
//! `image_loaded` exists only to end the loading-skeleton presentation of
//! the first image. It flips on decode success *and* failure alike: a
//! failed load is not an error state and never blocks navigation.

use std::fmt;

/// Error returned by direct index selection with an out-of-range index.
///
/// Out-of-range selection is a caller bug, not a user-reachable state:
/// the view only emits indices it just enumerated. Failing loudly keeps
/// the bug observable instead of silently clamping or wrapping to an
/// image the user did not pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// The requested index is outside `0..len`.
    InvalidIndex {
        /// The index that was requested.
        index: usize,
        /// The length of the image list.
        len: usize,
    },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::InvalidIndex { index, len } => {
                write!(f, "image index {index} out of range for list of {len}")
            }
        }
    }
}

impl std::error::Error for GalleryError {}

/// Read-only snapshot of the gallery state for view rendering.
///
/// Contains everything the card and modal views need without giving them
/// access to the mutable state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryInfo {
    /// Inline preview position (0-indexed).
    pub current_index: usize,
    /// Modal position (0-indexed).
    pub modal_index: usize,
    /// Total number of images. Always at least 1.
    pub total: usize,
    /// Whether navigation controls should be shown at all.
    pub has_multiple: bool,
    /// Whether the zoom modal is open.
    pub modal_open: bool,
    /// Whether the first image load has completed (ok or failed).
    pub image_loaded: bool,
}

/// Navigation state machine over a bounded, non-empty image list.
///
/// The owning product is normalized at construction
/// ([`crate::domain::catalog::Product::new`]) so `len` is always at least
/// 1 and the modulo arithmetic below can never divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    /// Number of images in the product's list.
    len: usize,
    /// Inline preview position.
    current_index: usize,
    /// Modal position.
    modal_index: usize,
    /// Whether the first image finished loading (or failed).
    image_loaded: bool,
    /// Whether the zoom modal is open.
    modal_open: bool,
}

impl GalleryState {
    /// Creates a gallery over `len` images, positioned at the first one.
    ///
    /// A `len` of zero is treated as 1: construction mirrors the
    /// product-side normalization so a misuse cannot produce a state
    /// with no valid index.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            current_index: 0,
            modal_index: 0,
            image_loaded: false,
            modal_open: false,
        }
    }

    /// Returns a view snapshot of the current state.
    #[must_use]
    pub fn info(&self) -> GalleryInfo {
        GalleryInfo {
            current_index: self.current_index,
            modal_index: self.modal_index,
            total: self.len,
            has_multiple: self.has_multiple(),
            modal_open: self.modal_open,
            image_loaded: self.image_loaded,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the list is never empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether there is more than one image to navigate between.
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.len > 1
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn modal_index(&self) -> usize {
        self.modal_index
    }

    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    /// Advances the inline preview to the next image, wrapping at the
    /// end. No-op for a single-image list.
    pub fn next(&mut self) {
        if self.has_multiple() {
            self.current_index = (self.current_index + 1) % self.len;
        }
    }

    /// Moves the inline preview to the previous image, wrapping at the
    /// start. No-op for a single-image list.
    pub fn previous(&mut self) {
        if self.has_multiple() {
            self.current_index = (self.current_index + self.len - 1) % self.len;
        }
    }

    /// Jumps the inline preview directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidIndex`] if `index >= len`.
    pub fn select(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len {
            return Err(GalleryError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Opens the zoom modal on the image currently shown inline.
    ///
    /// This synchronization is the key correctness contract of the
    /// widget: the modal must not reset to the first image.
    pub fn open_modal(&mut self) {
        self.modal_index = self.current_index;
        self.modal_open = true;
    }

    /// Closes the zoom modal. The modal index is left where it was; the
    /// next `open_modal` re-synchronizes it anyway.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Advances the modal to the next image, wrapping at the end.
    /// Independent of the inline preview. No-op for a single image.
    pub fn next_modal(&mut self) {
        if self.has_multiple() {
            self.modal_index = (self.modal_index + 1) % self.len;
        }
    }

    /// Moves the modal to the previous image, wrapping at the start.
    /// Independent of the inline preview. No-op for a single image.
    pub fn previous_modal(&mut self) {
        if self.has_multiple() {
            self.modal_index = (self.modal_index + self.len - 1) % self.len;
        }
    }

    /// Jumps the modal directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidIndex`] if `index >= len`.
    pub fn select_modal(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len {
            return Err(GalleryError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        self.modal_index = index;
        Ok(())
    }

    /// Records that the first image load ended, successfully or not.
    ///
    /// Ends the loading-skeleton presentation. Idempotent.
    pub fn mark_image_loaded(&mut self) {
        self.image_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gallery_starts_at_first_image() {
        let gallery = GalleryState::new(4);
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.modal_index(), 0);
        assert!(!gallery.modal_open());
        assert!(!gallery.image_loaded());
    }

    #[test]
    fn zero_length_is_normalized_to_one() {
        let gallery = GalleryState::new(0);
        assert_eq!(gallery.len(), 1);
        assert!(!gallery.has_multiple());
    }

    #[test]
    fn next_cycles_back_to_start_after_full_loop() {
        for len in 1..=6 {
            let mut gallery = GalleryState::new(len);
            for _ in 0..len {
                gallery.next();
            }
            assert_eq!(gallery.current_index(), 0, "cycle broken for len {len}");
        }
    }

    #[test]
    fn previous_is_the_inverse_of_next() {
        let mut gallery = GalleryState::new(5);
        for start in 0..5 {
            gallery.select(start).unwrap();
            gallery.next();
            gallery.previous();
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn previous_wraps_to_last_image() {
        let mut gallery = GalleryState::new(3);
        gallery.previous();
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn single_image_navigation_is_a_no_op() {
        let mut gallery = GalleryState::new(1);
        gallery.next();
        gallery.previous();
        gallery.next_modal();
        gallery.previous_modal();
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.modal_index(), 0);
    }

    #[test]
    fn select_rejects_out_of_range_index() {
        let mut gallery = GalleryState::new(2);
        let err = gallery.select(2).unwrap_err();
        assert_eq!(err, GalleryError::InvalidIndex { index: 2, len: 2 });
        // State is untouched after the failed call.
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn select_modal_rejects_out_of_range_index() {
        let mut gallery = GalleryState::new(3);
        assert!(gallery.select_modal(5).is_err());
        assert_eq!(gallery.modal_index(), 0);
    }

    #[test]
    fn open_modal_synchronizes_with_inline_index() {
        let mut gallery = GalleryState::new(4);
        gallery.next();
        gallery.next();
        gallery.open_modal();

        assert!(gallery.modal_open());
        assert_eq!(gallery.modal_index(), gallery.current_index());
    }

    #[test]
    fn reopening_modal_resynchronizes_after_independent_browsing() {
        let mut gallery = GalleryState::new(4);
        gallery.open_modal();
        gallery.next_modal();
        gallery.next_modal();
        gallery.close_modal();

        gallery.next();
        gallery.open_modal();
        assert_eq!(gallery.modal_index(), 1);
    }

    #[test]
    fn modal_navigation_does_not_move_inline_preview() {
        let mut gallery = GalleryState::new(4);
        gallery.open_modal();
        gallery.next_modal();
        gallery.next_modal();

        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.modal_index(), 2);
    }

    #[test]
    fn mark_image_loaded_is_idempotent_and_does_not_block_navigation() {
        let mut gallery = GalleryState::new(2);
        gallery.mark_image_loaded();
        gallery.mark_image_loaded();
        assert!(gallery.image_loaded());

        gallery.next();
        assert_eq!(gallery.current_index(), 1);
    }

    #[test]
    fn info_snapshot_reflects_state() {
        let mut gallery = GalleryState::new(3);
        gallery.next();
        gallery.open_modal();
        gallery.next_modal();
        gallery.mark_image_loaded();

        let info = gallery.info();
        assert_eq!(info.current_index, 1);
        assert_eq!(info.modal_index, 2);
        assert_eq!(info.total, 3);
        assert!(info.has_multiple);
        assert!(info.modal_open);
        assert!(info.image_loaded);
    }
}
