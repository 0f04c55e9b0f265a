// SPDX-License-Identifier: MPL-2.0
//! Query-side state machines consumed by the UI.

pub mod gallery;

pub use gallery::{GalleryError, GalleryInfo, GalleryState};
