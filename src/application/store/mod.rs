// SPDX-License-Identifier: MPL-2.0
//! Storage-backed stores: durable collections behind the key-value port.
//!
//! Both stores follow the same discipline: hydrate once from durable
//! storage, mutate in memory first, then re-serialize and overwrite the
//! whole durable entry. Corrupt durable content is discarded and the
//! store restarts empty (data loss, not a fault). Storage failures are
//! logged and never surface to the caller; the session keeps working in
//! memory.

pub mod favorites;
pub mod feedback;

pub use favorites::LocalFavorites;
pub use feedback::FeedbackStore;
