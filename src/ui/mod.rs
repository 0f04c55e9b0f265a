// SPDX-License-Identifier: MPL-2.0
//! UI layer: Iced widgets and screens.
//!
//! Widgets own their local state and expose a `Message`/`update`/`view`
//! triple; screen-level events that concern the application (favorite
//! toggled, feedback submitted) are surfaced as explicit `Event` values
//! so the app root decides about persistence and notifications.

pub mod design_tokens;
pub mod feedback;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod product_card;
pub mod theming;
