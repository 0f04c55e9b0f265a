// SPDX-License-Identifier: MPL-2.0
//! `ecofly` is a small desktop storefront showcase for the ECOFLY
//! sustainable products brand, built with the Iced GUI framework.
//!
//! It presents a featured-product gallery with an image carousel and zoom
//! modal, a favorites list, and a customer feedback form, and demonstrates
//! internationalization with Fluent, user preference management, and a
//! narrow key-value persistence port with swappable adapters.

#![doc(html_root_url = "https://docs.rs/ecofly/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
