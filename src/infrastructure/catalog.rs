// SPDX-License-Identifier: MPL-2.0
//! Embedded product catalog.
//!
//! The featured-product catalog ships inside the binary as a TOML
//! document (`assets/catalog/products.toml`) and is parsed once at
//! startup. The catalog is a read-only content source: products are
//! display data, never mutated by the application.

use crate::domain::catalog::{Product, ProductId, ProductImage};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const CATALOG_FILE: &str = "products.toml";

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    product: Vec<ProductEntry>,
}

/// One `[[product]]` table.
///
/// `images` defaults to empty; [`Product::new`] normalizes that to a
/// placeholder entry.
#[derive(Debug, Deserialize)]
struct ProductEntry {
    id: u32,
    name: String,
    category: String,
    description: String,
    #[serde(default)]
    images: Vec<ProductImage>,
}

/// Loads the embedded featured-product catalog, in document order.
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the embedded document is missing or
/// fails to parse; both indicate a build problem, not a runtime
/// condition.
pub fn load() -> Result<Vec<Product>> {
    let raw = Asset::get(CATALOG_FILE)
        .ok_or_else(|| Error::Catalog(format!("embedded catalog {CATALOG_FILE} not found")))?;
    let text = String::from_utf8_lossy(raw.data.as_ref()).to_string();
    parse(&text)
}

fn parse(text: &str) -> Result<Vec<Product>> {
    let file: CatalogFile =
        toml::from_str(text).map_err(|error| Error::Catalog(error.to_string()))?;

    Ok(file
        .product
        .into_iter()
        .map(|entry| {
            Product::new(
                ProductId(entry.id),
                entry.name,
                entry.category,
                entry.images,
                entry.description,
            )
        })
        .collect())
}
