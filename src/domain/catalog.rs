// SPDX-License-Identifier: MPL-2.0
//! Product catalog types.
//!
//! A [`Product`] owns an ordered, never-empty sequence of
//! [`ProductImage`]s: construction normalizes an empty or missing image
//! list to a single placeholder entry (empty URL, product name as alt
//! text), so every consumer can index and cycle without a null-list
//! special case.

use serde::{Deserialize, Serialize};

/// Identifier of a product within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single product image: a URL (CDN or local path) plus alt text.
///
/// Immutable once constructed; owned by the product that lists it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt: String,
}

impl ProductImage {
    /// Returns `true` if this image has no source URL (the placeholder
    /// produced by normalization).
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.url.is_empty()
    }
}

/// A display-only catalog product.
///
/// Created from the content source and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    images: Vec<ProductImage>,
    description: String,
}

impl Product {
    /// Creates a product, normalizing the image list.
    ///
    /// An empty image list is replaced by one placeholder entry with an
    /// empty URL and the product name as alt text, so index arithmetic
    /// downstream always has at least one element to operate over.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        images: Vec<ProductImage>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let images = if images.is_empty() {
            vec![ProductImage {
                url: String::new(),
                alt: name.clone(),
            }]
        } else {
            images
        };

        Self {
            id,
            name,
            category: category.into(),
            images,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The normalized image list. Never empty.
    #[must_use]
    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }

    /// Number of images. Always at least 1.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Returns the image at `index`, if in range.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ProductImage> {
        self.images.get(index)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Builds the snapshot handed to the favorites capability on toggle.
    ///
    /// The snapshot carries the first image's URL (empty string for a
    /// placeholder-only product) so the favorites list can render a
    /// preview without holding the full product.
    #[must_use]
    pub fn favorite_snapshot(&self) -> FavoriteItem {
        FavoriteItem {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            image: self.images[0].url.clone(),
            description: self.description.clone(),
        }
    }
}

/// Snapshot of a product captured when the user toggles a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// First image URL at toggle time, or empty string.
    pub image: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_images() -> Vec<ProductImage> {
        vec![
            ProductImage {
                url: "https://cdn.example/front.jpg".to_string(),
                alt: "Front view".to_string(),
            },
            ProductImage {
                url: "https://cdn.example/back.jpg".to_string(),
                alt: "Back view".to_string(),
            },
        ]
    }

    #[test]
    fn product_keeps_provided_images() {
        let product = Product::new(ProductId(1), "EcoBag", "EcoBags", sample_images(), "desc");
        assert_eq!(product.image_count(), 2);
        assert_eq!(product.image(0).unwrap().alt, "Front view");
    }

    #[test]
    fn empty_image_list_is_normalized_to_placeholder() {
        let product = Product::new(ProductId(7), "Cinzeiro", "Cinzeiros", Vec::new(), "desc");

        assert_eq!(product.image_count(), 1);
        let placeholder = product.image(0).unwrap();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.alt, "Cinzeiro");
    }

    #[test]
    fn favorite_snapshot_uses_first_image_url() {
        let product = Product::new(ProductId(6), "Mini Tela", "Mini Telas", sample_images(), "d");
        let snapshot = product.favorite_snapshot();

        assert_eq!(snapshot.id, ProductId(6));
        assert_eq!(snapshot.image, "https://cdn.example/front.jpg");
    }

    #[test]
    fn favorite_snapshot_of_placeholder_product_has_empty_image() {
        let product = Product::new(ProductId(9), "Chaveiro", "Chaveiros", Vec::new(), "d");
        assert_eq!(product.favorite_snapshot().image, "");
    }

    #[test]
    fn out_of_range_image_access_returns_none() {
        let product = Product::new(ProductId(2), "EcoBag", "EcoBags", sample_images(), "d");
        assert!(product.image(2).is_none());
    }
}
