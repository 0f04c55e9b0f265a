// SPDX-License-Identifier: MPL-2.0
//! Async image-bytes loading.
//!
//! Product images are referenced by URL: CDN addresses in the shipped
//! catalog, plain file paths in local/test catalogs. Either way the
//! bytes are fetched off the update loop and handed to Iced's image
//! widget for decoding. A failed fetch is not surfaced as an error to
//! the user: the card keeps its placeholder block and only the
//! loading-skeleton state ends.

use std::fmt;

/// Errors that can occur while fetching image bytes.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The image source URL is empty (placeholder entry).
    EmptySource,
    /// An HTTP request failed or returned a non-success status.
    Http(String),
    /// A local file could not be read.
    Io(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::EmptySource => write!(f, "empty image source"),
            FetchError::Http(msg) => write!(f, "HTTP error: {msg}"),
            FetchError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Returns `true` if the source should be fetched over HTTP.
fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches the raw bytes for an image source.
///
/// Remote sources go through `reqwest`; anything else is treated as a
/// local file path.
///
/// # Errors
///
/// Returns a [`FetchError`] for empty sources, HTTP failures (including
/// non-success statuses) and unreadable files.
pub async fn load_image_bytes(source: &str) -> Result<Vec<u8>, FetchError> {
    if source.is_empty() {
        return Err(FetchError::EmptySource);
    }

    if is_remote(source) {
        let response = reqwest::get(source)
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|error| FetchError::Http(error.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|error| FetchError::Http(error.to_string()))?;
        Ok(bytes.to_vec())
    } else {
        tokio::fs::read(source)
            .await
            .map_err(|error| FetchError::Io(error.to_string()))
    }
}
