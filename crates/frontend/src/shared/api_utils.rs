//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing artist catalogue URLs.

use super::config::API_BASE;

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path relative to [`API_BASE`] (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/artists/42");
/// assert_eq!(url, "/api/artists/42");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// URL for the autocomplete search endpoint, with the query percent-encoded
pub fn artist_search_url(query: &str) -> String {
    api_url(&format!("/artists/search?q={}", urlencoding::encode(query)))
}

/// URL for the details of a single artist
pub fn artist_url(artist_id: &str) -> String {
    api_url(&format!("/artists/{}", urlencoding::encode(artist_id)))
}

/// URL for the similar-artists endpoint of an artist
pub fn similar_artists_url(artist_id: &str) -> String {
    api_url(&format!("/artists/{}/similar", urlencoding::encode(artist_id)))
}
