use contracts::domain::a001_artist::ArtistId;
use contracts::domain::a002_similar_artists::{SimilarArtist, SimilarArtistsResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::similar_artists_url;

/// Получить похожих артистов для выбранного
pub async fn get_similar_artists(artist_id: &ArtistId) -> Result<Vec<SimilarArtist>, String> {
    let response = Request::get(&similar_artists_url(artist_id.as_str()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SimilarArtistsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.artists)
}
