use contracts::domain::a001_artist::{Artist, ArtistCandidate, ArtistId, ArtistSearchResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{artist_search_url, artist_url};

/// Поиск артистов по строке для автодополнения
pub async fn search_artists(query: &str) -> Result<Vec<ArtistCandidate>, String> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let response = Request::get(&artist_search_url(query.trim()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ArtistSearchResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.artists)
}

/// Получить карточку артиста (жанры, изображение)
pub async fn get_artist(artist_id: &ArtistId) -> Result<Artist, String> {
    let response = Request::get(&artist_url(artist_id.as_str()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
