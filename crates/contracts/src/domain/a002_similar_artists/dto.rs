use serde::{Deserialize, Serialize};

use crate::domain::a001_artist::ArtistId;

/// Похожий артист
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarArtist {
    pub id: ArtistId,
    pub name: String,

    /// Similarity in `0.0..=1.0` as reported by the catalogue
    #[serde(rename = "matchScore", default)]
    pub match_score: f64,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Ответ со списком похожих артистов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarArtistsResponse {
    pub artists: Vec<SimilarArtist>,
}
