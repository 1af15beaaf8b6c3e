use serde::{Deserialize, Serialize};
use std::fmt;

use super::dto::ArtistCandidate;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор артиста во внешнем каталоге
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(pub String);

impl ArtistId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtistId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Выбранный артист
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,

    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Artist {
    /// Merge details fetched later into a record built from a candidate.
    /// The id is kept; empty detail fields never overwrite known data.
    pub fn merge_details(&mut self, details: Artist) {
        if !details.name.is_empty() {
            self.name = details.name;
        }
        if !details.genres.is_empty() {
            self.genres = details.genres;
        }
        if details.image_url.is_some() {
            self.image_url = details.image_url;
        }
    }
}

impl From<ArtistCandidate> for Artist {
    fn from(candidate: ArtistCandidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            genres: Vec::new(),
            image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_id_is_transparent() {
        let json = serde_json::to_string(&ArtistId::new("4tZwfgrHOc3mvqYlEYSvVi")).unwrap();
        assert_eq!(json, "\"4tZwfgrHOc3mvqYlEYSvVi\"");
    }

    #[test]
    fn test_artist_from_candidate() {
        let artist = Artist::from(ArtistCandidate::new("1", "Daft Punk"));
        assert_eq!(artist.id.as_str(), "1");
        assert_eq!(artist.name, "Daft Punk");
        assert!(artist.genres.is_empty());
        assert_eq!(artist.image_url, None);
    }

    #[test]
    fn test_artist_deserialize_without_optional_fields() {
        let artist: Artist = serde_json::from_str(r#"{"id":"7","name":"Air"}"#).unwrap();
        assert_eq!(artist.id, ArtistId::from("7"));
        assert!(artist.genres.is_empty());
        assert_eq!(artist.image_url, None);
    }

    #[test]
    fn test_merge_details_keeps_known_fields() {
        let mut artist = Artist::from(ArtistCandidate::new("1", "Daft Punk"));
        artist.merge_details(Artist {
            id: ArtistId::from("ignored"),
            name: String::new(),
            genres: vec!["french house".into(), "electro".into()],
            image_url: Some("https://img/1.jpg".into()),
        });
        assert_eq!(artist.id.as_str(), "1");
        assert_eq!(artist.name, "Daft Punk");
        assert_eq!(artist.genres, vec!["french house", "electro"]);
        assert_eq!(artist.image_url.as_deref(), Some("https://img/1.jpg"));
    }
}
