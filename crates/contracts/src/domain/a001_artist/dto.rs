use serde::{Deserialize, Serialize};

use super::aggregate::ArtistId;

/// Вариант автодополнения в строке поиска
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCandidate {
    pub id: ArtistId,
    pub name: String,
}

impl ArtistCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ArtistId::new(id),
            name: name.into(),
        }
    }
}

/// Ответ на поиск артистов по строке запроса
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Vec<ArtistCandidate>,
}
