//! Stores for the selected artist and the autocomplete candidate list
//!
//! Both are `Copy` handles over signals, provided through context by `App`.

use contracts::domain::a001_artist::{Artist, ArtistCandidate, ArtistId};
use leptos::prelude::*;

use super::api;

/// Текущий выбранный артист
#[derive(Clone, Copy)]
pub struct ArtistStore {
    pub data: RwSignal<Vec<Artist>>,
}

impl ArtistStore {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.data.with(|data| !data.is_empty())
    }

    pub fn first_id_untracked(&self) -> Option<ArtistId> {
        self.data
            .with_untracked(|data| data.first().map(|artist| artist.id.clone()))
    }

    /// Replace the selection with `candidate`
    pub fn update(&self, candidate: ArtistCandidate) {
        log::debug!("artist selected: {} ({})", candidate.name, candidate.id);
        self.data.set(vec![candidate.into()]);
    }

    pub fn clear(&self) {
        self.data.set(Vec::new());
    }

    /// Merge fetched details into the selection if it still points at `artist_id`
    pub fn apply_details(&self, artist_id: &ArtistId, details: Artist) {
        self.data.update(|data| {
            if let Some(first) = data.first_mut() {
                if &first.id == artist_id {
                    first.merge_details(details);
                }
            }
        });
    }

    /// Дозагрузка жанров и изображения выбранного артиста
    pub async fn load_details(self, artist_id: ArtistId) {
        match api::get_artist(&artist_id).await {
            Ok(details) => self.apply_details(&artist_id, details),
            Err(e) => log::error!("Failed to load artist {}: {}", artist_id, e),
        }
    }
}

impl Default for ArtistStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Варианты автодополнения
///
/// Responses are applied in arrival order, so a slow earlier query can
/// overwrite a newer one.
#[derive(Clone, Copy)]
pub struct ArtistListStore {
    pub options: RwSignal<Vec<ArtistCandidate>>,
    in_flight: RwSignal<usize>,
}

impl ArtistListStore {
    pub fn new() -> Self {
        Self {
            options: RwSignal::new(Vec::new()),
            in_flight: RwSignal::new(0),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    pub fn clear(&self) {
        self.options.set(Vec::new());
    }

    fn begin_request(&self) {
        self.in_flight.update(|n| *n += 1);
    }

    fn finish_request(&self, result: Result<Vec<ArtistCandidate>, String>) {
        match result {
            Ok(artists) => self.options.set(artists),
            Err(e) => {
                log::error!("Failed to search artists: {}", e);
                self.options.set(Vec::new());
            }
        }
        self.in_flight.update(|n| *n = n.saturating_sub(1));
    }

    pub async fn fetch_artists(self, query: String) {
        log::debug!("searching artists for '{}'", query);
        self.begin_request();
        let result = api::search_artists(&query).await;
        self.finish_request(result);
    }
}

impl Default for ArtistListStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_artist_store() -> ArtistStore {
    leptos::context::use_context::<ArtistStore>().expect("ArtistStore context not found")
}

pub fn use_artist_list_store() -> ArtistListStore {
    leptos::context::use_context::<ArtistListStore>().expect("ArtistListStore context not found")
}
