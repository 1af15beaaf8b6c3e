use contracts::domain::a001_artist::ArtistId;
use contracts::domain::a002_similar_artists::SimilarArtist;
use leptos::prelude::*;

use super::api;

/// Похожие артисты для текущего выбора
///
/// Only the latest request may write: a response for an artist that was
/// superseded in the meantime is dropped and leaves the loading flag alone.
#[derive(Clone, Copy)]
pub struct SimilarArtistsStore {
    pub data: RwSignal<Vec<SimilarArtist>>,
    pub is_loading: RwSignal<bool>,
    latest_request: RwSignal<u64>,
}

impl SimilarArtistsStore {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            latest_request: RwSignal::new(0),
        }
    }

    /// Supersede any request in flight and return the new request token
    fn begin_request(&self) -> u64 {
        self.latest_request.update(|n| *n += 1);
        self.is_loading.set(true);
        self.latest_request.get_untracked()
    }

    fn finish_request(&self, token: u64, result: Result<Vec<SimilarArtist>, String>) {
        if self.latest_request.get_untracked() != token {
            log::debug!("dropping superseded similar artists response #{}", token);
            return;
        }
        match result {
            Ok(artists) => self.data.set(artists),
            Err(e) => {
                log::error!("Failed to load similar artists: {}", e);
                self.data.set(Vec::new());
            }
        }
        self.is_loading.set(false);
    }

    /// Drop the result and any request still in flight
    fn reset(&self) {
        self.latest_request.update(|n| *n += 1);
        self.data.set(Vec::new());
        self.is_loading.set(false);
    }

    /// Load similar artists for `artist_id`. `None` resets the result
    /// without issuing a request. Failures resolve to an empty result.
    pub async fn fetch_similar_artists(self, artist_id: Option<ArtistId>) {
        let Some(artist_id) = artist_id else {
            self.reset();
            return;
        };

        log::debug!("loading similar artists for {}", artist_id);
        let token = self.begin_request();
        let result = api::get_similar_artists(&artist_id).await;
        self.finish_request(token, result);
    }
}

impl Default for SimilarArtistsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_similar_artists_store() -> SimilarArtistsStore {
    leptos::context::use_context::<SimilarArtistsStore>()
        .expect("SimilarArtistsStore context not found")
}
