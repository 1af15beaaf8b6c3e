use crate::domain::a001_artist::store::{ArtistListStore, ArtistStore};
use crate::domain::a002_similar_artists::store::SimilarArtistsStore;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::ExplorePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page-wide UI flags (drag state, mobile layout)
    let ctx = AppGlobalContext::new();
    ctx.init_viewport_tracking();
    provide_context(ctx);

    // Stores shared by the search bar, chips and results
    provide_context(ArtistStore::new());
    provide_context(ArtistListStore::new());
    provide_context(SimilarArtistsStore::new());

    view! {
        <ExplorePage />
    }
}
