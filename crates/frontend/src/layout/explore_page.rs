use leptos::html::Div;
use leptos::prelude::*;

use crate::domain::a001_artist::ui::{ChipContainer, GenreChips, SearchBar};
use crate::domain::a002_similar_artists::ui::SimilarArtistsList;
use crate::layout::global_context::use_global_context;

/// Main page layout:
/// ```text
/// +------------------------------------------+
/// |         SearchBar (+ genre chips)        |
/// +------------------------------------------+  <- break anchor
/// |           Similar artists list           |
/// +------------------------------------------+
/// ```
#[component]
pub fn ExplorePage() -> impl IntoView {
    let ctx = use_global_context();
    let break_ref = NodeRef::<Div>::new();

    view! {
        <div class="explore">
            <header class="explore__header">
                <SearchBar break_ref=break_ref is_mobile=ctx.is_mobile />
                <ChipContainer>
                    <GenreChips />
                </ChipContainer>
            </header>

            <div class="explore__break" node_ref=break_ref></div>

            <main class="explore__results">
                <SimilarArtistsList />
            </main>
        </div>
    }
}
