use leptos::prelude::*;

use crate::domain::a001_artist::store::use_artist_store;

/// Жанры выбранного артиста в виде чипов
#[component]
pub fn GenreChips() -> impl IntoView {
    let artist = use_artist_store();
    let genres = move || {
        artist
            .data
            .with(|data| data.first().map(|a| a.genres.clone()).unwrap_or_default())
    };

    move || {
        let genres = genres();
        (!genres.is_empty()).then(|| {
            view! {
                <ul class="genre-chips">
                    {genres
                        .into_iter()
                        .map(|genre| view! { <li class="genre-chip">{genre}</li> })
                        .collect_view()}
                </ul>
            }
        })
    }
}
