use contracts::domain::a002_similar_artists::SimilarArtist;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

use crate::domain::a002_similar_artists::store::use_similar_artists_store;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;

/// Percentage label for a similarity score, clamped to `0..=100`
pub fn format_match_score(score: f64) -> String {
    format!("{}%", (score * 100.0).round().clamp(0.0, 100.0) as u32)
}

/// Список похожих артистов. Карточки можно перетаскивать.
#[component]
pub fn SimilarArtistsList() -> impl IntoView {
    let similar = use_similar_artists_store();
    let ctx = use_global_context();

    let card = move |artist: SimilarArtist| {
        view! {
            <li
                class="similar-artist"
                draggable="true"
                on:dragstart=move |_| ctx.start_drag()
                on:dragend=move |_| ctx.end_drag()
            >
                <span class="similar-artist__grip">{icon("grip")}</span>
                {match artist.image_url {
                    Some(url) => view! {
                        <img class="similar-artist__image" src=url alt=artist.name.clone() />
                    }.into_any(),
                    None => view! {
                        <span class="similar-artist__image similar-artist__image--empty">{icon("music")}</span>
                    }.into_any(),
                }}
                <span class="similar-artist__name">{artist.name}</span>
                <span class="similar-artist__score">{format_match_score(artist.match_score)}</span>
            </li>
        }
    };

    move || {
        if similar.is_loading.get() {
            view! {
                <div class="similar-artists similar-artists--loading">
                    <Spinner size=SpinnerSize::Medium />
                </div>
            }
            .into_any()
        } else {
            let artists = similar.data.get();
            if artists.is_empty() {
                view! { <></> }.into_any()
            } else {
                view! {
                    <ul class="similar-artists">
                        {artists.into_iter().map(card).collect_view()}
                    </ul>
                }
                .into_any()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_match_score() {
        assert_eq!(format_match_score(0.0), "0%");
        assert_eq!(format_match_score(0.756), "76%");
        assert_eq!(format_match_score(1.0), "100%");
        assert_eq!(format_match_score(1.7), "100%");
        assert_eq!(format_match_score(-0.2), "0%");
    }
}
