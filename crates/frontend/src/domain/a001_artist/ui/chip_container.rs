use leptos::prelude::*;

use crate::domain::a001_artist::store::use_artist_store;

/// The wrapper exists only while an artist is selected
pub fn chip_container_visible(artist_loaded: bool) -> bool {
    artist_loaded
}

/// Контейнер чипов: показывается только когда артист выбран
///
/// Renders nothing at all (no empty wrapper) until an artist is loaded.
#[component]
pub fn ChipContainer(children: ChildrenFn) -> impl IntoView {
    let artist = use_artist_store();

    move || {
        chip_container_visible(artist.is_loaded())
            .then(|| view! { <div class="chip-container">{children()}</div> })
    }
}
