//! Строка поиска артиста с автодополнением
//!
//! Typing updates the input immediately and queries the catalogue after a
//! quiet period. Picking an option selects the artist, loads similar artists
//! and scrolls to the results.

pub mod listbox;
pub mod submit;

use contracts::domain::a001_artist::{ArtistCandidate, ArtistId};
use leptos::html::{Div, Input};
use leptos::prelude::*;
use std::future::Future;
use thaw::{Spinner, SpinnerSize};

use crate::domain::a001_artist::store::{
    use_artist_list_store, use_artist_store, ArtistListStore, ArtistStore,
};
use crate::domain::a002_similar_artists::store::{use_similar_artists_store, SimilarArtistsStore};
use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::shared::config::{
    SEARCH_DEBOUNCE_MS, SEARCH_INPUT_ID, SEARCH_LISTBOX_ID, SEARCH_PLACEHOLDER,
};
use crate::shared::debounce::Debouncer;
use crate::shared::highlight::highlighted_label;
use crate::shared::icons::icon;
use crate::shared::scroll::{scroll_to_ref, scroll_to_top, ScrollTarget};

use listbox::{option_dom_id, ListboxAction, ListboxState};
use submit::{clear_input, submit_selection, SearchCollaborators};

/// The dropdown is rendered only while open and non-empty
pub fn listbox_visible(open: bool, option_count: usize) -> bool {
    open && option_count > 0
}

/// Spinner replaces the clear button while candidates are loading
pub fn spinner_visible(candidates_loading: bool) -> bool {
    candidates_loading
}

pub fn clear_button_visible(input: &str, candidates_loading: bool) -> bool {
    !input.is_empty() && !spinner_visible(candidates_loading)
}

/// Stores and DOM handles the search bar acts on
#[derive(Clone, Copy)]
struct LiveCollaborators {
    artist: ArtistStore,
    artist_list: ArtistListStore,
    similar: SimilarArtistsStore,
    ctx: AppGlobalContext,
    input_ref: NodeRef<Input>,
    anchor: NodeRef<Div>,
    input_value: RwSignal<String>,
}

impl SearchCollaborators for LiveCollaborators {
    fn update_artist(&self, candidate: ArtistCandidate) {
        let artist_id = candidate.id.clone();
        self.artist.update(candidate);
        wasm_bindgen_futures::spawn_local(self.artist.load_details(artist_id));
    }

    fn clear_artist(&self) {
        self.artist.clear();
    }

    fn first_artist_id(&self) -> Option<ArtistId> {
        self.artist.first_id_untracked()
    }

    fn is_drag_active(&self) -> bool {
        self.ctx.drag_active.get_untracked()
    }

    fn fetch_similar_artists(&self, artist_id: Option<ArtistId>) -> impl Future<Output = ()> {
        self.similar.fetch_similar_artists(artist_id)
    }

    fn is_similar_loading(&self) -> bool {
        self.similar.is_loading.get_untracked()
    }

    fn scroll(&self, target: ScrollTarget) {
        match target {
            ScrollTarget::Top => scroll_to_top(),
            ScrollTarget::Anchor { offset } => {
                if let Some(anchor) = self.anchor.get_untracked() {
                    scroll_to_ref(&anchor, offset);
                }
            }
        }
    }

    fn blur_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            let _ = input.blur();
        }
    }

    fn reset_input(&self) {
        self.input_value.set(String::new());
    }

    fn clear_candidates(&self) {
        self.artist_list.clear();
    }
}

#[component]
pub fn SearchBar(
    /// Элемент, к которому прокручивается страница после выбора (desktop)
    break_ref: NodeRef<Div>,
    /// Мобильная раскладка: после выбора прокрутка наверх
    #[prop(into)]
    is_mobile: Signal<bool>,
) -> impl IntoView {
    let artist = use_artist_store();
    let artist_list = use_artist_list_store();

    // Локальное состояние input (до debounce)
    let input_value = RwSignal::new(String::new());
    let listbox = RwSignal::new(ListboxState::default());
    let input_ref = NodeRef::<Input>::new();

    let collaborators = LiveCollaborators {
        artist,
        artist_list,
        similar: use_similar_artists_store(),
        ctx: use_global_context(),
        input_ref,
        anchor: break_ref,
        input_value,
    };

    let debouncer = StoredValue::new(Debouncer::new(SEARCH_DEBOUNCE_MS, move |query: String| {
        wasm_bindgen_futures::spawn_local(artist_list.fetch_artists(query));
    }));

    Effect::new(move |_| {
        let len = artist_list.options.with(Vec::len);
        listbox.update(|state| state.sync(len));
    });

    let submit = move |selection: Option<ArtistCandidate>| {
        debouncer.with_value(|d| d.cancel());
        listbox.update(ListboxState::close);
        let mobile = is_mobile.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            submit_selection(&collaborators, selection, mobile).await;
        });
    };

    let clear = move || {
        debouncer.with_value(|d| d.cancel());
        clear_input(&collaborators);
    };

    let handle_input = move |value: String| {
        input_value.set(value.clone());
        debouncer.with_value(|d| d.call(value));
    };

    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        let len = artist_list.options.with_untracked(Vec::len);
        let input_empty = input_value.with_untracked(String::is_empty);
        let (consumed, action) = listbox
            .try_update(|state| state.on_key(&ev.key(), len, input_empty))
            .unwrap_or((false, ListboxAction::None));
        if consumed {
            ev.prevent_default();
        }

        match action {
            ListboxAction::Select(index) => {
                if let Some(candidate) = artist_list
                    .options
                    .with_untracked(|options| options.get(index).cloned())
                {
                    submit(Some(candidate));
                }
            }
            ListboxAction::ClearSelection => {
                if artist.data.with_untracked(|data| !data.is_empty()) {
                    submit(None);
                }
            }
            ListboxAction::None => {}
        }
    };

    let field = move |wrapped: bool| {
        let (root_class, listbox_class, spinner_size) = if wrapped {
            (
                "search-bar search-bar--wrapped",
                "search-bar__listbox search-bar__listbox--wrapped",
                SpinnerSize::ExtraSmall,
            )
        } else {
            ("search-bar", "search-bar__listbox", SpinnerSize::Small)
        };

        view! {
            <div
                class=root_class
                role="combobox"
                aria-haspopup="listbox"
                aria-owns=SEARCH_LISTBOX_ID
                aria-expanded=move || listbox.with(|state| state.open).to_string()
            >
                <span class="search-bar__icon">{icon("search")}</span>
                <input
                    node_ref=input_ref
                    id=SEARCH_INPUT_ID
                    class="search-bar__input"
                    type="text"
                    autocomplete="off"
                    placeholder=SEARCH_PLACEHOLDER
                    aria-autocomplete="list"
                    aria-controls=SEARCH_LISTBOX_ID
                    aria-activedescendant=move || {
                        listbox.with(|state| {
                            if state.open { state.highlighted.map(option_dom_id) } else { None }
                        })
                    }
                    prop:value=move || input_value.get()
                    on:input=move |ev| handle_input(event_target_value(&ev))
                    on:keydown=handle_keydown
                    on:focus=move |_| {
                        let len = artist_list.options.with_untracked(Vec::len);
                        listbox.update(|state| state.focus(len));
                    }
                    on:blur=move |_| listbox.update(ListboxState::blur)
                />

                {move || {
                    let options = artist_list.options.get();
                    let open = listbox.with(|state| state.open);
                    listbox_visible(open, options.len()).then(|| {
                        let query = input_value.get();
                        view! {
                            <ul
                                id=SEARCH_LISTBOX_ID
                                role="listbox"
                                class=listbox_class
                            >
                                {options
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, candidate)| {
                                        let label = highlighted_label(&candidate.name, &query);
                                        view! {
                                            <li
                                                id=option_dom_id(index)
                                                role="option"
                                                class="search-bar__option"
                                                class:search-bar__option--focused=move || {
                                                    listbox.with(|state| state.is_highlighted(index))
                                                }
                                                aria-selected=move || {
                                                    listbox.with(|state| state.is_highlighted(index)).to_string()
                                                }
                                                on:mouseenter=move |_| listbox.update(|state| state.hover(index))
                                                on:mousedown=move |ev| {
                                                    // keep focus on the input until the choice is handled
                                                    ev.prevent_default();
                                                    submit(Some(candidate.clone()));
                                                }
                                            >
                                                {label}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
                }}

                {move || spinner_visible(artist_list.is_loading()).then(|| view! {
                    <div class="search-bar__spinner">
                        <Spinner size=spinner_size.clone() />
                    </div>
                })}

                {move || {
                    let loading = artist_list.is_loading();
                    input_value
                        .with(|value| clear_button_visible(value, loading))
                        .then(|| view! {
                            <button
                                type="button"
                                class="search-bar__clear"
                                title="Clear"
                                aria-label="Clear"
                                on:click=move |_| clear()
                            >
                                {icon("x")}
                            </button>
                        })
                }}
            </div>
        }
    };

    view! {
        {move || {
            if artist.is_loaded() {
                view! { <div class="search-bar__scroll-wrapper">{field(true)}</div> }.into_any()
            } else {
                field(false).into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listbox_hidden_without_options() {
        assert!(listbox_visible(true, 3));
        assert!(!listbox_visible(true, 0));
        assert!(!listbox_visible(false, 3));
    }

    #[test]
    fn test_clear_button_needs_text() {
        assert!(clear_button_visible("Daft", false));
        assert!(!clear_button_visible("", false));
    }

    #[test]
    fn test_spinner_and_clear_button_are_exclusive() {
        assert!(spinner_visible(true));
        assert!(!clear_button_visible("Daft", true));

        assert!(!spinner_visible(false));
        assert!(clear_button_visible("Daft", false));
    }
}
