//! Selection and clearing flow of the search bar, independent of the DOM

use contracts::domain::a001_artist::{ArtistCandidate, ArtistId};
use std::future::Future;

use crate::shared::config::SCROLL_ANCHOR_OFFSET;
use crate::shared::scroll::{scroll_target, ScrollTarget};

/// Everything the search bar reads or mutates outside its own local state
pub trait SearchCollaborators {
    fn update_artist(&self, candidate: ArtistCandidate);
    fn clear_artist(&self);
    fn first_artist_id(&self) -> Option<ArtistId>;
    fn is_drag_active(&self) -> bool;
    fn fetch_similar_artists(&self, artist_id: Option<ArtistId>) -> impl Future<Output = ()>;
    fn is_similar_loading(&self) -> bool;
    fn scroll(&self, target: ScrollTarget);
    fn blur_input(&self);
    /// Set the local input text to ""
    fn reset_input(&self);
    fn clear_candidates(&self);
}

/// × button: empty the input and drop the candidates
pub fn clear_input<C: SearchCollaborators>(collaborators: &C) {
    collaborators.reset_input();
    collaborators.clear_candidates();
}

/// Handle a choice from the dropdown (`Some`) or a cleared selection (`None`).
///
/// A cleared selection only reloads similar artists while a drag is in
/// progress, keyed on the artist that was selected before clearing.
pub async fn submit_selection<C: SearchCollaborators>(
    collaborators: &C,
    selection: Option<ArtistCandidate>,
    is_mobile: bool,
) {
    match selection {
        None => {
            let previous_id = collaborators.first_artist_id();
            collaborators.clear_artist();
            if collaborators.is_drag_active() {
                collaborators.fetch_similar_artists(previous_id).await;
            }
        }
        Some(candidate) => {
            collaborators.update_artist(candidate);
            collaborators
                .fetch_similar_artists(collaborators.first_artist_id())
                .await;
        }
    }

    if let Some(target) = scroll_target(
        is_mobile,
        collaborators.is_similar_loading(),
        SCROLL_ANCHOR_OFFSET,
    ) {
        collaborators.scroll(target);
    }

    collaborators.blur_input();
    collaborators.reset_input();
    collaborators.clear_candidates();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recorder {
        artists: RefCell<Vec<ArtistId>>,
        input: RefCell<String>,
        candidates: RefCell<Vec<ArtistCandidate>>,
        drag_active: Cell<bool>,
        similar_loading_after_fetch: Cell<bool>,
        similar_loading: Cell<bool>,
        similar_fetches: RefCell<Vec<Option<ArtistId>>>,
        scrolls: RefCell<Vec<ScrollTarget>>,
        blurred: Cell<u32>,
    }

    impl Recorder {
        fn with_state(input: &str, candidates: Vec<ArtistCandidate>) -> Self {
            let recorder = Self::default();
            *recorder.input.borrow_mut() = input.to_string();
            *recorder.candidates.borrow_mut() = candidates;
            recorder
        }
    }

    impl SearchCollaborators for Recorder {
        fn update_artist(&self, candidate: ArtistCandidate) {
            *self.artists.borrow_mut() = vec![candidate.id];
        }

        fn clear_artist(&self) {
            self.artists.borrow_mut().clear();
        }

        fn first_artist_id(&self) -> Option<ArtistId> {
            self.artists.borrow().first().cloned()
        }

        fn is_drag_active(&self) -> bool {
            self.drag_active.get()
        }

        fn fetch_similar_artists(&self, artist_id: Option<ArtistId>) -> impl Future<Output = ()> {
            self.similar_fetches.borrow_mut().push(artist_id);
            self.similar_loading.set(self.similar_loading_after_fetch.get());
            std::future::ready(())
        }

        fn is_similar_loading(&self) -> bool {
            self.similar_loading.get()
        }

        fn scroll(&self, target: ScrollTarget) {
            self.scrolls.borrow_mut().push(target);
        }

        fn blur_input(&self) {
            self.blurred.set(self.blurred.get() + 1);
        }

        fn reset_input(&self) {
            self.input.borrow_mut().clear();
        }

        fn clear_candidates(&self) {
            self.candidates.borrow_mut().clear();
        }
    }

    fn daft_punk() -> ArtistCandidate {
        ArtistCandidate::new("1", "Daft Punk")
    }

    #[tokio::test]
    async fn test_select_fetches_similar_once_and_resets() {
        for is_mobile in [true, false] {
            let recorder = Recorder::with_state("Da", vec![daft_punk()]);
            submit_selection(&recorder, Some(daft_punk()), is_mobile).await;

            assert_eq!(*recorder.similar_fetches.borrow(), vec![Some(ArtistId::from("1"))]);
            assert_eq!(recorder.first_artist_id(), Some(ArtistId::from("1")));
            assert!(recorder.input.borrow().is_empty());
            assert!(recorder.candidates.borrow().is_empty());
            assert_eq!(recorder.blurred.get(), 1);
        }
    }

    #[tokio::test]
    async fn test_select_replaces_previous_artist() {
        let recorder = Recorder::default();
        recorder.update_artist(ArtistCandidate::new("2", "Justice"));
        submit_selection(&recorder, Some(daft_punk()), false).await;
        assert_eq!(*recorder.similar_fetches.borrow(), vec![Some(ArtistId::from("1"))]);
    }

    #[tokio::test]
    async fn test_clear_without_drag_skips_fetch() {
        let recorder = Recorder::with_state("", vec![]);
        recorder.update_artist(daft_punk());

        submit_selection(&recorder, None, false).await;

        assert!(recorder.similar_fetches.borrow().is_empty());
        assert_eq!(recorder.first_artist_id(), None);
        assert_eq!(recorder.blurred.get(), 1);
    }

    #[tokio::test]
    async fn test_clear_with_drag_fetches_previous_artist() {
        let recorder = Recorder::default();
        recorder.update_artist(daft_punk());
        recorder.drag_active.set(true);

        submit_selection(&recorder, None, true).await;

        assert_eq!(*recorder.similar_fetches.borrow(), vec![Some(ArtistId::from("1"))]);
        assert_eq!(recorder.first_artist_id(), None);
    }

    #[tokio::test]
    async fn test_mobile_scrolls_to_top() {
        let recorder = Recorder::default();
        submit_selection(&recorder, Some(daft_punk()), true).await;
        assert_eq!(*recorder.scrolls.borrow(), vec![ScrollTarget::Top]);
    }

    #[tokio::test]
    async fn test_desktop_scrolls_to_anchor() {
        let recorder = Recorder::default();
        submit_selection(&recorder, Some(daft_punk()), false).await;
        assert_eq!(
            *recorder.scrolls.borrow(),
            vec![ScrollTarget::Anchor { offset: -50.0 }]
        );
    }

    #[tokio::test]
    async fn test_no_scroll_while_similar_loading() {
        for is_mobile in [true, false] {
            let recorder = Recorder::default();
            recorder.similar_loading_after_fetch.set(true);
            submit_selection(&recorder, Some(daft_punk()), is_mobile).await;

            assert!(recorder.scrolls.borrow().is_empty());
            // the rest of the reset still happens
            assert!(recorder.input.borrow().is_empty());
            assert_eq!(recorder.blurred.get(), 1);
        }
    }

    #[test]
    fn test_clear_input_empties_text_and_candidates() {
        let recorder = Recorder::with_state("Daft", vec![daft_punk()]);
        clear_input(&recorder);
        assert!(recorder.input.borrow().is_empty());
        assert!(recorder.candidates.borrow().is_empty());

        // idempotent from an already empty state
        clear_input(&recorder);
        assert!(recorder.input.borrow().is_empty());
        assert!(recorder.candidates.borrow().is_empty());
    }
}
