// SPDX-License-Identifier: MPL-2.0
//! Profile settings form.
//!
//! Renders the editable profile of the signed-in user, validates it field by
//! field, and submits it as a whole. The avatar slot previews a locally
//! chosen image immediately while its upload runs; the uploaded URL then
//! replaces the preview.
//!
//! The component never performs I/O itself: [`update`] returns an [`Event`]
//! and the application runs the matching port call, dispatches the result
//! to the store, and calls [`State::sync`].

pub mod avatar_cache;
pub mod state;
pub mod view;

pub use avatar_cache::AvatarCache;
pub use state::{State, ValidationErrors};
pub use view::ViewContext;

use crate::domain::avatar::{DataUri, SelectionId};
use crate::domain::profile::{AccessToken, ProfileField, ProfileValues};
use crate::error::ApiError;
use crate::i18n::I18n;
use crate::store::Store;
use crate::ui::page_metadata::PageMetadata;
use std::path::PathBuf;

/// Messages emitted by the profile settings form.
#[derive(Debug, Clone)]
pub enum Message {
    /// A field value has changed.
    FieldChanged(ProfileField, String),
    /// The Save button was pressed.
    Submit,
    /// The avatar slot was clicked.
    PickAvatar,
    /// The file dialog closed (`None` when cancelled).
    AvatarChosen(Option<PathBuf>),
    /// The local read of a chosen file finished.
    LocalPreviewLoaded {
        selection: SelectionId,
        result: Result<DataUri, ApiError>,
    },
    /// A remote avatar finished downloading for display.
    RemoteAvatarLoaded {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// Submit the validated values with the session token.
    SubmitRequested {
        token: AccessToken,
        values: ProfileValues,
    },
    /// Submit was pressed without a session token.
    SubmitWithoutToken,
    /// Open the native image picker.
    PickAvatarRequested,
    /// Start reading and uploading the file of a new selection.
    AvatarSelected { selection: SelectionId, path: PathBuf },
    /// Reading the chosen file failed.
    LocalPreviewFailed(ApiError),
}

/// Returns the fetch to run when the form is shown: only with a token.
#[must_use]
pub fn on_mount(store: &Store) -> Option<AccessToken> {
    store.access_token().cloned()
}

/// Head metadata of the profile page.
#[must_use]
pub fn page_metadata(i18n: &I18n) -> PageMetadata {
    PageMetadata::new()
        .title(i18n.tr("profile-settings-title"))
        .description(i18n.tr("profile-settings-description"))
}

/// Process a profile settings message and return the corresponding event.
pub fn update(
    state: &mut State,
    cache: &mut AvatarCache,
    message: Message,
    store: &Store,
) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            state.set_field(field, value);
            Event::None
        }
        Message::Submit => {
            if !state.can_submit(store) || !state.validate_all() {
                return Event::None;
            }
            match store.access_token() {
                Some(token) => {
                    state.mark_submitting();
                    Event::SubmitRequested {
                        token: token.clone(),
                        values: state.values().trimmed(),
                    }
                }
                None => Event::SubmitWithoutToken,
            }
        }
        Message::PickAvatar => Event::PickAvatarRequested,
        Message::AvatarChosen(Some(path)) => {
            let selection = state.begin_selection();
            Event::AvatarSelected { selection, path }
        }
        Message::AvatarChosen(None) => Event::None,
        Message::LocalPreviewLoaded { selection, result } => match result {
            Ok(data) => {
                state.apply_local_preview(selection, data);
                Event::None
            }
            Err(err) => Event::LocalPreviewFailed(err),
        },
        Message::RemoteAvatarLoaded { url, result } => {
            cache.finish(url, result);
            Event::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::UserProfile;
    use crate::store::Action;

    fn complete_user() -> UserProfile {
        UserProfile {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "0123".into(),
            dob: "1990-04-12".into(),
            avatar: None,
        }
    }

    fn signed_in_store() -> Store {
        let mut store = Store::with_token(AccessToken::new("token"));
        store.dispatch(Action::ProfileFetched(Ok(complete_user())));
        store
    }

    #[test]
    fn mount_fetches_only_with_token() {
        assert!(on_mount(&Store::new()).is_none());
        assert_eq!(
            on_mount(&signed_in_store()).map(|t| t.expose().to_string()),
            Some("token".to_string())
        );
    }

    #[test]
    fn valid_submit_requests_update_with_current_values() {
        let store = signed_in_store();
        let mut state = State::new();
        let mut cache = AvatarCache::default();
        state.sync(&store);

        update(
            &mut state,
            &mut cache,
            Message::FieldChanged(ProfileField::Phone, "9999".into()),
            &store,
        );
        let event = update(&mut state, &mut cache, Message::Submit, &store);

        match event {
            Event::SubmitRequested { token, values } => {
                assert_eq!(token.expose(), "token");
                assert_eq!(values.phone, "9999");
            }
            other => panic!("expected SubmitRequested, got {other:?}"),
        }
        assert!(state.is_submitting());
    }

    #[test]
    fn submitted_values_are_trimmed_like_validation() {
        let store = signed_in_store();
        let mut state = State::new();
        let mut cache = AvatarCache::default();
        state.sync(&store);

        for (field, raw) in [
            (ProfileField::Email, "  a@b.com  "),
            (ProfileField::FirstName, "   x"),
        ] {
            update(
                &mut state,
                &mut cache,
                Message::FieldChanged(field, raw.into()),
                &store,
            );
        }
        let event = update(&mut state, &mut cache, Message::Submit, &store);

        match event {
            Event::SubmitRequested { values, .. } => {
                assert_eq!(values.email, "a@b.com");
                assert_eq!(values.first_name, "x");
                assert_eq!(values.last_name, "Doe");
            }
            other => panic!("expected SubmitRequested, got {other:?}"),
        }
        assert_eq!(state.values().email, "  a@b.com  ");
    }

    #[test]
    fn submit_while_profile_is_loading_sends_nothing() {
        let mut store = signed_in_store();
        let mut state = State::new();
        let mut cache = AvatarCache::default();
        state.sync(&store);
        store.dispatch(Action::ProfileFetchStarted);

        let event = update(&mut state, &mut cache, Message::Submit, &store);

        assert!(matches!(event, Event::None));
        assert!(!state.is_submitting());
    }

    #[test]
    fn invalid_submit_shows_errors_and_sends_nothing() {
        let store = signed_in_store();
        let mut state = State::new();
        let mut cache = AvatarCache::default();
        state.sync(&store);
        update(
            &mut state,
            &mut cache,
            Message::FieldChanged(ProfileField::Email, "nope".into()),
            &store,
        );

        let event = update(&mut state, &mut cache, Message::Submit, &store);
        assert!(matches!(event, Event::None));
        assert!(state.errors().has_errors());
        assert!(!state.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let store = signed_in_store();
        let mut state = State::new();
        let mut cache = AvatarCache::default();
        state.sync(&store);

        let first = update(&mut state, &mut cache, Message::Submit, &store);
        let second = update(&mut state, &mut cache, Message::Submit, &store);
        assert!(matches!(first, Event::SubmitRequested { .. }));
        assert!(matches!(second, Event::None));
    }

    #[test]
    fn submit_without_token_is_reported() {
        let mut store = Store::new();
        store.dispatch(Action::ProfileFetched(Ok(complete_user())));
        let mut state = State::new();
        let mut cache = AvatarCache::default();
        state.sync(&store);

        let event = update(&mut state, &mut cache, Message::Submit, &store);
        assert!(matches!(event, Event::SubmitWithoutToken));
    }

    #[test]
    fn each_chosen_file_gets_a_newer_selection() {
        let store = Store::new();
        let mut state = State::new();
        let mut cache = AvatarCache::default();

        let first = update(
            &mut state,
            &mut cache,
            Message::AvatarChosen(Some(PathBuf::from("a.png"))),
            &store,
        );
        let second = update(
            &mut state,
            &mut cache,
            Message::AvatarChosen(Some(PathBuf::from("b.png"))),
            &store,
        );

        match (first, second) {
            (
                Event::AvatarSelected { selection: a, .. },
                Event::AvatarSelected { selection: b, path },
            ) => {
                assert!(b > a);
                assert_eq!(path, PathBuf::from("b.png"));
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn cancelled_dialog_does_nothing() {
        let mut state = State::new();
        let mut cache = AvatarCache::default();
        let event = update(&mut state, &mut cache, Message::AvatarChosen(None), &Store::new());
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn page_metadata_uses_translated_title() {
        let i18n = I18n::new(Some("en-US".into()), None, &crate::config::Config::default());
        let metadata = page_metadata(&i18n);
        assert_eq!(metadata.title.as_deref(), Some("Profile settings"));
        assert!(metadata.author.is_none());
    }
}
