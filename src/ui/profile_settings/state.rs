// SPDX-License-Identifier: MPL-2.0
//! State management for the profile settings form.

use crate::domain::avatar::{AvatarPreview, DataUri, SelectionCounter, SelectionId};
use crate::domain::profile::{ProfileField, ProfileValues, UserProfile};
use crate::store::Store;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use validator::ValidateEmail;

/// Date formats accepted for the date of birth.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // ISO: 2024-03-15
    "%d/%m/%Y", // European: 15/03/2024
    "%Y/%m/%d", // Alternative: 2024/03/15
];

/// Validation failures, one i18n key per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: BTreeMap<ProfileField, &'static str>,
}

impl ValidationErrors {
    /// Returns true if there are any validation errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.by_field.is_empty()
    }

    /// Message key of the error shown under `field`.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&'static str> {
        self.by_field.get(&field).copied()
    }

    fn set(&mut self, field: ProfileField, error: Option<&'static str>) {
        match error {
            Some(key) => {
                self.by_field.insert(field, key);
            }
            None => {
                self.by_field.remove(&field);
            }
        }
    }
}

/// State of the profile settings form.
#[derive(Debug, Clone, Default)]
pub struct State {
    values: ProfileValues,
    errors: ValidationErrors,
    /// User record the values were last seeded from.
    seeded_from: Option<UserProfile>,
    /// True from submit until the store leaves `Loading`.
    submitting: bool,
    preview: AvatarPreview,
    selections: SelectionCounter,
    /// Selection whose upload URL has already been shown.
    applied_upload: Option<SelectionId>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn values(&self) -> &ProfileValues {
        &self.values
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn preview(&self) -> &AvatarPreview {
        &self.preview
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submission is blocked while one is in flight or the profile is loading.
    #[must_use]
    pub fn can_submit(&self, store: &Store) -> bool {
        !self.submitting && !store.status().is_loading()
    }

    /// Sets a field value and revalidates that field only.
    pub fn set_field(&mut self, field: ProfileField, value: String) {
        self.errors.set(field, validate_field(field, &value));
        self.values.set(field, value);
    }

    /// Validates all fields and returns true if all are valid.
    pub fn validate_all(&mut self) -> bool {
        for field in ProfileField::all() {
            let error = validate_field(*field, self.values.get(*field));
            self.errors.set(*field, error);
        }
        !self.errors.has_errors()
    }

    pub(super) fn mark_submitting(&mut self) {
        self.submitting = true;
    }

    /// Starts a new avatar selection, superseding every earlier one.
    pub(super) fn begin_selection(&mut self) -> SelectionId {
        self.selections.next()
    }

    /// Returns true if `selection` is the most recent avatar choice.
    #[must_use]
    pub fn is_current_selection(&self, selection: SelectionId) -> bool {
        self.selections.is_latest(selection)
    }

    /// Applies a finished local read.
    ///
    /// Returns false when the read is stale: it belongs to a superseded
    /// selection, or the upload of the same selection already replaced it.
    pub fn apply_local_preview(&mut self, selection: SelectionId, data: DataUri) -> bool {
        if !self.selections.is_latest(selection) || self.applied_upload == Some(selection) {
            return false;
        }
        self.preview = AvatarPreview::Local { selection, data };
        true
    }

    /// Reconciles the form with the store after a dispatch.
    ///
    /// - A changed user record reseeds every value and drops edits in
    ///   progress; its avatar, when present, becomes the preview.
    /// - An upload URL for the latest selection replaces the preview once.
    /// - `submitting` ends when the store is no longer loading.
    pub fn sync(&mut self, store: &Store) {
        let user = store.user();
        if user != self.seeded_from.as_ref() {
            self.values = ProfileValues::from_user(user);
            self.errors = ValidationErrors::default();
            if let Some(avatar) = user.and_then(UserProfile::avatar_ref) {
                self.preview = AvatarPreview::Existing(avatar.to_string());
            }
            self.seeded_from = user.cloned();
        }

        if let Some((selection, url)) = store.uploaded_image_url() {
            if self.selections.is_latest(selection) && self.applied_upload != Some(selection) {
                self.preview = AvatarPreview::Uploaded {
                    selection,
                    url: url.to_string(),
                };
                self.applied_upload = Some(selection);
            }
        }

        if self.submitting && !store.status().is_loading() {
            self.submitting = false;
        }
    }
}

// =============================================================================
// Validation Functions
// =============================================================================

/// Returns the i18n key of the first rule `value` breaks, if any.
#[must_use]
pub fn validate_field(field: ProfileField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("validation-required");
    }
    match field {
        ProfileField::Email if !value.validate_email() => Some("validation-invalid-email"),
        ProfileField::DateOfBirth if parse_date(value).is_none() => Some("validation-invalid-date"),
        _ => None,
    }
}

/// Parses a date of birth in any of the accepted formats.
///
/// Values sent by the server may carry a time part (`2000-01-01T00:00:00Z`);
/// only the date before `T` is considered then.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    let date_part = input.split_once('T').map_or(input, |(date, _)| date);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::AccessToken;
    use crate::error::ApiError;
    use crate::store::Action;

    fn user(first_name: &str, avatar: Option<&str>) -> UserProfile {
        UserProfile {
            first_name: first_name.into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "0123".into(),
            dob: "1990-04-12".into(),
            avatar: avatar.map(str::to_string),
        }
    }

    fn loaded_store(user: UserProfile) -> Store {
        let mut store = Store::with_token(AccessToken::new("t"));
        store.dispatch(Action::ProfileFetchStarted);
        store.dispatch(Action::ProfileFetched(Ok(user)));
        store
    }

    #[test]
    fn required_fields_reject_blank_values() {
        for field in ProfileField::all() {
            assert_eq!(validate_field(*field, "  "), Some("validation-required"));
        }
    }

    #[test]
    fn email_must_be_valid() {
        assert_eq!(
            validate_field(ProfileField::Email, "not-an-email"),
            Some("validation-invalid-email")
        );
        assert_eq!(validate_field(ProfileField::Email, "a@b.com"), None);
    }

    #[test]
    fn date_accepts_several_formats() {
        let expected = NaiveDate::from_ymd_opt(1990, 4, 12);
        assert_eq!(parse_date("1990-04-12"), expected);
        assert_eq!(parse_date("12/04/1990"), expected);
        assert_eq!(parse_date("1990/04/12"), expected);
        assert_eq!(parse_date("1990-04-12T00:00:00Z"), expected);
        assert_eq!(
            validate_field(ProfileField::DateOfBirth, "yesterday"),
            Some("validation-invalid-date")
        );
        assert_eq!(
            validate_field(ProfileField::DateOfBirth, "1990-02-30"),
            Some("validation-invalid-date")
        );
    }

    #[test]
    fn errors_are_independent_per_field() {
        let mut state = State::new();
        state.set_field(ProfileField::Email, "bad".into());
        state.set_field(ProfileField::Phone, "0123".into());

        assert_eq!(
            state.errors().get(ProfileField::Email),
            Some("validation-invalid-email")
        );
        assert_eq!(state.errors().get(ProfileField::Phone), None);
        assert_eq!(state.errors().get(ProfileField::FirstName), None);
    }

    #[test]
    fn validate_all_reports_every_blank_field() {
        let mut state = State::new();
        assert!(!state.validate_all());
        for field in ProfileField::all() {
            assert_eq!(state.errors().get(*field), Some("validation-required"));
        }
    }

    #[test]
    fn values_are_blank_without_user_and_seeded_from_record() {
        let mut state = State::new();
        state.sync(&Store::new());
        assert_eq!(state.values(), &ProfileValues::default());

        let store = loaded_store(user("Jane", None));
        state.sync(&store);
        assert_eq!(state.values().first_name, "Jane");
        assert_eq!(state.values().dob, "1990-04-12");
    }

    #[test]
    fn changed_record_discards_edits_in_progress() {
        let mut store = loaded_store(user("Jane", None));
        let mut state = State::new();
        state.sync(&store);
        state.set_field(ProfileField::FirstName, "Edited".into());

        // Same record: edits survive.
        state.sync(&store);
        assert_eq!(state.values().first_name, "Edited");

        store.dispatch(Action::ProfileFetched(Ok(user("Janet", None))));
        state.sync(&store);
        assert_eq!(state.values().first_name, "Janet");
    }

    #[test]
    fn record_avatar_becomes_preview() {
        let store = loaded_store(user("Jane", Some("https://cdn/jane.png")));
        let mut state = State::new();
        state.sync(&store);
        assert_eq!(
            state.preview(),
            &AvatarPreview::Existing("https://cdn/jane.png".into())
        );
    }

    #[test]
    fn submit_is_blocked_while_loading_or_in_flight() {
        let mut store = loaded_store(user("Jane", None));
        let mut state = State::new();
        state.sync(&store);
        assert!(state.can_submit(&store));

        state.mark_submitting();
        store.dispatch(Action::UserUpdateStarted);
        state.sync(&store);
        assert!(!state.can_submit(&store));

        store.dispatch(Action::UserUpdated(Err(ApiError::Network("down".into()))));
        state.sync(&store);
        assert!(state.can_submit(&store));
    }

    #[test]
    fn upload_overwrites_local_preview_and_late_read_is_ignored() {
        let mut store = Store::new();
        let mut state = State::new();
        let selection = state.begin_selection();

        store.dispatch(Action::ImageUploaded {
            selection,
            result: Ok("https://cdn/new.png".into()),
        });
        state.sync(&store);

        let data = DataUri::new("image/png", "QQ==", vec![b'A']);
        assert!(!state.apply_local_preview(selection, data));
        assert_eq!(state.preview().source(), Some("https://cdn/new.png"));
    }

    #[test]
    fn local_read_before_upload_shows_immediately() {
        let mut state = State::new();
        let selection = state.begin_selection();
        let data = DataUri::new("image/png", "QQ==", vec![b'A']);

        assert!(state.apply_local_preview(selection, data));
        assert_eq!(state.preview().source(), Some("data:image/png;base64,QQ=="));
    }

    #[test]
    fn results_of_superseded_selection_are_discarded() {
        let mut store = Store::new();
        let mut state = State::new();
        let first = state.begin_selection();
        let second = state.begin_selection();

        // The first upload finishes after the second selection was made.
        store.dispatch(Action::ImageUploaded {
            selection: first,
            result: Ok("https://cdn/old.png".into()),
        });
        state.sync(&store);
        assert!(state.preview().is_empty());

        let stale = DataUri::new("image/png", "QQ==", vec![b'A']);
        assert!(!state.apply_local_preview(first, stale));

        store.dispatch(Action::ImageUploaded {
            selection: second,
            result: Ok("https://cdn/new.png".into()),
        });
        state.sync(&store);
        assert!(matches!(
            state.preview(),
            AvatarPreview::Uploaded { selection, .. } if *selection == second
        ));
    }
}
