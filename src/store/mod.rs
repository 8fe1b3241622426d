// SPDX-License-Identifier: MPL-2.0
//! Shared application state.
//!
//! The store is the single owner of remote-backed state: the signed-in user,
//! the most recent avatar upload, and the category catalogue. It is mutated
//! only through [`Store::dispatch`] and read through selector methods.
//! Components never hold a reference to a global instance: the application
//! passes `&Store` down in view contexts and turns component events into
//! [`Action`]s.
//!
//! Remote calls follow a pending → fulfilled/rejected pattern: the caller
//! dispatches the `*Started` action, runs the port future, then dispatches
//! the result action.

mod category;
mod upload;
mod user;

pub use category::CategorySlice;
pub use upload::UploadSlice;
pub use user::UserSlice;

use crate::domain::avatar::SelectionId;
use crate::domain::category::{Category, CategoryIndex, CategoryType};
use crate::domain::profile::{AccessToken, ProfileStatus, UserProfile};
use crate::error::ApiError;

/// Every state transition the store accepts.
#[derive(Debug, Clone)]
pub enum Action {
    /// The session token was set or cleared.
    TokenChanged(Option<AccessToken>),
    /// A profile fetch was dispatched.
    ProfileFetchStarted,
    /// A profile fetch completed.
    ProfileFetched(Result<UserProfile, ApiError>),
    /// A profile update was dispatched.
    UserUpdateStarted,
    /// A profile update completed.
    UserUpdated(Result<UserProfile, ApiError>),
    /// An avatar upload completed.
    ImageUploaded {
        selection: SelectionId,
        result: Result<String, ApiError>,
    },
    /// The category type list arrived (or failed).
    CategoryTypesLoaded(Result<Vec<CategoryType>, ApiError>),
    /// The category list arrived (or failed).
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
}

/// Root state container.
#[derive(Debug, Default)]
pub struct Store {
    user: UserSlice,
    upload: UploadSlice,
    category: CategorySlice,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a session token already set.
    #[must_use]
    pub fn with_token(token: Option<AccessToken>) -> Self {
        let mut store = Self::default();
        store.dispatch(Action::TokenChanged(token));
        store
    }

    /// Applies an action to the slice that owns it.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::TokenChanged(token) => self.user.set_token(token),
            Action::ProfileFetchStarted | Action::UserUpdateStarted => self.user.start(),
            Action::ProfileFetched(result) | Action::UserUpdated(result) => {
                self.user.finish(result);
            }
            Action::ImageUploaded { selection, result } => self.upload.finish(selection, result),
            Action::CategoryTypesLoaded(result) => self.category.set_types(result),
            Action::CategoriesLoaded(result) => self.category.set_categories(result),
        }
    }

    // -------------------------------------------------------------------------
    // Selectors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.user()
    }

    #[must_use]
    pub fn status(&self) -> ProfileStatus {
        self.user.status()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.user.error()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.user.token()
    }

    /// URL of the most recent successful upload and the selection it belongs to.
    #[must_use]
    pub fn uploaded_image_url(&self) -> Option<(SelectionId, &str)> {
        self.upload.uploaded()
    }

    #[must_use]
    pub fn category_types(&self) -> &[CategoryType] {
        self.category.types()
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.category.categories()
    }

    #[must_use]
    pub fn category_index(&self) -> &CategoryIndex {
        self.category.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::avatar::SelectionCounter;
    use crate::domain::category::{CategoryId, CategoryTypeId};

    fn user() -> UserProfile {
        UserProfile {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            phone: "123".into(),
            dob: "2000-01-01".into(),
            avatar: None,
        }
    }

    #[test]
    fn fetch_lifecycle_moves_through_loading() {
        let mut store = Store::with_token(AccessToken::new("t"));
        assert_eq!(store.status(), ProfileStatus::Idle);

        store.dispatch(Action::ProfileFetchStarted);
        assert_eq!(store.status(), ProfileStatus::Loading);

        store.dispatch(Action::ProfileFetched(Ok(user())));
        assert_eq!(store.status(), ProfileStatus::Succeeded);
        assert_eq!(store.user(), Some(&user()));
        assert!(store.error().is_none());
    }

    #[test]
    fn failed_update_sets_status_and_error_but_keeps_user() {
        let mut store = Store::with_token(AccessToken::new("t"));
        store.dispatch(Action::ProfileFetched(Ok(user())));

        store.dispatch(Action::UserUpdateStarted);
        store.dispatch(Action::UserUpdated(Err(ApiError::Status {
            code: 422,
            message: Some("Email already taken".into()),
        })));

        assert_eq!(store.status(), ProfileStatus::Failed);
        assert_eq!(store.error(), Some("Email already taken"));
        assert_eq!(store.user(), Some(&user()));
    }

    #[test]
    fn token_selector_reflects_dispatch() {
        let mut store = Store::new();
        assert!(store.access_token().is_none());
        store.dispatch(Action::TokenChanged(AccessToken::new("abc")));
        assert_eq!(store.access_token().map(AccessToken::expose), Some("abc"));
    }

    #[test]
    fn upload_result_is_exposed_with_its_selection() {
        let mut counter = SelectionCounter::default();
        let id = counter.next();
        let mut store = Store::new();

        store.dispatch(Action::ImageUploaded {
            selection: id,
            result: Ok("https://cdn/a.png".into()),
        });
        assert_eq!(store.uploaded_image_url(), Some((id, "https://cdn/a.png")));
    }

    #[test]
    fn category_lists_feed_the_index() {
        let mut store = Store::new();
        store.dispatch(Action::CategoryTypesLoaded(Ok(vec![CategoryType {
            id: CategoryTypeId(1),
            name: "Home".into(),
        }])));
        store.dispatch(Action::CategoriesLoaded(Ok(vec![
            Category {
                id: CategoryId(10),
                category_name: "Plumbing".into(),
                category_type: CategoryTypeId(1),
            },
            Category {
                id: CategoryId(11),
                category_name: "Garden".into(),
                category_type: CategoryTypeId(2),
            },
        ])));

        assert_eq!(store.category_types().len(), 1);
        assert_eq!(store.categories().len(), 2);
        assert_eq!(store.category_index().categories_of(CategoryTypeId(1)).len(), 1);
    }
}
