// SPDX-License-Identifier: MPL-2.0
//! In-memory backend serving every remote port.
//!
//! Used by `--offline` runs and by tests. Uploads are echoed back as `data:`
//! URIs so previews render without a server. Remote images are served only
//! when registered with [`InMemoryBackend::with_image`]; nothing here
//! touches the network.

use crate::application::port::{ApiError, ApiFuture, CategoryApi, ProfileApi, UploadApi};
use crate::domain::category::{Category, CategoryId, CategoryType, CategoryTypeId};
use crate::domain::profile::{AccessToken, ProfileValues, UserProfile};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct State {
    token: Option<String>,
    user: UserProfile,
    category_types: Vec<CategoryType>,
    categories: Vec<Category>,
    images: HashMap<String, Vec<u8>>,
    next_failure: Option<ApiError>,
    update_calls: usize,
    upload_calls: usize,
    download_calls: usize,
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
}

impl InMemoryBackend {
    /// A backend that accepts only `token` and serves `user`.
    #[must_use]
    pub fn new(token: &str, user: UserProfile) -> Self {
        Self {
            state: Mutex::new(State {
                token: Some(token.to_string()),
                user,
                ..State::default()
            }),
        }
    }

    /// Sample data for offline runs. Accepts any token.
    #[must_use]
    pub fn demo() -> Self {
        let backend = Self::default();
        {
            let mut state = backend.lock();
            state.user = UserProfile {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                phone: "+44 20 7946 0000".into(),
                dob: "1990-12-10".into(),
                avatar: None,
            };
        }
        backend
            .with_category_types(vec![(1, "Home"), (2, "Outdoor"), (3, "Events")])
            .with_categories(vec![
                (10, "Plumbing", 1),
                (11, "Cleaning", 1),
                (12, "Home & Garden", 2),
                (13, "Landscaping", 2),
                (14, "Catering", 3),
            ])
    }

    #[must_use]
    pub fn with_category_types(self, types: Vec<(u64, &str)>) -> Self {
        self.lock().category_types = types
            .into_iter()
            .map(|(id, name)| CategoryType {
                id: CategoryTypeId(id),
                name: name.to_string(),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_categories(self, categories: Vec<(u64, &str, u64)>) -> Self {
        self.lock().categories = categories
            .into_iter()
            .map(|(id, name, type_id)| Category {
                id: CategoryId(id),
                category_name: name.to_string(),
                category_type: CategoryTypeId(type_id),
            })
            .collect();
        self
    }

    /// Serves `bytes` when `url` is downloaded.
    #[must_use]
    pub fn with_image(self, url: &str, bytes: Vec<u8>) -> Self {
        self.lock().images.insert(url.to_string(), bytes);
        self
    }

    /// Makes the next call fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        self.lock().next_failure = Some(error);
    }

    #[must_use]
    pub fn user(&self) -> UserProfile {
        self.lock().user.clone()
    }

    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.lock().update_calls
    }

    #[must_use]
    pub fn upload_calls(&self) -> usize {
        self.lock().upload_calls
    }

    #[must_use]
    pub fn download_calls(&self) -> usize {
        self.lock().download_calls
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn authorize(state: &mut State, token: &AccessToken) -> Result<(), ApiError> {
        if let Some(error) = state.next_failure.take() {
            return Err(error);
        }
        match &state.token {
            Some(expected) if expected != token.expose() => Err(ApiError::Status {
                code: 401,
                message: Some("Invalid token".to_string()),
            }),
            _ => Ok(()),
        }
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        match self.lock().next_failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl ProfileApi for InMemoryBackend {
    fn fetch_profile(&self, token: &AccessToken) -> ApiFuture<UserProfile> {
        let mut state = self.lock();
        let result = Self::authorize(&mut state, token).map(|()| state.user.clone());
        Box::pin(async move { result })
    }

    fn update_user(&self, token: &AccessToken, values: &ProfileValues) -> ApiFuture<UserProfile> {
        let mut state = self.lock();
        state.update_calls += 1;
        let result = Self::authorize(&mut state, token).map(|()| {
            let user = &mut state.user;
            user.first_name.clone_from(&values.first_name);
            user.last_name.clone_from(&values.last_name);
            user.email.clone_from(&values.email);
            user.phone.clone_from(&values.phone);
            user.dob.clone_from(&values.dob);
            user.clone()
        });
        Box::pin(async move { result })
    }
}

impl UploadApi for InMemoryBackend {
    fn upload_image(&self, path: PathBuf) -> ApiFuture<String> {
        self.lock().upload_calls += 1;
        let failure = self.take_failure();
        Box::pin(async move {
            failure?;
            let uri = super::file::read_data_uri(&path).await?;
            Ok(uri.as_str().to_string())
        })
    }

    fn download_image(&self, url: String) -> ApiFuture<Vec<u8>> {
        let result = self.take_failure().and_then(|()| {
            let mut state = self.lock();
            state.download_calls += 1;
            state
                .images
                .get(&url)
                .cloned()
                .ok_or_else(|| ApiError::Network(format!("offline, cannot fetch {url}")))
        });
        Box::pin(async move { result })
    }
}

impl CategoryApi for InMemoryBackend {
    fn fetch_category_types(&self) -> ApiFuture<Vec<CategoryType>> {
        let result = self
            .take_failure()
            .map(|()| self.lock().category_types.clone());
        Box::pin(async move { result })
    }

    fn fetch_categories(&self) -> ApiFuture<Vec<Category>> {
        let result = self.take_failure().map(|()| self.lock().categories.clone());
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(raw: &str) -> AccessToken {
        AccessToken::new(raw).expect("non-blank token")
    }

    #[tokio::test]
    async fn wrong_token_is_rejected() {
        let backend = InMemoryBackend::new("good", UserProfile::default());
        let result = backend.fetch_profile(&token("bad")).await;
        assert!(matches!(result, Err(ApiError::Status { code: 401, .. })));
    }

    #[tokio::test]
    async fn update_replaces_stored_fields() {
        let backend = InMemoryBackend::new("t", UserProfile::default());
        let values = ProfileValues {
            first_name: "Grace".into(),
            email: "grace@example.com".into(),
            ..ProfileValues::default()
        };

        let user = backend
            .update_user(&token("t"), &values)
            .await
            .expect("update succeeds");
        assert_eq!(user.first_name, "Grace");
        assert_eq!(backend.user().email, "grace@example.com");
        assert_eq!(backend.update_calls(), 1);
    }

    #[tokio::test]
    async fn scripted_failure_applies_once() {
        let backend = InMemoryBackend::demo();
        backend.fail_next(ApiError::Network("offline".into()));

        assert!(backend.fetch_categories().await.is_err());
        assert_eq!(backend.fetch_categories().await.map(|c| c.len()), Ok(5));
    }

    #[tokio::test]
    async fn only_registered_images_download() {
        let backend = InMemoryBackend::demo().with_image("https://cdn/a.png", vec![1, 2, 3]);

        let known = backend.download_image("https://cdn/a.png".into()).await;
        let unknown = backend.download_image("https://cdn/b.png".into()).await;

        assert_eq!(known, Ok(vec![1, 2, 3]));
        assert!(matches!(unknown, Err(ApiError::Network(_))));
        assert_eq!(backend.download_calls(), 2);
    }

    #[tokio::test]
    async fn demo_accepts_any_token() {
        let backend = InMemoryBackend::demo();
        let user = backend.fetch_profile(&token("anything")).await;
        assert_eq!(user.map(|u| u.first_name), Ok("Ada".to_string()));
    }
}
