// SPDX-License-Identifier: MPL-2.0
//! Profile service port.

use super::ApiFuture;
use crate::domain::profile::{AccessToken, ProfileValues, UserProfile};

/// Port for reading and updating the signed-in user's profile.
///
/// # Example
///
/// ```ignore
/// use iced_services::application::port::ProfileApi;
///
/// async fn refresh(api: &dyn ProfileApi, token: &AccessToken) {
///     match api.fetch_profile(token).await {
///         Ok(user) => println!("Signed in as {}", user.email),
///         Err(e) => eprintln!("Failed to fetch profile: {e}"),
///     }
/// }
/// ```
pub trait ProfileApi: Send + Sync {
    /// Fetches the profile of the token's owner.
    fn fetch_profile(&self, token: &AccessToken) -> ApiFuture<UserProfile>;

    /// Replaces the editable profile fields and returns the stored record.
    fn update_user(&self, token: &AccessToken, values: &ProfileValues) -> ApiFuture<UserProfile>;
}
