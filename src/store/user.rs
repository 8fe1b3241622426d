// SPDX-License-Identifier: MPL-2.0
//! User slice: session token, current profile, request status and error.

use crate::domain::profile::{AccessToken, ProfileStatus, UserProfile};
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct UserSlice {
    token: Option<AccessToken>,
    user: Option<UserProfile>,
    status: ProfileStatus,
    error: Option<String>,
}

impl UserSlice {
    pub(super) fn set_token(&mut self, token: Option<AccessToken>) {
        if token.is_none() {
            self.user = None;
            self.status = ProfileStatus::Idle;
            self.error = None;
        }
        self.token = token;
    }

    pub(super) fn start(&mut self) {
        self.status = ProfileStatus::Loading;
        self.error = None;
    }

    /// A failure keeps the last known record so the form is not wiped.
    pub(super) fn finish(&mut self, result: Result<UserProfile, ApiError>) {
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.status = ProfileStatus::Succeeded;
                self.error = None;
            }
            Err(err) => {
                self.status = ProfileStatus::Failed;
                self.error = Some(err.user_message());
            }
        }
    }

    pub(super) fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub(super) fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub(super) fn status(&self) -> ProfileStatus {
        self.status
    }

    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
