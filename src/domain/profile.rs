// SPDX-License-Identifier: MPL-2.0
//! Profile domain types.
//!
//! The authoritative [`UserProfile`] is owned by the store; the settings form
//! keeps a transient [`ProfileValues`] copy that is submitted back as a whole.

use std::fmt;

// =============================================================================
// AccessToken
// =============================================================================

/// Opaque credential enabling authenticated profile operations.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token. Blank input yields `None`, matching the
    /// "no token, no fetch" rule.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the raw token for transport headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

// =============================================================================
// UserProfile
// =============================================================================

/// A user record as returned by the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Date of birth as sent by the server (usually `YYYY-MM-DD`).
    pub dob: String,
    /// Image reference: an absolute URL or a `data:` URI.
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Returns the avatar reference if it is non-blank.
    #[must_use]
    pub fn avatar_ref(&self) -> Option<&str> {
        self.avatar
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// =============================================================================
// ProfileValues
// =============================================================================

/// The editable subset of a profile, submitted as a whole on save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
}

impl ProfileValues {
    /// Seeds values from an optional user record, blank when absent.
    #[must_use]
    pub fn from_user(user: Option<&UserProfile>) -> Self {
        match user {
            Some(user) => Self {
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                email: user.email.clone(),
                phone: user.phone.clone(),
                dob: user.dob.clone(),
            },
            None => Self::default(),
        }
    }

    /// Returns the value of a single field.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::DateOfBirth => &self.dob,
        }
    }

    /// Replaces the value of a single field.
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::DateOfBirth => self.dob = value,
        }
    }

    /// Copy with surrounding whitespace removed from every field, matching
    /// what validation looked at.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let mut values = Self::default();
        for &field in ProfileField::all() {
            values.set(field, self.get(field).trim().to_string());
        }
        values
    }
}

/// Identifies a field of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
}

impl ProfileField {
    /// Returns all fields in display order.
    pub const fn all() -> &'static [ProfileField] {
        &[
            ProfileField::FirstName,
            ProfileField::LastName,
            ProfileField::Email,
            ProfileField::Phone,
            ProfileField::DateOfBirth,
        ]
    }

    /// Wire name of the field, also used to key inline error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::DateOfBirth => "dob",
        }
    }
}

// =============================================================================
// ProfileStatus
// =============================================================================

/// Request status of the profile slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl ProfileStatus {
    #[must_use]
    pub fn is_loading(self) -> bool {
        self == ProfileStatus::Loading
    }

    #[must_use]
    pub fn is_failed(self) -> bool {
        self == ProfileStatus::Failed
    }
}
