// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Open the avatar file dialog.
    PickAvatar,
    /// A file was chosen for the avatar.
    SelectAvatar { selection: u64 },
    /// Submit the profile form.
    SubmitProfile,
    /// Expand a category group in the navigation menu.
    OpenCategoryMenu { type_id: u64 },
    /// Navigate to another location.
    Navigate { location: String },
    /// Change the UI language.
    ChangeLanguage { locale: String },
    /// Change the theme mode.
    ChangeTheme { mode: String },
}

/// Remote operations whose outcome is recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppOperation {
    FetchProfile,
    UpdateProfile,
    UploadImage,
    FetchCategoryTypes,
    FetchCategories,
    ReadLocalImage,
}

/// Outcome of an [`AppOperation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OperationOutcome {
    Succeeded,
    Failed { message: String },
    /// The result arrived for a superseded selection and was dropped.
    Discarded,
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Operation {
        operation: AppOperation,
        outcome: OperationOutcome,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_ms: Option<u64>,
    },
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
}
