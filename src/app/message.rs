// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::avatar::SelectionId;
use crate::domain::category::{Category, CategoryType};
use crate::domain::profile::UserProfile;
use crate::error::ApiError;
use crate::ui::category_nav;
use crate::ui::notifications;
use crate::ui::profile_settings;
use crate::ui::service_listing;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ProfileSettings(profile_settings::Message),
    CategoryNav(category_nav::Message),
    ServiceListing(service_listing::Message),
    Notification(notifications::NotificationMessage),
    /// The profile fetch dispatched on mount finished.
    ProfileFetched(Result<UserProfile, ApiError>),
    /// A profile update finished.
    UserUpdated(Result<UserProfile, ApiError>),
    /// The upload of an avatar selection finished.
    ImageUploaded {
        selection: SelectionId,
        result: Result<String, ApiError>,
    },
    CategoryTypesLoaded(Result<Vec<CategoryType>, ApiError>),
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    /// Header: open the profile settings form.
    OpenProfile,
    /// Header: open the unfiltered service listing.
    OpenServices,
    /// Header: switch to the next available language.
    CycleLanguage,
    /// Header: switch to the next theme mode.
    ToggleTheme,
    /// Header: write the current head tags as an HTML fragment.
    ExportHead,
    /// Header: write the diagnostics buffer as JSON.
    ExportDiagnostics,
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Access token; takes precedence over `[session] access_token`.
    pub token: Option<String>,
    /// Backend base URL; takes precedence over `[api] base_url`.
    pub api_url: Option<String>,
    /// Location to open on startup (e.g. `/service?category=Plumbing`).
    pub location: Option<String>,
    /// Serve sample data from memory instead of calling the backend.
    pub offline: bool,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<PathBuf>,
    /// Optional data directory override (for exports).
    /// Takes precedence over `ICED_SERVICES_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SERVICES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
