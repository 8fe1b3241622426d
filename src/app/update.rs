// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers turn component events into store actions and port calls. Remote
//! calls follow the store's pending → result pattern: dispatch the
//! `*Started` action, run the port future as a [`Task`], then dispatch the
//! result message. After every dispatch that can change the user or the
//! upload, the profile form is re-synced with the store.

use super::route::{Route, Router};
use super::Message;
use crate::application::port::{Backend, HeadManager};
use crate::config::{self, Config};
use crate::diagnostics::{
    default_export_directory, write_atomic, AppOperation, DiagnosticsCollector, DiagnosticsHandle,
    ExportError, OperationOutcome, UserAction,
};
use crate::domain::avatar::SelectionId;
use crate::domain::category::{Category, CategoryType, CategoryTypeId};
use crate::domain::profile::UserProfile;
use crate::error::ApiError;
use crate::i18n::I18n;
use crate::infrastructure::{file, WindowHead};
use crate::store::{Action, Store};
use crate::ui::category_nav::{self, Event as CategoryNavEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::profile_settings::{
    self, AvatarCache, Event as ProfileSettingsEvent, State as ProfileSettingsState,
};
use crate::ui::service_listing::{self, Event as ServiceListingEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// File name of the exported head fragment.
pub const HEAD_EXPORT_FILE: &str = "page-head.html";

/// Mutable view of the application state handed to message handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub store: &'a mut Store,
    pub backend: &'a Backend,
    pub router: &'a mut Router,
    pub profile_settings: &'a mut ProfileSettingsState,
    pub avatar_cache: &'a mut AvatarCache,
    pub nav_open: &'a mut Option<CategoryTypeId>,
    pub head: &'a mut WindowHead,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    /// Whether preference changes are written to `settings.toml`.
    pub persist_config: bool,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: DiagnosticsHandle,
}

fn outcome_of<T>(result: &Result<T, ApiError>) -> OperationOutcome {
    match result {
        Ok(_) => OperationOutcome::Succeeded,
        Err(err) => OperationOutcome::Failed {
            message: err.to_string(),
        },
    }
}

// =============================================================================
// Remote loads
// =============================================================================

/// Fetches the profile when a session token is available.
pub fn mount_profile(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(token) = profile_settings::on_mount(ctx.store) else {
        return Task::none();
    };
    ctx.store.dispatch(Action::ProfileFetchStarted);
    ctx.profile_settings.sync(ctx.store);
    Task::perform(
        ctx.backend.profile.fetch_profile(&token),
        Message::ProfileFetched,
    )
}

/// Starts the two independent category fetches.
pub fn load_categories(ctx: &UpdateContext<'_>) -> Task<Message> {
    Task::batch([
        Task::perform(
            ctx.backend.category.fetch_category_types(),
            Message::CategoryTypesLoaded,
        ),
        Task::perform(
            ctx.backend.category.fetch_categories(),
            Message::CategoriesLoaded,
        ),
    ])
}

/// Makes the image of the current avatar preview available, downloading
/// it when it is a remote URL not seen before.
pub fn refresh_avatar(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(url) = ctx.avatar_cache.prepare(ctx.profile_settings.preview()) else {
        return Task::none();
    };
    let key = url.clone();
    Task::perform(ctx.backend.upload.download_image(url), move |result| {
        Message::ProfileSettings(profile_settings::Message::RemoteAvatarLoaded {
            url: key,
            result,
        })
    })
}

pub fn handle_profile_fetched(
    ctx: &mut UpdateContext<'_>,
    result: Result<UserProfile, ApiError>,
) -> Task<Message> {
    ctx.diagnostics
        .log_operation(AppOperation::FetchProfile, outcome_of(&result));
    match &result {
        Ok(_) => ctx.notifications.clear_matching("notification-profile-load"),
        Err(err) => ctx.notifications.push(
            Notification::error("notification-profile-load-error").caused_by(err),
        ),
    }
    ctx.store.dispatch(Action::ProfileFetched(result));
    ctx.profile_settings.sync(ctx.store);
    refresh_avatar(ctx)
}

pub fn handle_user_updated(
    ctx: &mut UpdateContext<'_>,
    result: Result<UserProfile, ApiError>,
) -> Task<Message> {
    ctx.diagnostics
        .log_operation(AppOperation::UpdateProfile, outcome_of(&result));
    match &result {
        Ok(_) => {
            ctx.notifications.clear_matching("notification-profile-update");
            ctx.notifications
                .push(Notification::success("notification-profile-updated"));
        }
        Err(err) => ctx.notifications.push(
            Notification::error("notification-profile-update-error").caused_by(err),
        ),
    }
    ctx.store.dispatch(Action::UserUpdated(result));
    ctx.profile_settings.sync(ctx.store);
    refresh_avatar(ctx)
}

/// Records an upload result. Results of superseded selections are still
/// stored but logged as discarded, and the form never shows them.
pub fn handle_image_uploaded(
    ctx: &mut UpdateContext<'_>,
    selection: SelectionId,
    result: Result<String, ApiError>,
) -> Task<Message> {
    let current = ctx.profile_settings.is_current_selection(selection);
    let outcome = if current {
        outcome_of(&result)
    } else {
        OperationOutcome::Discarded
    };
    ctx.diagnostics
        .log_operation(AppOperation::UploadImage, outcome);

    if let (true, Err(err)) = (current, &result) {
        ctx.notifications.push(
            Notification::error("notification-upload-error").caused_by(err),
        );
    }

    ctx.store
        .dispatch(Action::ImageUploaded { selection, result });
    ctx.profile_settings.sync(ctx.store);
    refresh_avatar(ctx)
}

fn report_category_result<T>(
    ctx: &mut UpdateContext<'_>,
    operation: AppOperation,
    result: &Result<T, ApiError>,
) {
    ctx.diagnostics.log_operation(operation, outcome_of(result));
    if let Err(err) = result {
        ctx.notifications.push(
            Notification::warning("notification-categories-load-error").caused_by(err),
        );
    }
}

pub fn handle_category_types_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<CategoryType>, ApiError>,
) -> Task<Message> {
    report_category_result(ctx, AppOperation::FetchCategoryTypes, &result);
    ctx.store.dispatch(Action::CategoryTypesLoaded(result));
    Task::none()
}

pub fn handle_categories_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Category>, ApiError>,
) -> Task<Message> {
    report_category_result(ctx, AppOperation::FetchCategories, &result);
    ctx.store.dispatch(Action::CategoriesLoaded(result));
    Task::none()
}

// =============================================================================
// Component messages
// =============================================================================

pub fn handle_profile_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: profile_settings::Message,
) -> Task<Message> {
    let event = profile_settings::update(
        ctx.profile_settings,
        ctx.avatar_cache,
        message,
        ctx.store,
    );

    let task = match event {
        ProfileSettingsEvent::None => Task::none(),
        ProfileSettingsEvent::SubmitRequested { token, values } => {
            ctx.diagnostics.log_action(UserAction::SubmitProfile);
            ctx.store.dispatch(Action::UserUpdateStarted);
            ctx.profile_settings.sync(ctx.store);
            Task::perform(
                ctx.backend.profile.update_user(&token, &values),
                Message::UserUpdated,
            )
        }
        ProfileSettingsEvent::SubmitWithoutToken => {
            ctx.diagnostics
                .log_warning("profile submit ignored: no access token");
            Task::none()
        }
        ProfileSettingsEvent::PickAvatarRequested => {
            ctx.diagnostics.log_action(UserAction::PickAvatar);
            Task::perform(
                file::pick_image(ctx.i18n.tr("profile-avatar-dialog-title")),
                |path| Message::ProfileSettings(profile_settings::Message::AvatarChosen(path)),
            )
        }
        ProfileSettingsEvent::AvatarSelected { selection, path } => {
            start_avatar_selection(ctx, selection, path)
        }
        ProfileSettingsEvent::LocalPreviewFailed(err) => {
            ctx.diagnostics.log_operation(
                AppOperation::ReadLocalImage,
                OperationOutcome::Failed {
                    message: err.to_string(),
                },
            );
            ctx.notifications.push(
                Notification::warning("notification-avatar-read-error").caused_by(&err),
            );
            Task::none()
        }
    };

    Task::batch([task, refresh_avatar(ctx)])
}

/// Runs the local read and the upload of a chosen file side by side.
fn start_avatar_selection(
    ctx: &mut UpdateContext<'_>,
    selection: SelectionId,
    path: PathBuf,
) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::SelectAvatar {
        selection: selection.value(),
    });

    let read = Task::perform(file::read_data_uri(path.clone()), move |result| {
        Message::ProfileSettings(profile_settings::Message::LocalPreviewLoaded {
            selection,
            result,
        })
    });
    let upload = Task::perform(ctx.backend.upload.upload_image(path), move |result| {
        Message::ImageUploaded { selection, result }
    });

    Task::batch([read, upload])
}

pub fn handle_category_nav_message(
    ctx: &mut UpdateContext<'_>,
    message: category_nav::Message,
) -> Task<Message> {
    match category_nav::update(message, ctx.nav_open) {
        CategoryNavEvent::None => Task::none(),
        CategoryNavEvent::MenuOpened(type_id) => {
            ctx.diagnostics
                .log_action(UserAction::OpenCategoryMenu { type_id: type_id.0 });
            Task::none()
        }
        CategoryNavEvent::Navigate(route) => navigate(ctx, route),
    }
}

pub fn handle_service_listing_message(
    ctx: &mut UpdateContext<'_>,
    message: service_listing::Message,
) -> Task<Message> {
    match service_listing::update(message) {
        ServiceListingEvent::Back => navigate_back(ctx),
        ServiceListingEvent::Navigate(route) => navigate(ctx, route),
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Pushes `route` and enters it. Closes any open category menu.
pub fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    *ctx.nav_open = None;
    if ctx.router.current() == &route {
        return Task::none();
    }
    ctx.diagnostics.log_action(UserAction::Navigate {
        location: route.to_location(),
    });
    ctx.router.navigate(route);
    enter_current_route(ctx)
}

pub fn navigate_back(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.nav_open = None;
    if !ctx.router.back() {
        return Task::none();
    }
    ctx.diagnostics.log_action(UserAction::Navigate {
        location: ctx.router.current().to_location(),
    });
    enter_current_route(ctx)
}

/// Applies the head tags of the current route and mounts its screen.
pub fn enter_current_route(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    refresh_head(ctx);
    if matches!(ctx.router.current(), Route::Profile) {
        mount_profile(ctx)
    } else {
        Task::none()
    }
}

/// Reconciles the head with the metadata of the current route.
pub fn refresh_head(ctx: &mut UpdateContext<'_>) {
    let metadata = match ctx.router.current() {
        Route::Profile => profile_settings::page_metadata(ctx.i18n),
        Route::Services { category } => {
            service_listing::page_metadata(ctx.i18n, category.as_deref())
        }
    };
    ctx.head.reconcile(&metadata.tags());
}

// =============================================================================
// Preferences
// =============================================================================

fn persist_config(ctx: &mut UpdateContext<'_>) {
    if !ctx.persist_config {
        return;
    }
    if let Err(err) = config::save(ctx.config) {
        ctx.notifications.push(
            Notification::warning("notification-config-save-error")
                .caused_by_text(err.to_string()),
        );
    }
}

pub fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mode = ctx.theme_mode.next();
    *ctx.theme_mode = mode;
    ctx.diagnostics.log_action(UserAction::ChangeTheme {
        mode: format!("{mode:?}").to_lowercase(),
    });
    ctx.config.general.theme_mode = mode;
    persist_config(ctx);
    Task::none()
}

/// Switches to the locale after the current one, wrapping around.
pub fn handle_cycle_language(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let locales = &ctx.i18n.available_locales;
    if locales.len() < 2 {
        return Task::none();
    }
    let position = locales
        .iter()
        .position(|locale| locale == ctx.i18n.current_locale())
        .unwrap_or(0);
    let next = locales[(position + 1) % locales.len()].clone();

    ctx.i18n.set_locale(next.clone());
    let locale = next.to_string();
    ctx.diagnostics.log_action(UserAction::ChangeLanguage {
        locale: locale.clone(),
    });
    ctx.config.general.language = Some(locale);
    persist_config(ctx);
    refresh_head(ctx);
    Task::none()
}

// =============================================================================
// Exports
// =============================================================================

fn report_export(notifications: &mut notifications::Manager, result: Result<PathBuf, ExportError>) {
    match result {
        Ok(path) => notifications.push(
            Notification::success("notification-export-success")
                .with_arg("path", path.display().to_string()),
        ),
        Err(err) => notifications.push(
            Notification::error("notification-export-error").caused_by_text(err.to_string()),
        ),
    }
}

/// Writes the current head tags next to the diagnostics reports.
pub fn handle_export_head(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let html = ctx.head.to_html();
    let result = default_export_directory()
        .ok_or(ExportError::NoDirectory)
        .and_then(|dir| {
            let path = dir.join(HEAD_EXPORT_FILE);
            write_atomic(&path, &html)?;
            Ok(path)
        });
    report_export(ctx.notifications, result);
    Task::none()
}

pub fn handle_export_diagnostics(
    collector: &mut DiagnosticsCollector,
    notifications: &mut notifications::Manager,
) -> Task<Message> {
    collector.process_pending();
    report_export(notifications, collector.export_to_default_location());
    Task::none()
}
