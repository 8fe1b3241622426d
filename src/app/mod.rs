// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the store, the remote
//! ports, and the screens.
//!
//! The `App` struct wires together localization, the shared [`Store`], the
//! injected [`Backend`] and the UI components, and translates messages into
//! side effects like port calls, head reconciliation or config persistence.

mod message;
pub mod paths;
pub mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::{Route, Router};
pub use update::HEAD_EXPORT_FILE;

use crate::application::port::{Backend, HeadManager};
use crate::config::{self, Config, AVATAR_CACHE_CAPACITY};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::category::CategoryTypeId;
use crate::domain::profile::AccessToken;
use crate::i18n::I18n;
use crate::infrastructure::{HttpBackend, InMemoryBackend, WindowHead};
use crate::store::Store;
use crate::ui::notifications::{self, Notification};
use crate::ui::profile_settings::{AvatarCache, State as ProfileSettingsState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state that bridges UI components, localization, the
/// store, and the remote ports.
pub struct App {
    pub i18n: I18n,
    store: Store,
    backend: Backend,
    router: Router,
    profile_settings: ProfileSettingsState,
    avatar_cache: AvatarCache,
    /// Category type whose menu is expanded.
    nav_open: Option<CategoryTypeId>,
    head: WindowHead,
    theme_mode: ThemeMode,
    config: Config,
    /// Whether preference changes are saved to `settings.toml`.
    persist_config: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", self.router.current())
            .field("status", &self.store.status())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    /// Offline app on sample data, without config persistence.
    fn default() -> Self {
        Self::with_backend(
            I18n::default(),
            Backend::from_shared(Arc::new(InMemoryBackend::demo())),
            Store::new(),
        )
    }
}

impl App {
    /// Assembles the root state around an already chosen backend and store.
    pub fn with_backend(i18n: I18n, backend: Backend, store: Store) -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            store,
            backend,
            router: Router::default(),
            profile_settings: ProfileSettingsState::new(),
            avatar_cache: AvatarCache::new(AVATAR_CACHE_CAPACITY),
            nav_open: None,
            head: WindowHead::new(),
            theme_mode: ThemeMode::default(),
            config: Config::default(),
            persist_config: false,
            notifications,
            diagnostics,
        }
    }

    /// Initializes application state from the config file and CLI flags, and
    /// kicks off the profile and category loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.as_deref(), &config);

        let token = flags
            .token
            .clone()
            .or_else(|| config.session.access_token.clone())
            .and_then(AccessToken::new);

        let mut backend_error = None;
        let backend = if flags.offline {
            Backend::from_shared(Arc::new(InMemoryBackend::demo()))
        } else {
            let base_url = flags
                .api_url
                .clone()
                .unwrap_or_else(|| config.api.base_url.clone());
            match HttpBackend::new(&base_url, config.api.timeout()) {
                Ok(http) => Backend::from_shared(Arc::new(http)),
                Err(err) => {
                    backend_error = Some(err);
                    Backend::from_shared(Arc::new(InMemoryBackend::demo()))
                }
            }
        };

        let mut app = Self::with_backend(i18n, backend, Store::with_token(token));
        app.theme_mode = config.general.theme_mode;
        app.config = config;
        app.persist_config = true;

        if let Some(location) = flags.location.as_deref() {
            match Route::parse(location) {
                Some(route) => app.router = Router::new(route),
                None => app
                    .diagnostics
                    .handle()
                    .log_warning(format!("unknown start location: {location}")),
            }
        }

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }
        if let Some(err) = backend_error {
            app.notifications.push(
                Notification::warning("notification-backend-offline").caused_by(&err),
            );
        }

        let task = app.boot();
        (app, task)
    }

    /// Enters the initial route and loads the category catalogue.
    pub fn boot(&mut self) -> Task<Message> {
        let mut ctx = self.update_context();
        let route_task = update::enter_current_route(&mut ctx);
        let categories_task = update::load_categories(&ctx);
        Task::batch([route_task, categories_task])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            store: &mut self.store,
            backend: &self.backend,
            router: &mut self.router,
            profile_settings: &mut self.profile_settings,
            avatar_cache: &mut self.avatar_cache,
            nav_open: &mut self.nav_open,
            head: &mut self.head,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            persist_config: self.persist_config,
            notifications: &mut self.notifications,
            diagnostics: self.diagnostics.handle(),
        }
    }

    /// Window title taken from the `<title>` head tag.
    fn title(&self) -> String {
        self.head
            .title()
            .map_or_else(|| self.i18n.tr("window-title"), str::to_string)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.store.status().is_loading(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.update(notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.expire(now);
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::ExportDiagnostics => {
                update::handle_export_diagnostics(&mut self.diagnostics, &mut self.notifications)
            }
            message => {
                let mut ctx = self.update_context();
                match message {
                    Message::ProfileSettings(form_message) => {
                        update::handle_profile_settings_message(&mut ctx, form_message)
                    }
                    Message::CategoryNav(nav_message) => {
                        update::handle_category_nav_message(&mut ctx, nav_message)
                    }
                    Message::ServiceListing(listing_message) => {
                        update::handle_service_listing_message(&mut ctx, listing_message)
                    }
                    Message::ProfileFetched(result) => {
                        update::handle_profile_fetched(&mut ctx, result)
                    }
                    Message::UserUpdated(result) => update::handle_user_updated(&mut ctx, result),
                    Message::ImageUploaded { selection, result } => {
                        update::handle_image_uploaded(&mut ctx, selection, result)
                    }
                    Message::CategoryTypesLoaded(result) => {
                        update::handle_category_types_loaded(&mut ctx, result)
                    }
                    Message::CategoriesLoaded(result) => {
                        update::handle_categories_loaded(&mut ctx, result)
                    }
                    Message::OpenProfile => update::navigate(&mut ctx, Route::Profile),
                    Message::OpenServices => {
                        update::navigate(&mut ctx, Route::Services { category: None })
                    }
                    Message::CycleLanguage => update::handle_cycle_language(&mut ctx),
                    Message::ToggleTheme => update::handle_toggle_theme(&mut ctx),
                    Message::ExportHead => update::handle_export_head(&mut ctx),
                    Message::Notification(_) | Message::Tick(_) | Message::ExportDiagnostics => {
                        Task::none()
                    }
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            store: &self.store,
            router: &self.router,
            profile_settings: &self.profile_settings,
            avatar_cache: &self.avatar_cache,
            nav_open: self.nav_open,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

/// Hooks used by the unit tests below to drive the app without a runtime.
#[cfg(test)]
impl App {
    /// Signs in with `token`, or signs out with `None`, and refetches the
    /// profile when the form is shown.
    pub fn set_token(&mut self, token: Option<AccessToken>) -> Task<Message> {
        self.store.dispatch(crate::store::Action::TokenChanged(token));
        let mut ctx = self.update_context();
        ctx.profile_settings.sync(ctx.store);
        if matches!(ctx.router.current(), Route::Profile) {
            update::mount_profile(&mut ctx)
        } else {
            Task::none()
        }
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn profile_settings(&self) -> &ProfileSettingsState {
        &self.profile_settings
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    /// Drains queued diagnostics events into the buffer.
    pub fn flush_diagnostics(&mut self) {
        self.diagnostics.process_pending();
    }

    /// Applies a message as the runtime would, discarding follow-up tasks.
    pub fn apply(&mut self, message: Message) {
        let _ = self.update(message);
    }

    /// Current window title.
    #[must_use]
    pub fn window_title(&self) -> String {
        self.title()
    }
}
