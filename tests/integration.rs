// SPDX-License-Identifier: MPL-2.0
use iced_services::app::Route;
use iced_services::application::port::{
    ApiError, CategoryApi, HeadManager, ProfileApi, UploadApi,
};
use iced_services::config::{self, Config};
use iced_services::domain::avatar::AvatarPreview;
use iced_services::domain::category::CategoryTypeId;
use iced_services::domain::head::HeadTag;
use iced_services::domain::profile::{AccessToken, ProfileField, ProfileStatus, UserProfile};
use iced_services::i18n::I18n;
use iced_services::infrastructure::{InMemoryBackend, WindowHead};
use iced_services::store::{Action, Store};
use iced_services::ui::page_metadata::PageMetadata;
use iced_services::ui::profile_settings::{self, AvatarCache, Event, Message, State};
use iced_services::ui::service_listing;
use iced_services::ui::theming::ThemeMode;
use std::io::Write;
use tempfile::tempdir;

const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn token(raw: &str) -> AccessToken {
    AccessToken::new(raw).expect("non-blank token")
}

fn jane() -> UserProfile {
    UserProfile {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: "jane@example.com".into(),
        phone: "0123".into(),
        dob: "1990-04-12".into(),
        avatar: Some("https://cdn.example.com/jane.png".into()),
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("profile-settings-title"), "Profile settings");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("profile-settings-title"), "Paramètres du profil");
}

#[test]
fn test_config_round_trip_keeps_every_section() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.api.base_url = "https://api.example.com".into();
    config.api.timeout_secs = Some(12);
    config.session.access_token = Some("t0k3n".into());

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");

    assert_eq!(loaded, config);
    assert_eq!(loaded.api.timeout().as_secs(), 12);
}

#[test]
fn test_invalid_config_falls_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    let mut file = std::fs::File::create(dir.path().join("settings.toml")).expect("create");
    writeln!(file, "[api]\nbase_url = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_missing_translation_shows_key() {
    let i18n = I18n::new(Some("fr".into()), None, &Config::default());
    assert_eq!(i18n.tr("profile-unknown-label"), "profile-unknown-label");
}

#[tokio::test]
async fn test_profile_fetch_and_update_flow() {
    let backend = InMemoryBackend::new("t0k3n", jane());
    let mut store = Store::with_token(Some(token("t0k3n")));
    let mut form = State::new();
    let mut cache = AvatarCache::default();

    // Mount: a token is present, so the profile is fetched
    let mount_token = profile_settings::on_mount(&store).expect("token present");
    store.dispatch(Action::ProfileFetchStarted);
    assert_eq!(store.status(), ProfileStatus::Loading);
    let fetched = backend.fetch_profile(&mount_token).await;
    store.dispatch(Action::ProfileFetched(fetched));
    form.sync(&store);

    assert_eq!(form.values().first_name, "Jane");
    assert_eq!(
        form.preview(),
        &AvatarPreview::Existing("https://cdn.example.com/jane.png".into())
    );

    // Edit and submit
    let _ = profile_settings::update(
        &mut form,
        &mut cache,
        Message::FieldChanged(ProfileField::FirstName, "Janet".into()),
        &store,
    );
    let event = profile_settings::update(&mut form, &mut cache, Message::Submit, &store);
    let Event::SubmitRequested { token, values } = event else {
        panic!("expected a submit request, got {event:?}");
    };
    assert!(form.is_submitting());

    store.dispatch(Action::UserUpdateStarted);
    form.sync(&store);
    assert!(!form.can_submit(&store));

    let updated = backend.update_user(&token, &values).await;
    store.dispatch(Action::UserUpdated(updated));
    form.sync(&store);

    assert_eq!(store.user().map(|u| u.first_name.as_str()), Some("Janet"));
    assert_eq!(backend.update_calls(), 1);
    assert!(form.can_submit(&store));
}

#[tokio::test]
async fn test_invalid_email_blocks_submit() {
    let mut store = Store::with_token(Some(token("t0k3n")));
    store.dispatch(Action::ProfileFetched(Ok(jane())));
    let mut form = State::new();
    form.sync(&store);
    let mut cache = AvatarCache::default();

    let _ = profile_settings::update(
        &mut form,
        &mut cache,
        Message::FieldChanged(ProfileField::Email, "not-an-email".into()),
        &store,
    );
    let event = profile_settings::update(&mut form, &mut cache, Message::Submit, &store);

    assert!(matches!(event, Event::None));
    assert_eq!(
        form.errors().get(ProfileField::Email),
        Some("validation-invalid-email")
    );
}

#[tokio::test]
async fn test_rejected_update_keeps_record_and_reports_message() {
    let backend = InMemoryBackend::new("t0k3n", jane());
    let mut store = Store::with_token(Some(token("t0k3n")));
    store.dispatch(Action::ProfileFetched(Ok(jane())));

    backend.fail_next(ApiError::Status {
        code: 422,
        message: Some("Email already taken".into()),
    });
    store.dispatch(Action::UserUpdateStarted);
    let result = backend
        .update_user(&token("t0k3n"), &Default::default())
        .await;
    store.dispatch(Action::UserUpdated(result));

    assert_eq!(store.status(), ProfileStatus::Failed);
    assert_eq!(store.error(), Some("Email already taken"));
    assert_eq!(store.user().map(|u| u.first_name.as_str()), Some("Jane"));
}

#[tokio::test]
async fn test_upload_wins_over_late_local_read() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("avatar.png");
    std::fs::write(&path, PNG_HEADER).expect("write image");

    let backend = InMemoryBackend::demo();
    let mut store = Store::with_token(Some(token("any")));
    let mut form = State::new();
    let mut cache = AvatarCache::default();

    let event = profile_settings::update(
        &mut form,
        &mut cache,
        Message::AvatarChosen(Some(path.clone())),
        &store,
    );
    let Event::AvatarSelected { selection, path } = event else {
        panic!("expected a selection, got {event:?}");
    };

    // The upload completes first
    let url = backend.upload_image(path.clone()).await;
    store.dispatch(Action::ImageUploaded {
        selection,
        result: url.clone(),
    });
    form.sync(&store);

    // The local read arrives afterwards and is ignored
    let local = iced_services::infrastructure::file::read_data_uri(&path)
        .await
        .expect("readable");
    assert!(!form.apply_local_preview(selection, local));

    let url = url.expect("uploaded");
    assert_eq!(form.preview(), &AvatarPreview::Uploaded { selection, url });
    assert_eq!(backend.upload_calls(), 1);
}

#[tokio::test]
async fn test_category_menu_lists_only_matching_type() {
    let backend = InMemoryBackend::demo();
    let mut store = Store::new();

    store.dispatch(Action::CategoryTypesLoaded(
        backend.fetch_category_types().await,
    ));
    store.dispatch(Action::CategoriesLoaded(backend.fetch_categories().await));

    let names: Vec<_> = store
        .category_index()
        .categories_of(CategoryTypeId(2))
        .iter()
        .map(|c| c.category_name.as_str())
        .collect();
    assert_eq!(names, vec!["Home & Garden", "Landscaping"]);

    let route = Route::services_in(names[0]);
    assert_eq!(route.to_location(), "/service?category=Home+%26+Garden");
    assert_eq!(Route::parse(&route.to_location()), Some(route));
}

#[tokio::test]
async fn test_category_failure_leaves_lists_empty() {
    let backend = InMemoryBackend::demo();
    backend.fail_next(ApiError::Network("connection refused".into()));
    let mut store = Store::new();

    store.dispatch(Action::CategoriesLoaded(backend.fetch_categories().await));

    assert!(store.categories().is_empty());
    assert!(store.category_index().is_empty());
}

#[test]
fn test_page_metadata_reconciles_into_head() {
    let mut head = WindowHead::new();
    head.reconcile(&PageMetadata::new().title("Plumbers near you").tags());

    assert_eq!(head.title(), Some("Plumbers near you"));
    assert!(head
        .tags()
        .contains(&HeadTag::property("og:title", "Plumbers near you")));
    assert!(head
        .tags()
        .contains(&HeadTag::meta("description", "Add default description here")));

    let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
    head.reconcile(&service_listing::page_metadata(&i18n, None).tags());
    assert_eq!(head.title(), Some("Services"));
    assert!(!head.to_html().contains("Plumbers"));
}
