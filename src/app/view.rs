// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the header, the
//! category navigation and the screen of the current route, with the toast
//! overlay stacked on top.

use super::route::{Route, Router};
use super::Message;
use crate::domain::category::CategoryTypeId;
use crate::i18n::I18n;
use crate::store::Store;
use crate::ui::category_nav;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications;
use crate::ui::profile_settings::{self, AvatarCache, State as ProfileSettingsState};
use crate::ui::service_listing;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Stack, Svg, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    pub router: &'a Router,
    pub profile_settings: &'a ProfileSettingsState,
    pub avatar_cache: &'a AvatarCache,
    pub nav_open: Option<CategoryTypeId>,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active route.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.router.current() {
        Route::Profile => profile_settings::view::view(profile_settings::ViewContext {
            i18n: ctx.i18n,
            state: ctx.profile_settings,
            store: ctx.store,
            avatar_cache: ctx.avatar_cache,
        })
        .map(Message::ProfileSettings),
        Route::Services { category } => service_listing::view(service_listing::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            category: category.as_deref(),
            can_go_back: ctx.router.can_go_back(),
        })
        .map(Message::ServiceListing),
    };

    let navigation = category_nav::view(category_nav::ViewContext {
        i18n: ctx.i18n,
        store: ctx.store,
        open: ctx.nav_open,
    })
    .map(Message::CategoryNav);

    let column = Column::new()
        .push(view_header(ctx.i18n, ctx.theme_mode))
        .push(navigation)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let content = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>(i18n: &'a I18n, theme_mode: ThemeMode) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("window-title")).size(typography::TITLE_SM);

    let language = i18n.current_locale().to_string();

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(header_button(
            Some(icons::user()),
            i18n.tr("header-profile"),
            Message::OpenProfile,
        ))
        .push(header_button(
            None,
            i18n.tr("header-services"),
            Message::OpenServices,
        ))
        .push(header_button(
            None,
            i18n.tr_with_args("header-language", &[("locale", language.as_str())]),
            Message::CycleLanguage,
        ))
        .push(header_button(
            Some(icons::theme()),
            i18n.tr(theme_mode.i18n_key()),
            Message::ToggleTheme,
        ))
        .push(header_button(
            Some(icons::download()),
            i18n.tr("header-export-head"),
            Message::ExportHead,
        ))
        .push(header_button(
            Some(icons::download()),
            i18n.tr("header-export-diagnostics"),
            Message::ExportDiagnostics,
        ));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::panel)
        .into()
}

fn header_button<'a>(
    icon: Option<Svg<'a>>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let mut content = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    if let Some(icon) = icon {
        content = content.push(icons::sized(icon, sizing::ICON_SM));
    }
    content = content.push(Text::new(label).size(typography::BODY_SM));

    button(content)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::ghost)
        .on_press(message)
        .into()
}
