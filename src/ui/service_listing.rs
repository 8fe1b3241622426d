// SPDX-License-Identifier: MPL-2.0
//! Service listing screen reached from the category navigation.
//!
//! Shows the selected category together with the other categories of the
//! same type, or every category grouped by type when no filter is set.

use crate::app::route::Route;
use crate::domain::category::{Category, CategoryType};
use crate::i18n::I18n;
use crate::store::Store;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::page_metadata::PageMetadata;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the listing.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    /// Category filter taken from the route.
    pub category: Option<&'a str>,
    pub can_go_back: bool,
}

/// Messages emitted by the listing.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    ShowAll,
    SelectCategory(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Back,
    Navigate(Route),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::ShowAll => Event::Navigate(Route::Services { category: None }),
        Message::SelectCategory(name) => Event::Navigate(Route::services_in(name)),
    }
}

/// Head metadata of the listing page.
#[must_use]
pub fn page_metadata(i18n: &I18n, category: Option<&str>) -> PageMetadata {
    match category {
        Some(name) => PageMetadata::new()
            .title(i18n.tr_with_args("services-title-filtered", &[("category", name)]))
            .description(i18n.tr_with_args("services-description-filtered", &[("category", name)]))
            .keywords(name),
        None => PageMetadata::new()
            .title(i18n.tr("services-title"))
            .description(i18n.tr("services-description")),
    }
}

/// Render the listing.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = match ctx.category {
        Some(name) => ctx
            .i18n
            .tr_with_args("services-title-filtered", &[("category", name)]),
        None => ctx.i18n.tr("services-title"),
    };

    let back = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::arrow_left(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr("services-back"))),
    )
    .style(styles::button::ghost)
    .on_press_maybe(ctx.can_go_back.then_some(Message::Back));

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(back)
        .push(Text::new(title).size(typography::TITLE_MD));

    let body = match ctx.category {
        Some(name) => build_filtered(&ctx, name),
        None => build_all(&ctx),
    };

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .into()
}

/// The selected category followed by its siblings.
fn build_filtered<'a>(ctx: &ViewContext<'a>, name: &'a str) -> Element<'a, Message> {
    let selected = ctx
        .store
        .categories()
        .iter()
        .find(|category| category.category_name == name);

    let Some(selected) = selected else {
        return Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("services-unknown-category", &[("category", name)]),
                )
                .style(styles::text::muted),
            )
            .push(
                button(Text::new(ctx.i18n.tr("services-show-all")))
                    .style(styles::button::primary)
                    .on_press(Message::ShowAll),
            )
            .into();
    };

    let siblings = ctx
        .store
        .category_index()
        .categories_of(selected.category_type);
    let group_name = ctx
        .store
        .category_types()
        .iter()
        .find(|t| t.id == selected.category_type)
        .map_or("", |t| t.name.as_str());

    Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(ctx.i18n.tr_with_args("services-related", &[("group", group_name)]))
                .size(typography::TITLE_SM),
        )
        .push(build_chips(siblings, Some(name)))
        .push(
            button(Text::new(ctx.i18n.tr("services-show-all")))
                .style(styles::button::ghost)
                .on_press(Message::ShowAll),
        )
        .into()
}

/// Every category grouped under its type.
fn build_all<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let types = ctx.store.category_types();
    if types.is_empty() {
        return Text::new(ctx.i18n.tr("services-empty"))
            .style(styles::text::muted)
            .into();
    }

    types
        .iter()
        .fold(Column::new().spacing(spacing::LG), |col, t: &'a CategoryType| {
            col.push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(t.name.as_str()).size(typography::TITLE_SM))
                    .push(build_chips(ctx.store.category_index().categories_of(t.id), None)),
            )
        })
        .into()
}

fn build_chips<'a>(categories: &'a [Category], selected: Option<&str>) -> Element<'a, Message> {
    let row = categories.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, category| {
            let is_selected = selected == Some(category.category_name.as_str());
            let chip = button(Text::new(category.category_name.as_str()).size(typography::BODY_SM))
                .style(styles::button::menu_trigger(is_selected))
                .on_press(Message::SelectCategory(category.category_name.clone()));
            row.push(chip)
        },
    );
    Container::new(row.wrap()).width(Length::Fill).into()
}
