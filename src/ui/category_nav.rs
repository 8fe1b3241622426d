// SPDX-License-Identifier: MPL-2.0
//! Category navigation bar.
//!
//! One trigger per category type. Expanding a trigger lists the categories
//! of that type; choosing one navigates to the service listing filtered by
//! the category name. At most one menu is open at a time.

use crate::app::route::Route;
use crate::domain::category::{Category, CategoryType, CategoryTypeId};
use crate::i18n::I18n;
use crate::store::Store;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navigation bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    /// Type whose menu is expanded, if any.
    pub open: Option<CategoryTypeId>,
}

/// Messages emitted by the navigation bar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu(CategoryTypeId),
    CloseMenu,
    SelectCategory(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A menu was expanded.
    MenuOpened(CategoryTypeId),
    Navigate(Route),
}

/// Process a navigation message and return the corresponding event.
pub fn update(message: Message, open: &mut Option<CategoryTypeId>) -> Event {
    match message {
        Message::ToggleMenu(type_id) => {
            if *open == Some(type_id) {
                *open = None;
                Event::None
            } else {
                *open = Some(type_id);
                Event::MenuOpened(type_id)
            }
        }
        Message::CloseMenu => {
            *open = None;
            Event::None
        }
        Message::SelectCategory(name) => {
            *open = None;
            Event::Navigate(Route::services_in(name))
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let index = ctx.store.category_index();

    let row = ctx.store.category_types().iter().fold(
        Row::new().spacing(spacing::SM).align_y(Vertical::Top),
        |row, category_type| {
            let is_open = ctx.open == Some(category_type.id);
            let mut group = Column::new()
                .spacing(spacing::XXS)
                .push(build_trigger(category_type, is_open));
            if is_open {
                group = group.push(build_dropdown(
                    ctx.i18n,
                    index.categories_of(category_type.id),
                ));
            }
            row.push(group)
        },
    );

    Container::new(row.padding(spacing::XS))
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Build the trigger button of one category type.
fn build_trigger<'a>(category_type: &'a CategoryType, is_open: bool) -> Element<'a, Message> {
    let chevron = if is_open {
        icons::chevron_up()
    } else {
        icons::chevron_down()
    };

    let content = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(Text::new(category_type.name.as_str()).size(typography::BODY_LG))
        .push(icons::sized(chevron, sizing::ICON_SM));

    button(content)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::menu_trigger(is_open))
        .on_press(Message::ToggleMenu(category_type.id))
        .into()
}

/// Build the list of categories under an open trigger.
fn build_dropdown<'a>(i18n: &'a I18n, categories: &'a [Category]) -> Element<'a, Message> {
    let items = if categories.is_empty() {
        Column::new().push(
            Text::new(i18n.tr("category-menu-empty"))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
    } else {
        categories.iter().fold(Column::new(), |col, category| {
            col.push(build_menu_item(category))
        })
    };

    Container::new(items.spacing(spacing::XXS))
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::dropdown)
        .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(category: &'a Category) -> Element<'a, Message> {
    button(Text::new(category.category_name.as_str()).size(typography::BODY_SM))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::menu_item)
        .on_press(Message::SelectCategory(category.category_name.clone()))
        .into()
}
