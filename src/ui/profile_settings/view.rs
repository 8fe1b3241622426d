// SPDX-License-Identifier: MPL-2.0
//! View rendering for the profile settings form.

use super::{AvatarCache, Message, State};
use crate::domain::profile::ProfileField;
use crate::i18n::I18n;
use crate::store::Store;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, container, image, scrollable, text, text_input, Column, Container, Row, Svg, Text,
};
use iced::alignment::{Horizontal, Vertical};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub store: &'a Store,
    pub avatar_cache: &'a AvatarCache,
}

/// Render the profile settings form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("profile-settings-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .center();

    let name_row = Row::new()
        .spacing(spacing::MD)
        .push(build_field(&ctx, ProfileField::FirstName))
        .push(build_field(&ctx, ProfileField::LastName));
    let contact_row = Row::new()
        .spacing(spacing::MD)
        .push(build_field(&ctx, ProfileField::Phone))
        .push(build_field(&ctx, ProfileField::DateOfBirth));

    let save_label = if ctx.state.is_submitting() {
        "profile-saving-button"
    } else {
        "profile-save-button"
    };
    let save = button(Text::new(ctx.i18n.tr(save_label)))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe(ctx.state.can_submit(ctx.store).then_some(Message::Submit));

    let mut form = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(build_avatar(&ctx))
        .push(name_row)
        .push(build_field(&ctx, ProfileField::Email))
        .push(contact_row)
        .push(
            Container::new(save)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    if ctx.store.status().is_failed() {
        if let Some(error) = ctx.store.error() {
            form = form.push(
                Text::new(error.to_string())
                    .width(Length::Fill)
                    .center()
                    .style(styles::text::error),
            );
        }
    }

    let card = Container::new(form)
        .max_width(sizing::FORM_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel);

    scrollable(
        Container::new(card)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Avatar slot with the "Add photo" caption. Clicking it opens the picker.
fn build_avatar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> =
        match ctx.avatar_cache.handle_for(ctx.state.preview()) {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(sizing::AVATAR))
                .height(Length::Fixed(sizing::AVATAR))
                .content_fit(ContentFit::Cover)
                .into(),
            None => icons::sized(icons::camera(), sizing::ICON_XL).into(),
        };

    let slot = Container::new(content)
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .clip(true)
        .style(styles::container::avatar_slot);

    let picker = button(slot)
        .padding(0)
        .style(styles::button::ghost)
        .on_press(Message::PickAvatar);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(picker)
        .push(
            Text::new(ctx.i18n.tr("profile-add-photo"))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .into()
}

/// Build a labelled input with a leading icon and its inline error.
fn build_field<'a>(ctx: &ViewContext<'a>, field: ProfileField) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(label_key(field))).size(typography::BODY_SM);

    let input = text_input(&ctx.i18n.tr(placeholder_key(field)), ctx.state.values().get(field))
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY);

    let input_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(field_icon(field), sizing::ICON_SM))
        .push(input);

    let mut col = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(label)
        .push(input_row);

    if let Some(key) = ctx.state.errors().get(field) {
        col = col.push(
            text(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .style(styles::text::error),
        );
    }

    container(col).width(Length::Fill).into()
}

fn field_icon<'a>(field: ProfileField) -> Svg<'a> {
    match field {
        ProfileField::FirstName | ProfileField::LastName => icons::user(),
        ProfileField::Email => icons::envelope(),
        ProfileField::Phone => icons::phone(),
        ProfileField::DateOfBirth => icons::calendar(),
    }
}

fn label_key(field: ProfileField) -> &'static str {
    match field {
        ProfileField::FirstName => "profile-first-name",
        ProfileField::LastName => "profile-last-name",
        ProfileField::Email => "profile-email",
        ProfileField::Phone => "profile-phone",
        ProfileField::DateOfBirth => "profile-date-of-birth",
    }
}

fn placeholder_key(field: ProfileField) -> &'static str {
    match field {
        ProfileField::DateOfBirth => "profile-date-placeholder",
        _ => "profile-field-placeholder",
    }
}
