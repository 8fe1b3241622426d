// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked in the bottom-right corner of the window.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Space, Svg, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// All visible notices, or an empty space when there are none.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| card(notification, i18n))
        .collect();

    if cards.is_empty() {
        return Space::new().into();
    }

    Container::new(
        Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn card<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    // [icon] [headline / server text] [dismiss]
    let mut lines = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(notification.headline(i18n)).size(typography::BODY));
    if let Some(cause) = notification.cause() {
        lines = lines.push(
            Text::new(cause.message.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );
    }

    let dismiss = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(
            icons::tinted(severity_icon(notification.severity()), accent),
            sizing::ICON_MD,
        ))
        .push(Container::new(lines).width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn severity_icon<'a>(severity: Severity) -> Svg<'a> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
