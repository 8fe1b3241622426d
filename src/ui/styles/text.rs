// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::text;
use iced::{Color, Theme};

/// Inline validation messages and request errors.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Captions and secondary labels.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::MUTED_TEXT,
            ..theme.palette().text
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_is_red() {
        assert_eq!(error(&Theme::Light).color, Some(palette::ERROR_500));
    }

    #[test]
    fn muted_text_is_translucent() {
        let color = muted(&Theme::Dark).color.unwrap();
        assert!(color.a < 1.0);
    }
}
