// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by the profile form, the category menus,
the listing screen and the toasts. Styles in [`crate::ui::styles`] read
these values; views use them directly only for layout.

```
use iced_services::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let hover = Color {
    a: opacity::HOVER,
    ..palette::PRIMARY_500
};
let gap = spacing::MD;
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    // Neutrals for disabled controls and menu hover fills
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand teal: Save button and the open category trigger
    pub const PRIMARY_400: Color = Color::from_rgb(0.24, 0.70, 0.66);
    pub const PRIMARY_500: Color = Color::from_rgb(0.13, 0.59, 0.55);
    pub const PRIMARY_600: Color = Color::from_rgb(0.08, 0.48, 0.45);

    /// Validation messages, the store error line and error toasts.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

/// Alpha values applied on top of palette colors.
pub mod opacity {
    pub const HOVER: f32 = 0.2;
    pub const PRESSED: f32 = 0.5;
    /// Secondary text such as captions and toast details.
    pub const MUTED_TEXT: f32 = 0.7;
    /// Header and form panels drawn over the window background.
    pub const SURFACE: f32 = 0.95;
}

/// 4px-based spacing scale.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Field label icons, header buttons, toast dismiss.
    pub const ICON_SM: f32 = 16.0;
    /// Toast severity icon.
    pub const ICON_MD: f32 = 24.0;
    /// Camera placeholder inside an empty avatar slot.
    pub const ICON_XL: f32 = 48.0;

    /// Diameter of the avatar slot on the profile form.
    pub const AVATAR: f32 = 120.0;
    /// Maximum width of the profile form card.
    pub const FORM_WIDTH: f32 = 560.0;
    /// Width of an open category dropdown.
    pub const MENU_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    //! Form title, screen titles, body text, and captions for inline
    //! validation errors.

    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Severity accent around a toast.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Makes a square container round (avatar slot).
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting Save button.
    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Dropdowns, toasts and the hovered Save button.
    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(opacity::HOVER < opacity::PRESSED);
    assert!(opacity::SURFACE < 1.0);
    assert!(sizing::AVATAR > sizing::ICON_XL);
    assert!(sizing::MENU_WIDTH < sizing::FORM_WIDTH);
};
