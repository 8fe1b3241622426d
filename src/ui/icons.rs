// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`.
//! Handles are cached using `OnceLock`, and every icon is tinted with the
//! active theme's text color so a single asset serves light and dark themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let label = row![icons::sized(icons::envelope(), 16.0), text("Email")];
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `envelope` not `email_field`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone()).style(themed)
        }
    };
}

// =============================================================================
// Form Field Icons
// =============================================================================

define_icon!(user, "user.svg", "User icon: head and shoulders.");
define_icon!(envelope, "envelope.svg", "Envelope icon: closed letter.");
define_icon!(phone, "phone.svg", "Phone icon: handset.");
define_icon!(calendar, "calendar.svg", "Calendar icon: page with rings.");
define_icon!(camera, "camera.svg", "Camera icon: avatar placeholder.");

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(chevron_down, "chevron_down.svg", "Chevron pointing down.");
define_icon!(chevron_up, "chevron_up.svg", "Chevron pointing up.");
define_icon!(arrow_left, "arrow_left.svg", "Arrow pointing left.");

// =============================================================================
// Status & Action Icons
// =============================================================================

define_icon!(cross, "cross.svg", "Cross icon: two diagonal lines.");
define_icon!(checkmark, "checkmark.svg", "Checkmark icon.");
define_icon!(warning, "warning.svg", "Warning icon: exclamation in a triangle.");
define_icon!(download, "download.svg", "Download icon: arrow into a tray.");
define_icon!(theme, "theme.svg", "Half-filled circle used for the theme toggle.");

/// Tints the icon with the theme's text color.
fn themed(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

/// Returns an icon tinted with a fixed color instead of the theme text color.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Creates an icon with a specific size.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
