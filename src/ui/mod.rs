// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`profile_settings`] - Profile form with avatar preview and upload
//! - [`service_listing`] - Categories reached from the navigation bar
//!
//! # Shared Components
//!
//! - [`category_nav`] - Dropdown menus of categories grouped by type
//! - [`page_metadata`] - Document head tags describing the current page
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod category_nav;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod page_metadata;
pub mod profile_settings;
pub mod service_listing;
pub mod styles;
pub mod theming;
