// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translations, optionally extended from a directory
//! - Runtime language switching
//! - Untranslated keys are displayed as the key itself

pub mod fluent;

pub use fluent::I18n;
