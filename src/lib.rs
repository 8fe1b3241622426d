// SPDX-License-Identifier: MPL-2.0
//! `iced_services` is an administration client for a service listing
//! platform, built with the Iced GUI framework.
//!
//! It lets a signed-in administrator edit their profile and avatar, browse
//! service categories grouped by type, and preview the page metadata
//! (title, Open Graph and Twitter Card tags) published for each page.
//! Remote services are reached through the ports in [`application::port`],
//! implemented over HTTP or in memory by [`infrastructure`].

#![doc(html_root_url = "https://docs.rs/iced_services/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod store;
pub mod ui;
