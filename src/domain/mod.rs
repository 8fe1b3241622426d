// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity. Wire formats live in the
//! infrastructure adapters, which map to and from these types.
//!
//! # Modules
//!
//! - [`profile`]: Profile types ([`UserProfile`](profile::UserProfile),
//!   [`AccessToken`](profile::AccessToken), [`ProfileStatus`](profile::ProfileStatus))
//! - [`category`]: Category types ([`CategoryType`](category::CategoryType),
//!   [`Category`](category::Category), [`CategoryIndex`](category::CategoryIndex))
//! - [`head`]: Document head tags ([`HeadTag`](head::HeadTag))
//! - [`avatar`]: Avatar preview types ([`AvatarPreview`](avatar::AvatarPreview),
//!   [`SelectionId`](avatar::SelectionId), [`DataUri`](avatar::DataUri))

pub mod avatar;
pub mod category;
pub mod head;
pub mod profile;
