// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Profile, upload and category services over HTTP
//! - [`memory`]: In-memory backend for offline runs and tests
//! - [`head`]: Window title and exportable head fragment
//! - [`file`]: Image file dialog and `data:` URI encoding

pub mod file;
pub mod head;
pub mod http;
pub mod memory;

pub use head::WindowHead;
pub use http::HttpBackend;
pub use memory::InMemoryBackend;
