// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and orchestration seams.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives ports by injection, never a global instance
//!
//! # Example
//!
//! ```ignore
//! use iced_services::application::port::Backend;
//! use iced_services::infrastructure::http::HttpBackend;
//!
//! let http = HttpBackend::new(&config.api.base_url, config.api.timeout())?;
//! let backend = Backend::from_shared(std::sync::Arc::new(http));
//! ```

pub mod port;
