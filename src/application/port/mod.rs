// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`profile`]: Profile fetch and update
//! - [`upload`]: Avatar upload and download
//! - [`category`]: Category type and category lists
//! - [`head`]: Document head reconciliation
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Remote ports are `Send + Sync` and return `'static` boxed futures so
//!   callers can hand them straight to `Task::perform`
//! - Every network access of the app goes through these ports, so the
//!   in-memory adapter keeps `--offline` runs off the network
//! - Failures are reported as [`ApiError`]

pub mod category;
pub mod head;
pub mod profile;
pub mod upload;

use futures_util::future::BoxFuture;
use std::sync::Arc;

pub use crate::error::ApiError;
pub use category::CategoryApi;
pub use head::HeadManager;
pub use profile::ProfileApi;
pub use upload::UploadApi;

/// Future returned by every remote port.
pub type ApiFuture<T> = BoxFuture<'static, Result<T, ApiError>>;

/// A single adapter serving every remote port.
pub trait RemoteBackend: ProfileApi + UploadApi + CategoryApi {}

impl<T: ProfileApi + UploadApi + CategoryApi> RemoteBackend for T {}

/// Injected handles to the remote ports.
///
/// Cheap to clone; each field may be served by a different adapter.
#[derive(Clone)]
pub struct Backend {
    pub profile: Arc<dyn ProfileApi>,
    pub upload: Arc<dyn UploadApi>,
    pub category: Arc<dyn CategoryApi>,
}

impl Backend {
    /// Serves every port from one adapter.
    pub fn from_shared<B: RemoteBackend + 'static>(backend: Arc<B>) -> Self {
        Self {
            profile: backend.clone(),
            upload: backend.clone(),
            category: backend,
        }
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend").finish_non_exhaustive()
    }
}
