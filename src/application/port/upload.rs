// SPDX-License-Identifier: MPL-2.0
//! Image upload and download port.

use super::ApiFuture;
use std::path::PathBuf;

/// Port for moving avatar images to and from the image host.
///
/// The adapter reads the file itself so the upload runs independently of
/// any local preview read of the same file.
pub trait UploadApi: Send + Sync {
    /// Uploads the image at `path` and returns the URL it is served from.
    fn upload_image(&self, path: PathBuf) -> ApiFuture<String>;

    /// Fetches the bytes of a previously uploaded image for display.
    /// Adapters bound the size and duration of the transfer.
    fn download_image(&self, url: String) -> ApiFuture<Vec<u8>>;
}
