// SPDX-License-Identifier: MPL-2.0
//! Local image files: picking, MIME sniffing, and data URI encoding.

use crate::domain::avatar::DataUri;
use crate::error::ApiError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::{Path, PathBuf};

/// Extensions offered by the avatar file dialog. The filter is only a hint:
/// the content is sniffed regardless of the extension.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

const FALLBACK_MIME: &str = "application/octet-stream";

/// Opens the native file dialog filtered to images.
pub async fn pick_image(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Guesses the MIME type from the leading bytes.
#[must_use]
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image_rs::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// Encodes raw bytes into a `data:` URI.
#[must_use]
pub fn encode_data_uri(bytes: Vec<u8>) -> DataUri {
    let mime = sniff_mime(&bytes);
    let payload = STANDARD.encode(&bytes);
    DataUri::new(mime, &payload, bytes)
}

/// Decodes the payload of a base64 `data:` URI.
///
/// Returns `None` for other URIs and for malformed payloads.
#[must_use]
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}

/// Reads a file and encodes it as a `data:` URI.
///
/// # Errors
///
/// Returns [`ApiError::Io`] if the file cannot be read.
pub async fn read_data_uri(path: impl AsRef<Path>) -> Result<DataUri, ApiError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    Ok(encode_data_uri(bytes))
}
