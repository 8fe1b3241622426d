// SPDX-License-Identifier: MPL-2.0
//! Avatar preview state.
//!
//! Choosing a file starts two independent operations: a local read into a
//! data URI for an immediate preview, and an upload whose URL replaces it.
//! Each choice gets a fresh [`SelectionId`]; results carrying an older id
//! are stale and discarded, so out-of-order completions from a previous
//! choice can never overwrite the preview of a newer one.

use std::fmt;

/// Identifier of one avatar file selection.
///
/// Ids only grow within a [`SelectionCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(u64);

impl SelectionId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues monotonically increasing [`SelectionId`]s and remembers the latest.
#[derive(Debug, Clone, Default)]
pub struct SelectionCounter {
    latest: u64,
}

impl SelectionCounter {
    /// Starts a new selection, superseding every earlier one.
    pub fn next(&mut self) -> SelectionId {
        self.latest += 1;
        SelectionId(self.latest)
    }

    /// Returns true if `id` is the most recent selection.
    #[must_use]
    pub fn is_latest(&self, id: SelectionId) -> bool {
        id.0 == self.latest
    }
}

/// An in-memory `data:` URI holding an encoded image.
#[derive(Clone, PartialEq, Eq)]
pub struct DataUri {
    uri: String,
    bytes: Vec<u8>,
}

impl DataUri {
    /// Assembles a data URI from an already base64-encoded payload.
    #[must_use]
    pub fn new(mime: &str, base64_payload: &str, bytes: Vec<u8>) -> Self {
        let uri = format!("data:{mime};base64,{base64_payload}");
        Self { uri, bytes }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Raw decoded bytes, used to render the preview without re-decoding.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataUri")
            .field("header", &self.uri.split(',').next().unwrap_or_default())
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What the avatar slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvatarPreview {
    /// Nothing to show: render the placeholder icon.
    #[default]
    Empty,
    /// The avatar already stored on the user record.
    Existing(String),
    /// Optimistic preview of a locally chosen file.
    Local { selection: SelectionId, data: DataUri },
    /// URL returned by a completed upload (authoritative).
    Uploaded { selection: SelectionId, url: String },
}

impl AvatarPreview {
    /// Image source for rendering: a URL or a data URI.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match self {
            AvatarPreview::Empty => None,
            AvatarPreview::Existing(url) => Some(url),
            AvatarPreview::Local { data, .. } => Some(data.as_str()),
            AvatarPreview::Uploaded { url, .. } => Some(url),
        }
    }

    /// Remote URL to fetch for display, if the preview is not local.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            AvatarPreview::Existing(url) | AvatarPreview::Uploaded { url, .. }
                if !url.starts_with("data:") =>
            {
                Some(url)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, AvatarPreview::Empty)
    }
}
