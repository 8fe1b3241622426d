// SPDX-License-Identifier: MPL-2.0
//! Decoded handles of remote avatars, keyed by URL.
//!
//! Each URL is downloaded at most once while it stays in the cache.
//! Failed downloads are remembered too, so a broken URL shows the
//! placeholder instead of being retried on every render.

use crate::config::defaults::AVATAR_CACHE_CAPACITY;
use crate::domain::avatar::AvatarPreview;
use crate::error::ApiError;
use crate::infrastructure::file;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
enum Entry {
    Pending,
    Ready(Handle),
    Failed,
}

/// LRU cache of avatar image handles.
#[derive(Debug)]
pub struct AvatarCache {
    cache: LruCache<String, Entry>,
}

impl Default for AvatarCache {
    fn default() -> Self {
        Self::new(AVATAR_CACHE_CAPACITY)
    }
}

impl AvatarCache {
    /// Creates a cache holding up to `capacity` URLs (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Cache key of the image a preview shows.
    ///
    /// Local previews are keyed by selection so the (large) data URI is
    /// not hashed on every render.
    #[must_use]
    pub fn key_for(preview: &AvatarPreview) -> Option<String> {
        match preview {
            AvatarPreview::Local { selection, .. } => Some(format!("local:{}", selection.value())),
            other => other.source().map(str::to_string),
        }
    }

    /// Makes sure the image of `preview` is (or will be) available.
    ///
    /// In-memory sources are decoded right away. Returns the URL to
    /// download when the preview points at a remote image not seen before.
    pub fn prepare(&mut self, preview: &AvatarPreview) -> Option<String> {
        let key = Self::key_for(preview)?;
        if let AvatarPreview::Local { data, .. } = preview {
            if self.cache.get(&key).is_none() {
                self.finish(key, Ok(data.bytes().to_vec()));
            }
            return None;
        }
        if !self.request(&key) {
            return None;
        }
        if preview.remote_url().is_some() {
            return Some(key);
        }
        let decoded = file::decode_data_uri(&key)
            .ok_or_else(|| ApiError::Decode("malformed data URI".to_string()));
        self.finish(key, decoded);
        None
    }

    /// Handle for the image `preview` shows, once available.
    #[must_use]
    pub fn handle_for(&self, preview: &AvatarPreview) -> Option<&Handle> {
        Self::key_for(preview).and_then(|key| self.get(&key))
    }

    /// Marks `url` as being downloaded.
    ///
    /// Returns `true` if the caller should start the download, `false` if
    /// the URL is already pending, loaded, or known to fail.
    pub fn request(&mut self, url: &str) -> bool {
        if self.cache.get(url).is_some() {
            return false;
        }
        self.cache.put(url.to_string(), Entry::Pending);
        true
    }

    /// Stores the outcome of a download.
    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, ApiError>) {
        let entry = match result {
            Ok(bytes) => Entry::Ready(Handle::from_bytes(bytes)),
            Err(_) => Entry::Failed,
        };
        self.cache.put(url, entry);
    }

    /// Returns the decoded handle for `url` without touching LRU order.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Handle> {
        match self.cache.peek(url) {
            Some(Entry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::avatar::{DataUri, SelectionCounter};

    #[test]
    fn url_is_requested_once() {
        let mut cache = AvatarCache::default();
        assert!(cache.request("https://cdn/a.png"));
        assert!(!cache.request("https://cdn/a.png"));
        assert!(cache.get("https://cdn/a.png").is_none());
    }

    #[test]
    fn finished_download_is_available() {
        let mut cache = AvatarCache::default();
        cache.request("https://cdn/a.png");
        cache.finish("https://cdn/a.png".into(), Ok(vec![1, 2, 3]));
        assert!(cache.get("https://cdn/a.png").is_some());
        assert!(!cache.request("https://cdn/a.png"));
    }

    #[test]
    fn failed_download_is_not_retried() {
        let mut cache = AvatarCache::default();
        cache.request("https://cdn/broken.png");
        cache.finish(
            "https://cdn/broken.png".into(),
            Err(ApiError::Status {
                code: 404,
                message: None,
            }),
        );
        assert!(cache.get("https://cdn/broken.png").is_none());
        assert!(!cache.request("https://cdn/broken.png"));
    }

    #[test]
    fn least_recently_used_url_is_evicted() {
        let mut cache = AvatarCache::new(2);
        cache.request("a");
        cache.request("b");
        cache.request("c");
        assert_eq!(cache.len(), 2);
        assert!(cache.request("a"));
    }

    #[test]
    fn prepare_downloads_remote_previews_once() {
        let mut cache = AvatarCache::default();
        let preview = AvatarPreview::Existing("https://cdn/a.png".into());
        assert_eq!(cache.prepare(&preview), Some("https://cdn/a.png".to_string()));
        assert_eq!(cache.prepare(&preview), None);
        assert!(cache.handle_for(&preview).is_none());
    }

    #[test]
    fn prepare_decodes_in_memory_sources() {
        let mut counter = SelectionCounter::default();
        let selection = counter.next();
        let mut cache = AvatarCache::default();

        let local = AvatarPreview::Local {
            selection,
            data: DataUri::new("image/png", "QQ==", vec![b'A']),
        };
        assert_eq!(cache.prepare(&local), None);
        assert!(cache.handle_for(&local).is_some());

        let uploaded = AvatarPreview::Uploaded {
            selection,
            url: "data:image/png;base64,QQ==".into(),
        };
        assert_eq!(cache.prepare(&uploaded), None);
        assert!(cache.handle_for(&uploaded).is_some());
    }

    #[test]
    fn empty_preview_needs_nothing() {
        let mut cache = AvatarCache::default();
        assert_eq!(cache.prepare(&AvatarPreview::Empty), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache = AvatarCache::new(0);
        assert!(cache.is_empty());
        assert!(cache.request("a"));
        assert_eq!(cache.len(), 1);
    }
}
