// SPDX-License-Identifier: MPL-2.0
//! Page metadata: turns optional page properties into document head tags.
//!
//! Rendering is pure. Applying the tags is the job of a
//! [`HeadManager`](crate::application::port::HeadManager), which replaces
//! any previously applied set.

use crate::domain::head::HeadTag;

pub const DEFAULT_TITLE: &str = "Your Project's name";
pub const DEFAULT_DESCRIPTION: &str = "Add default description here";
pub const DEFAULT_AUTHOR: &str = "Default Author";
pub const DEFAULT_KEYWORDS: &str = "Add default keywords here";
pub const DEFAULT_THUMBNAIL: &str = "Add default thumbnail here";

const OG_TYPE: &str = "Service Listing Platform";
const TWITTER_CARD: &str = "summary_large_image";

/// Properties of a page. Missing values fall back to the `DEFAULT_*` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<String>,
    pub thumbnail: Option<String>,
}

impl PageMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    #[must_use]
    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Produces the full head tag set. Values are not validated.
    #[must_use]
    pub fn tags(&self) -> Vec<HeadTag> {
        let title = resolve(&self.title, DEFAULT_TITLE);
        let description = resolve(&self.description, DEFAULT_DESCRIPTION);
        let author = resolve(&self.author, DEFAULT_AUTHOR);
        let keywords = resolve(&self.keywords, DEFAULT_KEYWORDS);
        let thumbnail = resolve(&self.thumbnail, DEFAULT_THUMBNAIL);

        vec![
            HeadTag::Title(title.to_string()),
            HeadTag::meta("title", title),
            HeadTag::meta("description", description),
            HeadTag::meta("author", author),
            HeadTag::meta("keywords", keywords),
            HeadTag::meta("thumbnail", thumbnail),
            // Open Graph
            HeadTag::property("og:url", ""),
            HeadTag::property("og:type", OG_TYPE),
            HeadTag::property("og:title", title),
            HeadTag::property("og:description", description),
            HeadTag::property("og:image", thumbnail),
            // Twitter Card
            HeadTag::meta("twitter:card", TWITTER_CARD),
            HeadTag::meta("twitter:title", title),
            HeadTag::meta("twitter:description", description),
            HeadTag::meta("twitter:image", thumbnail),
        ]
    }
}

fn resolve<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of<'a>(tags: &'a [HeadTag], key: &str) -> Option<&'a str> {
        tags.iter().find(|t| t.key() == key).map(HeadTag::content)
    }

    #[test]
    fn no_props_uses_every_default() {
        let tags = PageMetadata::new().tags();

        assert_eq!(content_of(&tags, "title"), Some(DEFAULT_TITLE));
        assert_eq!(content_of(&tags, "name:title"), Some(DEFAULT_TITLE));
        assert_eq!(content_of(&tags, "name:description"), Some(DEFAULT_DESCRIPTION));
        assert_eq!(content_of(&tags, "name:author"), Some(DEFAULT_AUTHOR));
        assert_eq!(content_of(&tags, "name:keywords"), Some(DEFAULT_KEYWORDS));
        assert_eq!(content_of(&tags, "name:thumbnail"), Some(DEFAULT_THUMBNAIL));
        assert_eq!(content_of(&tags, "property:og:url"), Some(""));
        assert_eq!(
            content_of(&tags, "property:og:type"),
            Some("Service Listing Platform")
        );
        assert_eq!(content_of(&tags, "property:og:image"), Some(DEFAULT_THUMBNAIL));
    }

    #[test]
    fn title_prop_feeds_title_og_and_twitter() {
        let tags = PageMetadata::new().title("Plumbing services").tags();

        assert_eq!(content_of(&tags, "title"), Some("Plumbing services"));
        assert_eq!(content_of(&tags, "name:title"), Some("Plumbing services"));
        assert_eq!(content_of(&tags, "property:og:title"), Some("Plumbing services"));
        assert_eq!(content_of(&tags, "name:twitter:title"), Some("Plumbing services"));
        assert_eq!(content_of(&tags, "name:description"), Some(DEFAULT_DESCRIPTION));
    }

    #[test]
    fn description_prop_feeds_meta_og_and_twitter() {
        let tags = PageMetadata::new().description("Find a plumber nearby").tags();

        assert_eq!(content_of(&tags, "name:description"), Some("Find a plumber nearby"));
        assert_eq!(
            content_of(&tags, "property:og:description"),
            Some("Find a plumber nearby")
        );
        assert_eq!(
            content_of(&tags, "name:twitter:description"),
            Some("Find a plumber nearby")
        );
        assert_eq!(content_of(&tags, "name:title"), Some(DEFAULT_TITLE));
    }

    #[test]
    fn thumbnail_prop_feeds_every_image_tag() {
        let tags = PageMetadata::new().thumbnail("https://cdn/t.png").tags();
        assert_eq!(content_of(&tags, "name:thumbnail"), Some("https://cdn/t.png"));
        assert_eq!(content_of(&tags, "property:og:image"), Some("https://cdn/t.png"));
        assert_eq!(content_of(&tags, "name:twitter:image"), Some("https://cdn/t.png"));
    }

    #[test]
    fn tag_keys_are_unique() {
        let tags = PageMetadata::new().tags();
        let mut keys: Vec<_> = tags.iter().map(HeadTag::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), tags.len());
        assert_eq!(tags.len(), 15);
    }

    #[test]
    fn empty_strings_are_passed_through() {
        let tags = PageMetadata::new().author("").tags();
        assert_eq!(content_of(&tags, "name:author"), Some(""));
    }
}
