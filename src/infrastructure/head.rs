// SPDX-License-Identifier: MPL-2.0
//! Desktop head manager.
//!
//! A desktop window has no document head: the `<title>` tag drives the
//! window title and the full set is kept so it can be exported as an HTML
//! fragment for the published listing page.

use crate::application::port::HeadManager;
use crate::domain::head::HeadTag;

#[derive(Debug, Clone, Default)]
pub struct WindowHead {
    tags: Vec<HeadTag>,
}

impl WindowHead {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tags(&self) -> &[HeadTag] {
        &self.tags
    }

    /// Renders the current set, one tag per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.tags
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HeadManager for WindowHead {
    /// Replaces the whole set. Within one call, a later tag with the same
    /// key wins and keeps the position of the first occurrence.
    fn reconcile(&mut self, tags: &[HeadTag]) {
        let mut next: Vec<HeadTag> = Vec::with_capacity(tags.len());
        for tag in tags {
            let key = tag.key();
            match next.iter_mut().find(|t| t.key() == key) {
                Some(existing) => *existing = tag.clone(),
                None => next.push(tag.clone()),
            }
        }
        self.tags = next;
    }

    fn title(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            HeadTag::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
