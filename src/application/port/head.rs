// SPDX-License-Identifier: MPL-2.0
//! Document head port.

use crate::domain::head::HeadTag;

/// Port accepting the desired set of head tags and reconciling it into the
/// host's document head.
///
/// Reconciliation replaces the whole set: tags absent from the latest call
/// are removed.
pub trait HeadManager {
    fn reconcile(&mut self, tags: &[HeadTag]);

    /// The document title currently in effect, if any.
    fn title(&self) -> Option<&str>;
}
