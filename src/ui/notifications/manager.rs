// SPDX-License-Identifier: MPL-2.0
//! Keeps at most [`MAX_VISIBLE_NOTIFICATIONS`] notices on screen and parks
//! the rest until a slot frees up.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::defaults::MAX_VISIBLE_NOTIFICATIONS;
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings and errors pushed afterwards are also recorded here.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.log_entry()),
                Severity::Error => handle.log_error(notification.log_entry()),
                Severity::Success => {}
            }
        }

        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.remove_where(|n| n.id() == id),
        }
    }

    /// Drops every visible notice whose lifetime ended before `now`.
    pub fn expire(&mut self, now: Instant) {
        self.remove_where(|n| n.is_expired(now));
    }

    /// Drops notices whose key starts with `prefix`, so a retried request
    /// that succeeds stops showing its earlier failure.
    pub fn clear_matching(&mut self, prefix: &str) {
        self.remove_where(|n| n.message_key().starts_with(prefix));
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Whether anything is shown or waiting.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.waiting.is_empty()
    }

    fn remove_where(&mut self, matches: impl Fn(&Notification) -> bool) {
        self.visible.retain(|n| !matches(n));
        self.waiting.retain(|n| !matches(n));

        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            let Some(next) = self.waiting.pop_front() else {
                break;
            };
            self.visible.push_back(next);
        }
    }
}
