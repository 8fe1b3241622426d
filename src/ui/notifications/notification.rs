// SPDX-License-Identifier: MPL-2.0
//! Notice model: what happened, how serious it is, and why it failed.
//!
//! A notice carries an i18n key and its arguments. Failures additionally
//! carry a [`Cause`]: the localized reason category of an [`ApiError`]
//! (fed to the message as `$reason`) and the raw text reported by the
//! server or the OS, shown as a second line.

use crate::error::ApiError;
use crate::i18n::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const SUCCESS_LIFETIME: Duration = Duration::from_secs(3);
const WARNING_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// How a notice is colored and how long it stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Saved profile, written export.
    Success,
    /// Degraded but usable: sample data, missing categories, config issues.
    Warning,
    /// A user action failed. Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Time on screen before the notice expires. Errors never expire.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(SUCCESS_LIFETIME),
            Severity::Warning => Some(WARNING_LIFETIME),
            Severity::Error => None,
        }
    }
}

/// Why an operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// i18n key of the failure category, passed as `$reason`.
    pub reason_key: Option<&'static str>,
    /// Untranslated text from the server or the OS.
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    cause: Option<Cause>,
    expires_at: Option<Instant>,
}

impl Notification {
    fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            cause: None,
            expires_at: severity.lifetime().map(|lifetime| Instant::now() + lifetime),
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    /// Attributes the notice to a failed remote call or file read.
    #[must_use]
    pub fn caused_by(mut self, err: &ApiError) -> Self {
        self.cause = Some(Cause {
            reason_key: Some(err.i18n_key()),
            message: err.user_message(),
        });
        self
    }

    /// Attributes the notice to a local failure with no reason category.
    /// Blank text is ignored.
    #[must_use]
    pub fn caused_by_text(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.cause = Some(Cause {
                reason_key: None,
                message,
            });
        }
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }

    /// Translated headline, with the localized reason as `$reason`.
    #[must_use]
    pub fn headline(&self, i18n: &I18n) -> String {
        let reason = self
            .cause
            .as_ref()
            .and_then(|cause| cause.reason_key)
            .map(|key| i18n.tr(key));

        let mut args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        if let Some(reason) = reason.as_deref() {
            args.push(("reason", reason));
        }

        if args.is_empty() {
            i18n.tr(&self.key)
        } else {
            i18n.tr_with_args(&self.key, &args)
        }
    }

    /// One-line form used for diagnostics: key, then the raw cause.
    #[must_use]
    pub fn log_entry(&self) -> String {
        match &self.cause {
            Some(cause) => format!("{}: {}", self.key, cause.message),
            None => self.key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), None, &Config::default())
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(
            Notification::success("a").id(),
            Notification::success("a").id()
        );
    }

    #[test]
    fn errors_never_expire() {
        let notice = Notification::error("notification-export-error");
        assert!(!notice.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn warnings_outlive_successes() {
        let now = Instant::now();
        let success = Notification::success("s");
        let warning = Notification::warning("w");
        let after_success = now + SUCCESS_LIFETIME + Duration::from_millis(100);

        assert!(success.is_expired(after_success));
        assert!(!warning.is_expired(after_success));
        assert!(warning.is_expired(now + WARNING_LIFETIME + Duration::from_millis(100)));
    }

    #[test]
    fn api_cause_fills_reason_and_keeps_server_text() {
        let err = ApiError::Status {
            code: 422,
            message: Some("Email already taken".into()),
        };
        let notice = Notification::error("notification-profile-update-error").caused_by(&err);

        assert_eq!(
            notice.headline(&english()),
            "Could not save the profile: the server rejected the request"
        );
        assert_eq!(
            notice.cause().map(|c| c.message.as_str()),
            Some("Email already taken")
        );
        assert_eq!(
            notice.log_entry(),
            "notification-profile-update-error: Email already taken"
        );
    }

    #[test]
    fn text_cause_has_no_reason_and_blank_text_is_dropped() {
        let notice = Notification::warning("notification-config-save-error")
            .caused_by_text("permission denied");
        assert_eq!(notice.cause().and_then(|c| c.reason_key), None);

        let blank = Notification::warning("w").caused_by_text("  ");
        assert!(blank.cause().is_none());
    }

    #[test]
    fn explicit_args_are_interpolated() {
        let notice = Notification::success("notification-export-success").with_arg("path", "/tmp/x");
        assert_eq!(notice.headline(&english()), "Saved to /tmp/x");
    }
}
