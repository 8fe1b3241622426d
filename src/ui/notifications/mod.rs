// SPDX-License-Identifier: MPL-2.0
//! Toasts reporting the outcome of remote operations (profile saved,
//! upload failed, categories unavailable) without blocking the form.
//!
//! Successes fade after 3 seconds and warnings after 5. Errors stay until
//! dismissed. At most three are shown at once; the rest wait their turn.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Cause, Notification, NotificationId, Severity};
pub use toast::overlay;
