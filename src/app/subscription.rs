// SPDX-License-Identifier: MPL-2.0
//! Subscription management for periodic ticks.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval of the tick driving toast auto-dismiss and diagnostics draining.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the tick subscription, active only while toasts are shown or a
/// remote request is in flight.
pub fn create_tick_subscription(has_notifications: bool, is_loading: bool) -> Subscription<Message> {
    if has_notifications || is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
