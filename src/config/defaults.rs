// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Remote backend location and request timeout
//! - **Avatar**: Remote avatar image cache
//! - **Notifications**: Toast stacking

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the service listing backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Avatar Defaults
// ==========================================================================

/// Number of decoded remote avatar images kept in memory.
pub const AVATAR_CACHE_CAPACITY: usize = 16;

/// Largest remote avatar accepted for display (in bytes).
pub const MAX_AVATAR_DOWNLOAD_BYTES: usize = 8 * 1024 * 1024;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts shown at once; older ones are queued.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_default_is_within_bounds() {
        let (min, default, max) = (MIN_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        assert!(min <= default && default <= max);
    }
}
