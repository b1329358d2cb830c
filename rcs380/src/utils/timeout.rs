//! Timeout helpers.
//!
//! The protocol layer never times out on its own; these values only
//! configure the USB transport's per-transfer timeout.

use std::time::Duration;

/// Default bulk transfer timeout in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default transfer timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}
