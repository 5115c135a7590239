//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the commonly used default
//! timeout values and provide a small conversion helper so tests and code
//! can express timeouts in milliseconds clearly.

use std::time::Duration;

/// Default read timeout in milliseconds used for block-read exchanges when
/// a caller doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Per-attempt timeout in milliseconds for a single polling exchange. A
/// missing card shows up as a transport timeout within this window.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}
