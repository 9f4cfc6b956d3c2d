//! Retry bookkeeping for a single download.

use std::time::Duration;

/// Position of a request within the retry budget of a download.
///
/// An attempt is passed by value: [`DownloadAttempt::next`] consumes it and
/// returns the following one while the budget allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadAttempt {
    retries_used: u32,
    max_retries: u32,
}

impl DownloadAttempt {
    /// The first request of a download allowed `max_retries` retries.
    pub fn first(max_retries: u32) -> Self {
        Self {
            retries_used: 0,
            max_retries,
        }
    }

    /// 1-based number of the request.
    pub fn number(&self) -> u32 {
        self.retries_used + 1
    }

    /// Retries consumed so far.
    pub fn retries_used(&self) -> u32 {
        self.retries_used
    }

    /// Retries allowed in total.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// The next attempt, or `None` once the budget is exhausted.
    pub fn next(self) -> Option<Self> {
        (self.retries_used < self.max_retries).then(|| Self {
            retries_used: self.retries_used + 1,
            ..self
        })
    }
}

/// Delay before retry number `retry_count` (0-indexed): `base * 2^retry_count`.
pub fn retry_delay(retry_count: u32, base: Duration) -> Duration {
    base.saturating_mul(2_u32.saturating_pow(retry_count))
}
