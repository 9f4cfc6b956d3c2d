//! Configuration structures and defaults for the downloader.

use std::time::Duration;

/// Retries allowed after connection timeouts, so at most six requests.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Configuration structure for the downloader.
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Number of times a timed out request is issued again.
    pub retries: u32,
    /// Base delay before a retry, doubled after each one. Zero retries at once.
    pub retry_backoff: Duration,
    /// Delete the destination when writing it failed.
    pub remove_partial: bool,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            retries: DEFAULT_MAX_RETRIES,
            retry_backoff: Duration::ZERO,
            remove_partial: false,
        }
    }
}
