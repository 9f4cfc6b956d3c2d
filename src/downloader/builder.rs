//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ```rust
//! use ferry::downloader::DownloaderBuilder;
//! use ferry::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let downloader = DownloaderBuilder::new()
//!     .retries(3)
//!     .retry_backoff(Duration::from_millis(250))
//!     .remove_partial(true)
//!     .build(client);
//! assert_eq!(downloader.retries(), 3);
//! # Ok(())
//! # }
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::http::Transport;

use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Downloader`].
#[derive(Debug, Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Set the number of retries after a connection timeout.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Wait before each retry, starting at `base` and doubling every time.
    pub fn retry_backoff(mut self, base: Duration) -> Self {
        self.config.retry_backoff = base;
        self
    }

    /// Delete the destination file when the download fails after creating it.
    ///
    /// Off by default: partial output is left on disk.
    pub fn remove_partial(mut self, remove_partial: bool) -> Self {
        self.config.remove_partial = remove_partial;
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build<T: Transport>(self, transport: T) -> Downloader<T> {
        self.build_shared(Arc::new(transport))
    }

    /// Create the [`Downloader`] around a transport shared with other users.
    pub fn build_shared<T: Transport>(self, transport: Arc<T>) -> Downloader<T> {
        Downloader::new(transport, self.config)
    }
}
