//! Terminal progress bar listener.
//!
//! [`ProgressBarListener`] draws the percentages of a download on an
//! indicatif progress bar and finishes it on the terminal notification.
//!
//! ```rust,no_run
//! use ferry::download::DownloadRequest;
//! use ferry::progress::{ProgressBarListener, ProgressBarOpts};
//! use ferry::{create_http_client, DownloaderBuilder, HttpClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build(create_http_client(HttpClientConfig::default())?);
//! let request = DownloadRequest::parse("https://example.com/file.zip", "file.zip")?;
//!
//! let bar = ProgressBarListener::new(ProgressBarOpts::with_message_style()).with_message("file.zip");
//! downloader.download(&request, &bar).await;
//! # Ok(())
//! # }
//! ```

use super::style::ProgressBarOpts;
use crate::download::{DownloadListener, Summary};
use crate::error::Error;

use indicatif::ProgressBar;
use std::borrow::Cow;

/// Listener reporting progress on a terminal bar.
#[derive(Debug, Clone)]
pub struct ProgressBarListener {
    bar: ProgressBar,
    clear: bool,
}

impl ProgressBarListener {
    /// Create a listener drawing a bar styled by `opts`.
    pub fn new(opts: ProgressBarOpts) -> Self {
        let clear = opts.clear;
        Self {
            bar: opts.to_progress_bar(),
            clear,
        }
    }

    /// Create a listener whose bar is never drawn.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden())
    }

    /// Set the message shown by templates using `{msg}`.
    pub fn with_message(self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.bar.set_message(msg);
        self
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl Default for ProgressBarListener {
    fn default() -> Self {
        Self::new(ProgressBarOpts::default())
    }
}

impl DownloadListener for ProgressBarListener {
    fn on_loading(&self, progress: u8) {
        self.bar.set_position(u64::from(progress));
    }

    fn on_success(&self, _summary: &Summary) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }

    fn on_error(&self, error: &Error) {
        self.bar.abandon_with_message(format!("failed: {}", error));
    }
}
