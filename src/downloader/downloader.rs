//! Core downloader implementation with fetch logic.
//!
//! A [`Downloader`] drives one download at a time per call:
//!
//! 1. The request is issued through the [`Transport`]. A connection timeout
//!    before any response is retried while the budget allows; any other
//!    failure ends the download.
//! 2. The body is wrapped in a [`ProgressStream`] reporting percentages to
//!    the listener and handed to [`write_stream`].
//! 3. The listener receives exactly one terminal notification.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ferry::download::{Callbacks, DownloadRequest};
//! use ferry::{create_http_client, DownloaderBuilder, HttpClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let downloader = DownloaderBuilder::new().build(client);
//!
//! let request = DownloadRequest::parse("https://example.com/file.zip", "file.zip")?;
//! let handle = downloader.spawn(
//!     request,
//!     Callbacks::new()
//!         .on_loading(|pct| println!("{pct}%"))
//!         .on_error(|e| eprintln!("{e}")),
//! );
//!
//! // The download runs in the background; wait for it when needed.
//! let outcome = handle.await?;
//! println!("success: {}", outcome.is_success());
//! # Ok(())
//! # }
//! ```

use super::attempt::{retry_delay, DownloadAttempt};
use super::config::DownloaderConfig;
use crate::download::{write_stream, DownloadListener, DownloadRequest, Outcome, Summary};
use crate::error::Result;
use crate::http::{Client, Transport, TransportResponse};
use crate::progress::ProgressStream;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::{fs, task::JoinHandle};
use tracing::{debug, warn};

/// Represents the download controller.
///
/// A downloader is created via its builder and owns a shared handle on its
/// transport. Cloning it is cheap; clones share the transport, and
/// concurrent downloads to different destinations proceed independently.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use ferry::downloader::DownloaderBuilder;
/// use ferry::http::{create_http_client, HttpClientConfig};
///
/// let d = DownloaderBuilder::new().build(create_http_client(HttpClientConfig::default())?);
/// # Ok(())
/// # }
/// ```
pub struct Downloader<T = Client> {
    transport: Arc<T>,
    config: DownloaderConfig,
}

impl<T> Clone for Downloader<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
        }
    }
}

impl<T> fmt::Debug for Downloader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Downloader<T> {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(transport: Arc<T>, config: DownloaderConfig) -> Self {
        Self { transport, config }
    }

    /// Gets the transport requests are issued with.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Gets the number of retries after a connection timeout.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the base delay between retries.
    pub fn retry_backoff(&self) -> Duration {
        self.config.retry_backoff
    }

    /// Gets whether partial files are deleted on failure.
    pub fn remove_partial(&self) -> bool {
        self.config.remove_partial
    }

    /// Downloads `request`, reporting to `listener`.
    ///
    /// The listener gets zero or more progress calls and then exactly one of
    /// `on_success` or `on_error`, before this future resolves to the same
    /// outcome.
    pub async fn download<L>(&self, request: &DownloadRequest, listener: &L) -> Outcome
    where
        L: DownloadListener + ?Sized,
    {
        let result = self.fetch(request, listener).await;

        match &result {
            Ok(summary) => {
                debug!(
                    "Downloaded {} ({} bytes, {} requests)",
                    request.url,
                    summary.size(),
                    summary.attempts()
                );
                listener.on_success(summary);
            }
            Err(e) => {
                warn!("Download of {} failed: {}", request.url, e);
                listener.on_error(e);
            }
        }

        result.into()
    }

    /// Downloads `url` to `destination`, reporting to `listener`.
    ///
    /// A URL that cannot be parsed is reported through `on_error` like any
    /// other failure.
    pub async fn download_url<L>(
        &self,
        url: &str,
        destination: impl Into<PathBuf>,
        listener: &L,
    ) -> Outcome
    where
        L: DownloadListener + ?Sized,
    {
        match DownloadRequest::parse(url, destination) {
            Ok(request) => self.download(&request, listener).await,
            Err(e) => {
                warn!("Cannot download {}: {}", url, e);
                listener.on_error(&e);
                Outcome::Error(e)
            }
        }
    }

    /// Starts downloading `request` on the tokio runtime and returns at once.
    ///
    /// Every notification is delivered on the spawned task.
    pub fn spawn<L>(&self, request: DownloadRequest, listener: L) -> JoinHandle<Outcome>
    where
        T: 'static,
        L: DownloadListener + 'static,
    {
        let downloader = self.clone();
        tokio::spawn(async move { downloader.download(&request, &listener).await })
    }

    /// Starts downloading `url` to `destination` on the tokio runtime and
    /// returns at once.
    ///
    /// An unparsable URL is reported through `on_error` on the spawned task.
    pub fn spawn_url<L>(
        &self,
        url: &str,
        destination: impl Into<PathBuf>,
        listener: L,
    ) -> JoinHandle<Outcome>
    where
        T: 'static,
        L: DownloadListener + 'static,
    {
        let downloader = self.clone();
        let url = url.to_string();
        let destination = destination.into();
        tokio::spawn(async move {
            downloader
                .download_url(&url, destination, &listener)
                .await
        })
    }

    /// Fetches the file and writes it to disk.
    async fn fetch<L>(&self, request: &DownloadRequest, listener: &L) -> Result<Summary>
    where
        L: DownloadListener + ?Sized,
    {
        let (response, attempt) = self.issue(request).await?;

        let status = response.status;
        let content_length = response.content_length.or(request.expected_length);
        debug!(
            "Response {} for {}, content length {:?}",
            status, request.url, content_length
        );

        let body = ProgressStream::new(response.body, content_length, |pct| {
            listener.on_loading(pct)
        });

        match write_stream(body, &request.destination).await {
            Ok(size) => Ok(Summary::new(request.clone(), status, size, attempt.number())),
            Err(e) => {
                if self.config.remove_partial {
                    discard_partial(&request.destination).await;
                }
                Err(e)
            }
        }
    }

    /// Issues the request until a response arrives, retrying timeouts.
    async fn issue(&self, request: &DownloadRequest) -> Result<(TransportResponse, DownloadAttempt)> {
        let mut attempt = DownloadAttempt::first(self.config.retries);

        loop {
            debug!("Fetching {} (request {})", request.url, attempt.number());
            let err = match self.transport.issue(&request.url).await {
                Ok(response) => return Ok((response, attempt)),
                Err(e) => e,
            };

            if !err.is_timeout() {
                return Err(err);
            }

            attempt = match attempt.next() {
                Some(next) => next,
                None => {
                    warn!(
                        "Giving up on {} after {} timed out requests",
                        request.url,
                        attempt.number()
                    );
                    return Err(err);
                }
            };

            warn!(
                "Request for {} timed out, retrying ({}/{})",
                request.url,
                attempt.retries_used(),
                attempt.max_retries()
            );
            self.backoff(&attempt).await;
        }
    }

    async fn backoff(&self, attempt: &DownloadAttempt) {
        let base = self.config.retry_backoff;
        if base.is_zero() {
            return;
        }
        let delay = retry_delay(attempt.retries_used() - 1, base);
        debug!("Waiting {:?} before retrying", delay);
        tokio::time::sleep(delay).await;
    }
}

async fn discard_partial(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => debug!("Removed partial file {:?}", path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (),
        Err(e) => warn!("Cannot remove partial file {:?}: {}", path, e),
    }
}
