//! Downloader module containing the download orchestration, its builder and
//! configuration.
//!
//! # Overview
//!
//! - `downloader` - the [`Downloader`] running the request/stream/write pipeline
//! - `builder` - [`DownloaderBuilder`] for configuring it
//! - `config` - [`DownloaderConfig`] and its defaults
//! - `attempt` - [`DownloadAttempt`] retry bookkeeping
//!
//! # Examples
//!
//! ```rust,no_run
//! use ferry::download::{Callbacks, DownloadRequest};
//! use ferry::downloader::DownloaderBuilder;
//! use ferry::http::{create_http_client, HttpClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let downloader = DownloaderBuilder::new().retries(2).build(client);
//!
//! let request = DownloadRequest::parse("https://example.com/file.zip", "file.zip")?;
//! let outcome = downloader.download(&request, &Callbacks::new()).await;
//! # Ok(())
//! # }
//! ```

pub mod attempt;
pub mod builder;
pub mod config;
pub mod downloader;

pub use attempt::{retry_delay, DownloadAttempt};
pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, DEFAULT_MAX_RETRIES};
pub use downloader::Downloader;
