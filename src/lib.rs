//! Ferry is a crate providing simple HTTP requests and progress-reporting
//! file downloads that retry connection timeouts.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ferry::{create_http_client, Callbacks, DownloadRequest, DownloaderBuilder, Error, HttpClientConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let downloader = DownloaderBuilder::new().build(client);
//!
//! let request = DownloadRequest::parse(
//!     "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip",
//!     "output/reqwest.zip",
//! )?;
//! let listener = Callbacks::new().on_loading(|pct| println!("{pct}%"));
//! downloader.download(&request, &listener).await.into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - Download requests, outcomes, listeners and the file sink
//! - [`downloader`] - The `Downloader` orchestrating requests, retries and writes
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client, request helpers and the transport seam
//! - [`progress`] - Progress tracking stream and progress bar display

pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;

pub use download::{Callbacks, DownloadListener, DownloadRequest, Outcome, Summary};
pub use downloader::{Downloader, DownloaderBuilder, DEFAULT_MAX_RETRIES};
pub use error::{Error, FailureKind, Result};
pub use http::{create_http_client, Client, HttpClientConfig, Transport, TransportResponse};
pub use progress::{ProgressBarListener, ProgressBarOpts, ProgressStream};
