//! Download module containing download-related types.
//!
//! # Overview
//!
//! - [`request`] - the [`DownloadRequest`] describing one download
//! - [`summary`] - the [`Outcome`] of a download and its [`Summary`]
//! - [`listener`] - the [`DownloadListener`] trait and closure-based [`Callbacks`]
//! - [`sink`] - writing a body stream to its destination
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
//! let listener = Callbacks::new().on_loading(|pct| println!("{pct}%"));
//! let summary = downloader.download(&request, &listener).await.into_result()?;
//! println!("{} bytes", summary.size());
//! # Ok(())
//! # }
//! ```

pub mod listener;
pub mod request;
pub mod sink;
pub mod summary;

pub use listener::{Callbacks, DownloadListener};
pub use request::DownloadRequest;
pub use sink::write_stream;
pub use summary::{Outcome, Summary};
