//! Download requests.
//!
//! A [`DownloadRequest`] names what to fetch and where to store it. It is
//! built once per download and never mutated by the downloader.
//!
//! # Examples
//!
//! ```rust
//! use ferry::download::DownloadRequest;
//! use std::path::Path;
//!
//! // Explicit destination.
//! let request = DownloadRequest::parse("https://example.com/file.zip", "/tmp/file.zip")?;
//! assert_eq!(request.destination, Path::new("/tmp/file.zip"));
//!
//! // File name taken from the URL.
//! let url = reqwest::Url::parse("https://example.com/archive%20v2.zip")?;
//! let request = DownloadRequest::into_directory(&url, Path::new("downloads"))?;
//! assert_eq!(request.destination, Path::new("downloads/archive v2.zip"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{Error, Result};

use reqwest::Url;
use std::path::{Path, PathBuf};

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// URL of the file to download.
    pub url: Url,
    /// Path the file is written to. Any file already there is replaced.
    pub destination: PathBuf,
    /// Length to report progress against when the server does not declare one.
    pub expected_length: Option<u64>,
}

impl DownloadRequest {
    /// Creates a new [`DownloadRequest`].
    pub fn new(url: &Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.clone(),
            destination: destination.into(),
            expected_length: None,
        }
    }

    /// Creates a new [`DownloadRequest`] from a URL string.
    pub fn parse(url: &str, destination: impl Into<PathBuf>) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;
        Ok(Self::new(&url, destination))
    }

    /// Creates a request storing the file in `directory` under the name found
    /// in the last segment of the URL path.
    pub fn into_directory(url: &Url, directory: &Path) -> Result<Self> {
        let filename = filename_from_url(url)?;
        Ok(Self::new(url, directory.join(filename)))
    }

    /// Set the length used for progress when the response does not declare one.
    pub fn with_expected_length(self, expected_length: u64) -> Self {
        Self {
            expected_length: Some(expected_length),
            ..self
        }
    }

    /// File name of the destination, if any.
    pub fn filename(&self) -> Option<String> {
        self.destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Extract and decode the last path segment of `url`.
pub fn filename_from_url(url: &Url) -> Result<String> {
    url.path_segments()
        .ok_or_else(|| {
            Error::InvalidUrl(format!("The url \"{}\" does not contain a valid path", url))
        })?
        .next_back()
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            form_urlencoded::parse(segment.as_bytes())
                .map(|(key, val)| [key, val].concat())
                .collect()
        })
        .ok_or_else(|| Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", url)))
}
