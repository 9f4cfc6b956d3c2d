//! Download results.
//!
//! A finished download yields an [`Outcome`]: either a [`Summary`] of the
//! successful transfer or the error that ended it.
//!
//! ```rust
//! use ferry::download::{DownloadRequest, Outcome, Summary};
//! use reqwest::StatusCode;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = DownloadRequest::parse("https://example.com/file.zip", "file.zip")?;
//! let outcome = Outcome::Success(Summary::new(request, StatusCode::OK, 2048, 1));
//!
//! match &outcome {
//!     Outcome::Success(summary) => println!("wrote {} bytes", summary.size()),
//!     Outcome::Error(e) => println!("failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use super::request::DownloadRequest;
use crate::error::{Error, Result};

use reqwest::StatusCode;

/// Represents a successful download.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    request: DownloadRequest,
    /// HTTP status code.
    statuscode: StatusCode,
    /// Bytes written to the destination.
    size: u64,
    /// Requests issued, retries included.
    attempts: u32,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(request: DownloadRequest, statuscode: StatusCode, size: u64, attempts: u32) -> Self {
        Self {
            request,
            statuscode,
            size,
            attempts,
        }
    }

    /// Get a reference to the summary's request.
    pub fn request(&self) -> &DownloadRequest {
        &self.request
    }

    /// Get the summary's status.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the number of requests issued.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Terminal result of a download.
#[derive(Debug)]
pub enum Outcome {
    /// The file was fully written.
    Success(Summary),
    /// The download failed with the original cause.
    Error(Error),
}

impl Outcome {
    /// Return `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The summary of a successful download.
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Outcome::Success(summary) => Some(summary),
            Outcome::Error(_) => None,
        }
    }

    /// The cause of a failed download.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(e) => Some(e),
        }
    }

    /// Convert into a [`Result`].
    pub fn into_result(self) -> Result<Summary> {
        self.into()
    }
}

impl From<Result<Summary>> for Outcome {
    fn from(result: Result<Summary>) -> Self {
        match result {
            Ok(summary) => Outcome::Success(summary),
            Err(e) => Outcome::Error(e),
        }
    }
}

impl From<Outcome> for Result<Summary> {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success(summary) => Ok(summary),
            Outcome::Error(e) => Err(e),
        }
    }
}
