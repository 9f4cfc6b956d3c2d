//! Error handling for the ferry library.
//!
//! Every fallible operation in the crate returns [`Error`]. Download failures
//! are additionally classified with [`FailureKind`], which is what the
//! download orchestrator consults when deciding whether a failed request may
//! be issued again.

use std::io;
use thiserror::Error;

/// Errors that can happen when using ferry.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other categories,
    /// such as a middleware failure or a runtime that could not be started.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The connection timed out before a response was received.
    ///
    /// Transports that do not surface a [`reqwest::Error`] report connection
    /// timeouts with this variant so that they are retried like reqwest ones.
    #[error("Connection timed out: {0}")]
    Timeout(String),

    /// I/O Error.
    ///
    /// Raised by file operations: creating the destination, writing chunks to
    /// it, or reading files for an upload.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// This variant wraps HTTP client errors from the reqwest library, including
    /// network failures, HTTP status errors, and request/response processing errors.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// The response body failed after the response was received.
    ///
    /// Never retried, even when the underlying error is a read timeout.
    #[error("Response body error")]
    Body { source: reqwest::Error },

    /// A request body could not be serialized to JSON.
    #[error("JSON error")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Broad classes of download failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection-level timeout before any response. Retryable.
    Timeout,
    /// DNS, refused connection, TLS, HTTP status or body read failure.
    Transport,
    /// The destination could not be created or written.
    Storage,
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Timeout(_) => FailureKind::Timeout,
            Error::Reqwest { source } if source.is_timeout() => FailureKind::Timeout,
            Error::IOError { .. } => FailureKind::Storage,
            _ => FailureKind::Transport,
        }
    }

    /// Return `true` if the error is a timeout.
    pub fn is_timeout(&self) -> bool {
        self.kind() == FailureKind::Timeout
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(source) => Error::Reqwest { source },
            reqwest_middleware::Error::Middleware(e) => Error::Internal(e.to_string()),
        }
    }
}

/// Result type alias for operations that can fail with a ferry error.
pub type Result<T> = std::result::Result<T, Error>;
