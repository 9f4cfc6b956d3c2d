//! Transport abstraction used by the downloader.
//!
//! The downloader only needs one capability from the network: issue a GET
//! request and hand back the status, the declared length and a body stream.
//! [`Transport`] captures that capability so the download pipeline can run
//! against [`Client`] in production and against scripted transports in tests.

use super::client::Client;
use crate::error::{Error, Result};

use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use reqwest::{StatusCode, Url};
use std::fmt;
use std::future::Future;
use tracing::debug;

/// A response whose headers have been received.
pub struct TransportResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Length declared by the server, if any.
    pub content_length: Option<u64>,
    /// The response body.
    pub body: BoxStream<'static, Result<Bytes>>,
}

impl TransportResponse {
    /// Create a new [`TransportResponse`].
    pub fn new(
        status: StatusCode,
        content_length: Option<u64>,
        body: BoxStream<'static, Result<Bytes>>,
    ) -> Self {
        Self {
            status,
            content_length,
            body,
        }
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Issues download requests.
///
/// Implementations must fail before returning when no response headers were
/// received, and should report connection timeouts so that
/// [`Error::is_timeout`] holds for them.
pub trait Transport: Send + Sync {
    /// Issue a GET request for `url`.
    fn issue(&self, url: &Url) -> impl Future<Output = Result<TransportResponse>> + Send;
}

impl Transport for Client {
    async fn issue(&self, url: &Url) -> Result<TransportResponse> {
        debug!("Issuing request for {}", url);
        let res = self.inner().get(url.clone()).send().await?;
        let res = res.error_for_status()?;

        let status = res.status();
        let content_length = res.content_length();
        let body = res
            .bytes_stream()
            .map(|item| item.map_err(|source| Error::Body { source }))
            .boxed();

        Ok(TransportResponse::new(status, content_length, body))
    }
}
