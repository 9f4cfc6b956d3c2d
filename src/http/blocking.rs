//! Synchronous request helpers.
//!
//! [`Client`] drives the async [`super::Client`] on a current-thread tokio
//! runtime it owns, so it can be used from code that is not running inside
//! an async context.
//!
//! Calling these methods from within a tokio runtime panics, like any nested
//! `block_on`.
//!
//! ```rust,no_run
//! use ferry::http::{blocking, HttpClientConfig};
//!
//! # fn example() -> Result<(), ferry::Error> {
//! let client = blocking::Client::new(HttpClientConfig::default())?;
//! let body = client.get("https://httpbin.org/get")?;
//! # Ok(())
//! # }
//! ```

use super::client::{create_http_client, HttpClientConfig};
use crate::error::{Error, Result};

use serde::Serialize;
use std::path::Path;
use tokio::runtime::{Builder, Runtime};

/// Blocking counterpart of [`super::Client`].
#[derive(Debug)]
pub struct Client {
    inner: super::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a blocking client from the configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let inner = create_http_client(config)?;
        Self::from_async(inner)
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: super::Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Internal(format!("cannot start runtime: {}", e)))?;
        Ok(Self { inner, runtime })
    }

    /// Send a GET request.
    pub fn get(&self, url: &str) -> Result<String> {
        self.runtime.block_on(self.inner.get(url))
    }

    /// Send a GET request with the given query parameters.
    pub fn get_query<P>(&self, url: &str, params: &P) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        self.runtime.block_on(self.inner.get_query(url, params))
    }

    /// Send a url-encoded form POST request.
    pub fn post_form<P>(&self, url: &str, params: &P) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        self.runtime.block_on(self.inner.post_form(url, params))
    }

    /// Send a POST request with a JSON body.
    pub fn post_json<B>(&self, url: &str, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        self.runtime.block_on(self.inner.post_json(url, body))
    }

    /// Upload files in a multipart form along with text fields.
    pub fn post_files<I, K, V, F>(&self, url: &str, params: I, files: &[F]) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        F: AsRef<Path>,
    {
        self.runtime
            .block_on(self.inner.post_files(url, params, files))
    }
}
