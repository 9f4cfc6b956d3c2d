//! HTTP client setup and request helpers.
//!
//! This module builds the shared [`Client`] used by every request helper and
//! by the downloader. The client wraps `reqwest` with tracing middleware and
//! carries the connect/read timeouts configured in [`HttpClientConfig`].
//!
//! # Examples
//!
//! ## Basic Client Creation
//!
//! ```rust
//! use ferry::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Issuing Requests
//!
//! ```rust,no_run
//! use ferry::http::{create_http_client, HttpClientConfig};
//! use std::collections::HashMap;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//!
//! let page = client.get("https://httpbin.org/get").await?;
//!
//! let mut params = HashMap::new();
//! params.insert("name", "ferry");
//! let echoed = client.post_form("https://httpbin.org/post", &params).await?;
//!
//! let uploaded = client
//!     .post_files("https://httpbin.org/post", [("kind", "logs")], &["app.log"])
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};

use reqwest::{
    header::{HeaderMap, CONTENT_TYPE},
    multipart::{Form, Part},
    Proxy, Response,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Name of the multipart field carrying uploaded files.
pub const FILE_LIST_KEY: &str = "fileList";

/// Content type used for JSON request bodies.
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Maximum time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// Maximum time allowed between two reads from the socket.
    pub read_timeout: Duration,
    /// Optional deadline for a whole request, body included.
    pub timeout: Option<Duration>,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

impl HttpClientConfig {
    /// Default connect and read timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Self::DEFAULT_TIMEOUT,
            read_timeout: Self::DEFAULT_TIMEOUT,
            timeout: None,
            proxy: None,
            headers: None,
        }
    }
}

/// Creates an HTTP client from the configuration.
///
/// This function sets up a reqwest client with:
/// - Tracing middleware for request/response logging
/// - Connect and read timeouts
/// - Optional overall request timeout
/// - Optional proxy support
/// - Optional default headers
///
/// The client is meant to be created once and shared: cloning it is cheap and
/// every clone uses the same connection pool.
pub fn create_http_client(config: HttpClientConfig) -> std::result::Result<Client, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .read_timeout(config.read_timeout);

    if let Some(timeout) = config.timeout {
        inner_client_builder = inner_client_builder.timeout(timeout);
    }

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(Client { inner: client })
}

/// Shared HTTP client with request helpers.
///
/// Every helper resolves to the response body as text once the server
/// answered with a success status; other statuses are reported as
/// [`Error::Reqwest`]. A body that fails once the response started is
/// reported as [`Error::Body`].
#[derive(Clone)]
pub struct Client {
    inner: ClientWithMiddleware,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Get a reference to the underlying middleware client.
    pub fn inner(&self) -> &ClientWithMiddleware {
        &self.inner
    }

    /// Send a GET request.
    pub async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let res = self.inner.get(url).send().await?;
        body_text(res).await
    }

    /// Send a GET request with the given query parameters.
    pub async fn get_query<P>(&self, url: &str, params: &P) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        debug!("GET {} (with query)", url);
        let res = self.inner.get(url).query(params).send().await?;
        body_text(res).await
    }

    /// Send a GET request and deserialize the JSON response.
    pub async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = self.get(url).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a url-encoded form POST request.
    pub async fn post_form<P>(&self, url: &str, params: &P) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        debug!("POST {} (form)", url);
        let res = self.inner.post(url).form(params).send().await?;
        body_text(res).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json<B>(&self, url: &str, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        debug!("POST {} (json, {} bytes)", url, payload.len());
        let res = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;
        body_text(res).await
    }

    /// Upload files in a multipart form along with text fields.
    ///
    /// Each file is sent under the [`FILE_LIST_KEY`] field with its file name
    /// and a MIME type guessed from its extension.
    pub async fn post_files<I, K, V, F>(&self, url: &str, params: I, files: &[F]) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        F: AsRef<Path>,
    {
        let mut form = Form::new();
        for (key, value) in params {
            form = form.text(key.into(), value.into());
        }
        for file in files {
            form = form.part(FILE_LIST_KEY, file_part(file.as_ref()).await?);
        }

        debug!("POST {} (multipart, {} files)", url, files.len());
        let res = self.inner.post(url).multipart(form).send().await?;
        body_text(res).await
    }
}

/// Read a file into a multipart part.
async fn file_part(path: &Path) -> Result<Part> {
    let contents = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(Part::bytes(contents)
        .file_name(filename)
        .mime_str(mime.as_ref())?)
}

async fn body_text(res: Response) -> Result<String> {
    res.error_for_status()?
        .text()
        .await
        .map_err(|source| Error::Body { source })
}
