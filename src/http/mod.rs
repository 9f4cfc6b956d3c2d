//! HTTP module containing client functionality.
//!
//! This module provides HTTP client setup and configuration, the request
//! helpers built on it, and the [`Transport`] seam the downloader talks to.
//!
//! # Overview
//!
//! - [`client`] - client creation, timeouts and async request helpers
//! - [`transport`] - the [`Transport`] trait and its reqwest implementation
//! - [`blocking`] - synchronous request helpers
//!
//! # Examples
//!
//! ```rust
//! use ferry::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     connect_timeout: Duration::from_secs(5),
//!     headers: Some(headers),
//!     ..HttpClientConfig::default()
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod client;
pub mod transport;

pub use client::{create_http_client, Client, HttpClientConfig, FILE_LIST_KEY};
pub use transport::{Transport, TransportResponse};
