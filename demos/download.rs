//! Example downloading a file with a progress bar
//!
//! ```text
//! cargo run --example download -- https://httpbin.org/bytes/256000 downloads/bytes.bin
//! ```

use color_eyre::{eyre::eyre, Result};
use ferry::{
    create_http_client, DownloadRequest, DownloaderBuilder, HttpClientConfig, ProgressBarListener,
    ProgressBarOpts,
};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "https://httpbin.org/bytes/256000".to_string());
    let url = reqwest::Url::parse(&url)?;

    // Store under the URL file name unless a destination is given.
    let request = match args.next() {
        Some(destination) => DownloadRequest::new(&url, destination),
        None => DownloadRequest::into_directory(&url, Path::new("downloads"))?,
    };

    let client = create_http_client(HttpClientConfig {
        connect_timeout: Duration::from_secs(5),
        ..HttpClientConfig::default()
    })?;
    let downloader = DownloaderBuilder::new()
        .retry_backoff(Duration::from_millis(500))
        .build(client);

    let name = request.filename().unwrap_or_default();
    let listener = ProgressBarListener::new(ProgressBarOpts::with_message_style()).with_message(name);

    let summary = downloader
        .download(&request, &listener)
        .await
        .into_result()
        .map_err(|e| eyre!("download of {} failed: {}", request.url, e))?;

    println!(
        "\nDownloaded {} bytes to {} in {} request(s).",
        summary.size(),
        summary.request().destination.display(),
        summary.attempts()
    );

    Ok(())
}
