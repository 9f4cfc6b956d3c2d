mod common;

use bytes::Bytes;
use common::helpers::*;
use ferry::download::{request::filename_from_url, write_stream};
use ferry::{
    Callbacks, DownloadListener, DownloadRequest, Error, FailureKind, Outcome, ProgressStream,
    Summary,
};
use futures::stream;
use reqwest::{StatusCode, Url};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// === DownloadRequest Tests ===

#[test]
fn test_request_new() {
    let url = Url::parse(TEST_URL).unwrap();
    let request = DownloadRequest::new(&url, "out/file.zip");

    assert_eq!(request.url, url);
    assert_eq!(request.destination, PathBuf::from("out/file.zip"));
    assert_eq!(request.expected_length, None);
    assert_eq!(request.filename().as_deref(), Some("file.zip"));
}

#[test]
fn test_request_parse_invalid_url() {
    let result = DownloadRequest::parse("domain.com/file.zip", "file.zip");

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_request_into_directory() {
    let url = Url::parse("https://example.com/releases/v1/tool%20linux.tar.gz").unwrap();
    let request = DownloadRequest::into_directory(&url, Path::new("downloads")).unwrap();

    assert_eq!(
        request.destination,
        Path::new("downloads").join("tool linux.tar.gz")
    );
}

#[test]
fn test_request_into_directory_without_filename() {
    let url = Url::parse("https://example.com/").unwrap();

    let result = DownloadRequest::into_directory(&url, Path::new("downloads"));

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_filename_from_url() {
    let url = Url::parse("https://example.com/path/file.zip?token=abc#top").unwrap();

    assert_eq!(filename_from_url(&url).unwrap(), "file.zip");
}

#[test]
fn test_request_with_expected_length() {
    let request = DownloadRequest::parse(TEST_URL, "file.zip")
        .unwrap()
        .with_expected_length(2048);

    assert_eq!(request.expected_length, Some(2048));
}

// === Outcome Tests ===

#[test]
fn test_outcome_success() {
    let request = DownloadRequest::parse(TEST_URL, "file.zip").unwrap();
    let outcome = Outcome::Success(Summary::new(request.clone(), StatusCode::OK, 42, 2));

    assert!(outcome.is_success());
    assert!(outcome.error().is_none());
    let summary = outcome.into_result().unwrap();
    assert_eq!(summary.request(), &request);
    assert_eq!(summary.size(), 42);
    assert_eq!(summary.attempts(), 2);
}

#[test]
fn test_outcome_error() {
    let outcome: Outcome = Err::<Summary, _>(Error::Timeout(TEST_URL.into())).into();

    assert!(!outcome.is_success());
    assert!(outcome.summary().is_none());
    assert_eq!(outcome.error().map(|e| e.kind()), Some(FailureKind::Timeout));
}

// === Callbacks Tests ===

#[test]
fn test_callbacks_forward_notifications() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let callbacks = {
        let (a, b, c) = (seen.clone(), seen.clone(), seen.clone());
        Callbacks::new()
            .on_loading(move |pct| a.lock().unwrap().push(format!("loading {}", pct)))
            .on_success(move |s| b.lock().unwrap().push(format!("success {}", s.size())))
            .on_error(move |e| c.lock().unwrap().push(format!("error {:?}", e.kind())))
    };
    let request = DownloadRequest::parse(TEST_URL, "file.zip").unwrap();

    DownloadListener::on_loading(&callbacks, 10);
    DownloadListener::on_success(&callbacks, &Summary::new(request, StatusCode::OK, 5, 1));
    DownloadListener::on_error(&callbacks, &Error::Internal("boom".into()));

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["loading 10", "success 5", "error Transport"]
    );
}

#[test]
fn test_callbacks_default_does_nothing() {
    let callbacks = Callbacks::default();
    let request = DownloadRequest::parse(TEST_URL, "file.zip").unwrap();

    DownloadListener::on_loading(&callbacks, 50);
    DownloadListener::on_success(&callbacks, &Summary::new(request, StatusCode::OK, 0, 1));
    DownloadListener::on_error(&callbacks, &Error::Internal("ignored".into()));

    assert!(format!("{:?}", callbacks).contains("Callbacks"));
}

#[test]
fn test_shared_listener() {
    let recorder = Arc::new(Recorder::new());
    let shared: Arc<Recorder> = recorder.clone();

    shared.on_loading(20);
    shared.on_error(&Error::Internal("boom".into()));

    assert_eq!(
        recorder.events(),
        vec![Event::Loading(20), Event::Error(FailureKind::Transport)]
    );
}

// === Sink Tests ===

fn chunks(content: &[u8], size: usize) -> Vec<ferry::Result<Bytes>> {
    content
        .chunks(size)
        .map(|c| Ok(Bytes::copy_from_slice(c)))
        .collect()
}

#[tokio::test]
async fn test_write_stream_with_progress() {
    let temp_dir = create_temp_dir();
    let destination = temp_dir.path().join("nested/dir/file.bin");
    let content = create_test_content(400);
    let mut seen = Vec::new();

    let written = {
        let body = ProgressStream::new(stream::iter(chunks(&content, 100)), Some(400), |pct| {
            seen.push(pct)
        });
        write_stream(body, &destination).await.unwrap()
    };

    assert_eq!(written, 400);
    assert_eq!(seen, vec![25, 50, 75, 100]);
    assert_eq!(std::fs::read(&destination).unwrap(), content);
}

#[tokio::test]
async fn test_write_stream_unwritable_destination() {
    let temp_dir = create_temp_dir();
    let destination = unwritable_path(temp_dir.path());

    let result = write_stream(stream::iter(chunks(b"data", 2)), &destination).await;

    assert_eq!(result.map_err(|e| e.kind()), Err(FailureKind::Storage));
}

#[tokio::test]
async fn test_write_stream_body_error() {
    let temp_dir = create_temp_dir();
    let destination = temp_dir.path().join("partial.bin");
    let mut body = chunks(&[9u8; 64], 32);
    body.push(Err(Error::Internal("reset".into())));

    let result = write_stream(stream::iter(body), &destination).await;

    assert!(matches!(result, Err(Error::Internal(_))));
    assert_file_size(&destination, 64);
}
