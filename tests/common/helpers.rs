use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use bytes::Bytes;
use ferry::{
    DownloadListener, DownloadRequest, Error, FailureKind, Result, Summary, Transport,
    TransportResponse,
};
use futures::{stream, StreamExt};
use rand::Rng;
use reqwest::{StatusCode, Url};
use tempfile::TempDir;

// Common test constants
pub const TEST_URL: &str = "http://domain.com/file.zip";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates random test content of specified size
pub fn create_random_content(size: usize) -> Vec<u8> {
    let mut content = vec![0u8; size];
    rand::rng().fill(&mut content[..]);
    content
}

/// Creates a request writing `filename` inside `dir`
pub fn create_test_request(dir: &Path, filename: &str) -> DownloadRequest {
    DownloadRequest::parse(TEST_URL, dir.join(filename)).expect("Failed to create request")
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

/// Path of a file inside a regular file, which can never be created.
pub fn unwritable_path(dir: &Path) -> PathBuf {
    let blocker = dir.join("blocker");
    fs::write(&blocker, b"regular file").expect("Failed to write blocker file");
    blocker.join("out.bin")
}

// === Scripted transport ===

/// What the scripted transport does for one request.
pub enum Step {
    /// Fail with a connection timeout.
    Timeout,
    /// Fail with a non-timeout transport error.
    Refused,
    /// Answer with the given body items.
    Respond {
        content_length: Option<u64>,
        body: Vec<Result<Bytes>>,
    },
}

impl Step {
    /// A 200 response declaring its length and split into `chunk` sized parts.
    pub fn ok(content: &[u8], chunk: usize) -> Self {
        Step::Respond {
            content_length: Some(content.len() as u64),
            body: split(content, chunk),
        }
    }

    /// A 200 response without declared length.
    pub fn unknown_length(content: &[u8], chunk: usize) -> Self {
        Step::Respond {
            content_length: None,
            body: split(content, chunk),
        }
    }

    /// A response failing after `content` was sent.
    pub fn broken(content: &[u8], declared: u64) -> Self {
        let mut body = split(content, content.len().max(1));
        body.push(Err(Error::Internal("connection reset by peer".into())));
        Step::Respond {
            content_length: Some(declared),
            body,
        }
    }
}

fn split(content: &[u8], chunk: usize) -> Vec<Result<Bytes>> {
    content
        .chunks(chunk)
        .map(|c| Ok(Bytes::copy_from_slice(c)))
        .collect()
}

/// Transport replaying a fixed script and counting requests.
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicU32,
}

impl ScriptedTransport {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            calls: AtomicU32::new(0),
        }
    }

    /// `timeouts` timeouts followed by `then`.
    pub fn timeouts_then(timeouts: usize, then: Step) -> Self {
        let mut steps: Vec<Step> = (0..timeouts).map(|_| Step::Timeout).collect();
        steps.push(then);
        Self::new(steps)
    }

    /// Number of requests issued so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    async fn issue(&self, url: &Url) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or(Step::Refused);

        match step {
            Step::Timeout => Err(Error::Timeout(url.to_string())),
            Step::Refused => Err(Error::Internal(format!("connection refused: {}", url))),
            Step::Respond {
                content_length,
                body,
            } => Ok(TransportResponse::new(
                StatusCode::OK,
                content_length,
                stream::iter(body).boxed(),
            )),
        }
    }
}

// === Recording listener ===

/// A notification received by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Loading(u8),
    Success(u64),
    Error(FailureKind),
}

/// Listener keeping every notification in order.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("recorder lock poisoned").clone()
    }

    /// Every progress value received.
    pub fn progress(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Loading(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Terminal notifications received.
    pub fn terminals(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, Event::Loading(_)))
            .collect()
    }

    /// Asserts the listener contract: progress values in range and
    /// non-decreasing, then exactly one terminal notification, last.
    pub fn assert_well_formed(&self) {
        let events = self.events();
        let progress = self.progress();
        assert!(progress.iter().all(|&p| p <= 100), "{:?}", progress);
        assert!(progress.windows(2).all(|w| w[0] <= w[1]), "{:?}", progress);
        assert_eq!(self.terminals().len(), 1, "{:?}", events);
        assert!(
            !matches!(events.last(), Some(Event::Loading(_))),
            "terminal notification must be last: {:?}",
            events
        );
    }

    fn push(&self, event: Event) {
        self.events.lock().expect("recorder lock poisoned").push(event);
    }
}

impl DownloadListener for Recorder {
    fn on_loading(&self, progress: u8) {
        self.push(Event::Loading(progress));
    }

    fn on_success(&self, summary: &Summary) {
        self.push(Event::Success(summary.size()));
    }

    fn on_error(&self, error: &Error) {
        self.push(Event::Error(error.kind()));
    }
}
