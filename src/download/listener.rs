//! Download listeners.
//!
//! A [`DownloadListener`] observes one download: zero or more
//! [`on_loading`](DownloadListener::on_loading) calls followed by exactly one
//! of [`on_success`](DownloadListener::on_success) or
//! [`on_error`](DownloadListener::on_error).
//!
//! ```rust
//! use ferry::download::Callbacks;
//!
//! let listener = Callbacks::new()
//!     .on_loading(|pct| println!("{pct}%"))
//!     .on_success(|summary| println!("done: {} bytes", summary.size()))
//!     .on_error(|e| eprintln!("failed: {e}"));
//! ```

use super::summary::Summary;
use crate::error::Error;

use std::fmt;
use std::sync::Arc;

/// Receives the notifications of a download.
///
/// Callbacks run on the task driving the download, in order, and must not
/// block for long.
pub trait DownloadListener: Send + Sync {
    /// Called after each non-empty chunk when the length is known. Values are
    /// in `[0, 100]` and never decrease.
    fn on_loading(&self, _progress: u8) {}

    /// Called once when the file was fully written.
    fn on_success(&self, summary: &Summary);

    /// Called once when the download failed.
    fn on_error(&self, error: &Error);
}

impl<L: DownloadListener + ?Sized> DownloadListener for Arc<L> {
    fn on_loading(&self, progress: u8) {
        (**self).on_loading(progress)
    }

    fn on_success(&self, summary: &Summary) {
        (**self).on_success(summary)
    }

    fn on_error(&self, error: &Error) {
        (**self).on_error(error)
    }
}

type LoadingCallback = Box<dyn Fn(u8) + Send + Sync>;
type SuccessCallback = Box<dyn Fn(&Summary) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&Error) + Send + Sync>;

/// A listener assembled from closures. Missing callbacks do nothing.
#[derive(Default)]
pub struct Callbacks {
    loading: Option<LoadingCallback>,
    success: Option<SuccessCallback>,
    error: Option<ErrorCallback>,
}

impl Callbacks {
    /// Create a listener that ignores every notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the progress callback.
    pub fn on_loading<F>(mut self, callback: F) -> Self
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.loading = Some(Box::new(callback));
        self
    }

    /// Set the success callback.
    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.success = Some(Box::new(callback));
        self
    }

    /// Set the error callback.
    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.error = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_loading", &self.loading.is_some())
            .field("on_success", &self.success.is_some())
            .field("on_error", &self.error.is_some())
            .finish()
    }
}

impl DownloadListener for Callbacks {
    fn on_loading(&self, progress: u8) {
        if let Some(ref callback) = self.loading {
            callback(progress);
        }
    }

    fn on_success(&self, summary: &Summary) {
        if let Some(ref callback) = self.success {
            callback(summary);
        }
    }

    fn on_error(&self, error: &Error) {
        if let Some(ref callback) = self.error {
            callback(error);
        }
    }
}
