//! Byte stream wrapper reporting download progress.
//!
//! [`ProgressStream`] forwards every item of a response body stream untouched
//! while keeping a running count of the bytes that went through it. Each
//! non-empty chunk triggers the progress callback with the integer percentage
//! of the declared content length received so far.
//!
//! When the content length is unknown or zero no percentage can be computed
//! and the callback is never invoked.
//!
//! ```rust
//! use bytes::Bytes;
//! use ferry::progress::ProgressStream;
//! use futures::{stream, StreamExt};
//!
//! # futures::executor::block_on(async {
//! let chunks = vec![Ok(Bytes::from_static(b"ab")), Ok(Bytes::from_static(b"cd"))];
//! let mut seen = Vec::new();
//! let mut tracked = ProgressStream::new(stream::iter(chunks), Some(4), |p| seen.push(p));
//! while let Some(_chunk) = tracked.next().await {}
//! drop(tracked);
//! assert_eq!(seen, vec![50, 100]);
//! # });
//! ```

use crate::error::Result;

use bytes::Bytes;
use futures::{ready, Stream};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Compute the percentage of `total` covered by `read`.
///
/// Returns `None` when the total is unknown or zero. The value is floored and
/// never exceeds 100, even when more bytes than declared were received.
pub fn percent(read: u64, total: Option<u64>) -> Option<u8> {
    match total {
        Some(total) if total > 0 => {
            let pct = (u128::from(read) * 100 / u128::from(total)).min(100);
            Some(pct as u8)
        }
        _ => None,
    }
}

/// A body stream that counts bytes and reports percentages.
pub struct ProgressStream<S, F> {
    inner: S,
    on_progress: F,
    bytes_read: u64,
    content_length: Option<u64>,
}

impl<S, F> ProgressStream<S, F>
where
    F: FnMut(u8),
{
    /// Wrap `inner`, reporting progress against `content_length`.
    pub fn new(inner: S, content_length: Option<u64>, on_progress: F) -> Self {
        Self {
            inner,
            on_progress,
            bytes_read: 0,
            content_length,
        }
    }
}

impl<S, F> ProgressStream<S, F> {
    /// Bytes forwarded so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Length the percentages are computed against.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Current percentage, if it can be computed.
    pub fn percent(&self) -> Option<u8> {
        percent(self.bytes_read, self.content_length)
    }
}

impl<S, F> Stream for ProgressStream<S, F>
where
    S: Stream<Item = Result<Bytes>> + Unpin,
    F: FnMut(u8) + Unpin,
{
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let item = ready!(Pin::new(&mut this.inner).poll_next(cx));

        if let Some(Ok(chunk)) = &item {
            if !chunk.is_empty() {
                this.bytes_read += chunk.len() as u64;
                if let Some(pct) = this.percent() {
                    (this.on_progress)(pct);
                }
            }
        }

        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
