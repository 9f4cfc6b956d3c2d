//! Local servers for responses a mock server cannot produce: bodies streamed
//! in chunks, bodies that stall mid-way, and listeners that never complete a
//! connection.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_LENGTH;
use axum::response::Response;
use axum::Router;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};

/// Axum server answering every path with the same streamed body.
pub struct StreamServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl StreamServer {
    /// Serve `body` with chunked transfer encoding and no declared length.
    pub async fn chunked(body: Vec<u8>) -> Self {
        Self::start(body, None, false).await
    }

    /// Declare `declared` bytes, send `sent`, then stop sending without
    /// closing the connection.
    pub async fn stalled(sent: Vec<u8>, declared: u64) -> Self {
        Self::start(sent, Some(declared), true).await
    }

    async fn start(body: Vec<u8>, declared: Option<u64>, stall: bool) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let app = Router::new().fallback(move || {
            let body = Bytes::from(body.clone());
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                let chunks = stream::iter(vec![Ok::<_, std::io::Error>(body)]);
                let stream = if stall {
                    chunks.chain(stream::pending()).boxed()
                } else {
                    chunks.boxed()
                };
                let mut response = Response::builder();
                if let Some(length) = declared {
                    response = response.header(CONTENT_LENGTH, length);
                }
                response
                    .body(Body::from_stream(stream))
                    .expect("Failed to build response")
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move { axum::serve(listener, app).await });

        StreamServer { addr, hits }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Number of requests answered.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// A listener whose accept queue is full, so new connections are never
/// established and clients hit their connect timeout.
pub struct UnresponsiveListener {
    addr: SocketAddr,
    _listener: TcpListener,
    _queued: Vec<TcpStream>,
}

impl UnresponsiveListener {
    pub async fn start() -> Self {
        let socket = TcpSocket::new_v4().expect("Failed to create socket");
        socket
            .bind("127.0.0.1:0".parse().expect("Invalid bind address"))
            .expect("Failed to bind listener");
        let listener = socket.listen(0).expect("Failed to listen");
        let addr = listener.local_addr().expect("Failed to read local address");

        // Never accepted; once the queue is full further handshakes stall.
        let mut queued = Vec::new();
        for _ in 0..64 {
            match tokio::time::timeout(Duration::from_millis(100), TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => queued.push(stream),
                _ => break,
            }
        }

        UnresponsiveListener {
            addr,
            _listener: listener,
            _queued: queued,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
