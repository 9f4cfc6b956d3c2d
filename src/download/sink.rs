//! Writing response bodies to disk.

use crate::error::Result;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::io;
use std::path::Path;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// Write every chunk of `stream` to `destination` and return the number of
/// bytes written.
///
/// Missing parent directories are created and any file already present at
/// `destination` is deleted first. The destination is opened before the
/// stream is polled for the first time, so a path that cannot be written
/// fails before any byte is consumed.
///
/// Both the file and the stream are dropped, thus closed, on every return
/// path. A failure in the middle of the transfer leaves the partial file on
/// disk.
pub async fn write_stream<S>(mut stream: S, destination: &Path) -> Result<u64>
where
    S: Stream<Item = Result<Bytes>> + Unpin,
{
    if let Some(dir) = destination.parent().filter(|d| !d.as_os_str().is_empty()) {
        debug!("Creating destination directory {:?}", dir);
        fs::create_dir_all(dir).await?;
    }

    match fs::remove_file(destination).await {
        Ok(()) => debug!("Removed existing file {:?}", destination),
        Err(e) if e.kind() == io::ErrorKind::NotFound => (),
        Err(e) => return Err(e.into()),
    }

    debug!("Creating destination file {:?}", destination);
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(destination)
        .await?;

    let copied = copy_chunks(&mut stream, &mut file).await;
    // Pending writes must land before the handle is released, failure included.
    let flushed = file.flush().await;
    drop(file);

    let written = copied?;
    flushed?;

    debug!("Wrote {} bytes to {:?}", written, destination);
    Ok(written)
}

async fn copy_chunks<S>(stream: &mut S, file: &mut fs::File) -> Result<u64>
where
    S: Stream<Item = Result<Bytes>> + Unpin,
{
    let mut written: u64 = 0;
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        written += chunk.len() as u64;
        file.write_all_buf(&mut chunk).await?;
    }
    Ok(written)
}
