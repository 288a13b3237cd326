//! The pattern-detecting stream reader

mod tail;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use tail::TailContext;

/// Chunk capacity of a single read from the byte source, in bytes.
pub(crate) const DEFAULT_CHUNK_CAPACITY: usize = 2048;

/// Why a scan finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanEnd {
    /// The pattern appeared as the suffix of the bytes read so far.
    Matched,
    /// The source signaled end-of-stream (or failed) before the pattern
    /// appeared.
    SourceClosed,
}

/// One in-flight scan: reads chunks from the source until the pattern sits
/// at the tail of the accumulated output or the source is exhausted.
///
/// The chunk read is the only suspension point. Cancellation is dropping the
/// [`run`](BoundaryScanner::run) future there: the pending read is abandoned
/// before it completes, so a cancelled scan never consumes bytes the next
/// scan should see arriving later.
pub(crate) struct BoundaryScanner<'a, R> {
    source: &'a mut R,
    tail: TailContext,
    /// All bytes read by this scan, in arrival order.
    buffer: BytesMut,
    chunk: Vec<u8>,
}

impl<'a, R> BoundaryScanner<'a, R>
where
    R: AsyncRead + Unpin,
{
    pub(crate) fn new(source: &'a mut R, pattern: &[u8], chunk_capacity: usize) -> Self {
        Self {
            source,
            tail: TailContext::new(pattern),
            buffer: BytesMut::with_capacity(chunk_capacity),
            chunk: vec![0u8; chunk_capacity],
        }
    }

    /// Run the scan to completion, returning how it ended and every byte it
    /// read.
    ///
    /// A read error finishes the scan like end-of-stream: the error goes to
    /// the log, and whatever was accumulated up to that point is the result.
    pub(crate) async fn run(mut self) -> (ScanEnd, BytesMut) {
        loop {
            let n = match self.source.read(&mut self.chunk).await {
                Ok(0) => {
                    debug!(bytes = self.buffer.len(), "source closed before match");
                    return (ScanEnd::SourceClosed, self.buffer);
                }
                Ok(n) => n,
                Err(error) => {
                    warn!(%error, "read from byte source failed, treating as end of stream");
                    return (ScanEnd::SourceClosed, self.buffer);
                }
            };

            self.buffer.extend_from_slice(&self.chunk[..n]);
            if self.tail.advance(&self.chunk[..n]) {
                debug!(bytes = self.buffer.len(), "pattern matched at tail");
                return (ScanEnd::Matched, self.buffer);
            }
        }
    }
}
