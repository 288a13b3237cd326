//! Session management for scripted command/response dialogs

mod builder;

pub use builder::SessionBuilder;

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::time;
use tracing::trace;

use crate::encoding::Charset;
use crate::result::{ExpectError, Reply};
use crate::scanner::{BoundaryScanner, ScanEnd};

/// A scripted dialog over a byte-oriented duplex stream.
///
/// A `Session` binds a readable byte source, a writable byte sink, and a
/// text [`Charset`] for one interactive conversation, typically a remote
/// shell or device console whose prompts arrive in arbitrarily fragmented
/// chunks. It exposes two operations: [`send_line`](Session::send_line) to
/// transmit command text, and [`expect`](Session::expect) to wait until a
/// pattern appears at the tail of the output.
///
/// The session knows nothing about what protocol runs over the stream, and
/// it does not open or close the connection; see
/// [`SessionBuilder::connect`].
///
/// # Concurrency
///
/// At most one `expect` can be in flight per session: `expect` takes
/// `&mut self`, so the borrow checker enforces serialized calls. The stream
/// is consumed in order: each call starts scanning from the position where
/// the previous call stopped.
///
/// # Examples
///
/// ```no_run
/// use cliexpect::Session;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let (stream, _peer) = tokio::io::duplex(1024);
/// # let (source, sink) = tokio::io::split(stream);
/// let mut session = Session::new(source, sink);
///
/// session.expect("login: ", Duration::from_secs(5)).await?;
/// session.send_line("manager\r").await?;
/// session.expect("Password: ", Duration::from_secs(1)).await?;
/// session.send_line("friend\r").await?;
///
/// let reply = session.expect("Manager > ", Duration::from_secs(1)).await?;
/// println!("banner: {}", reply.text());
/// # Ok(())
/// # }
/// ```
pub struct Session<R, W> {
    source: R,
    sink: W,
    charset: Charset,
    chunk_capacity: usize,
}

impl<R, W> Session<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Attach a session with default configuration to a source and sink.
    ///
    /// This is a shorthand for `Session::builder().connect(source, sink)`.
    /// Use [`Session::builder`] to configure the charset or chunk capacity.
    pub fn new(source: R, sink: W) -> Self {
        SessionBuilder::new().connect(source, sink)
    }

    /// Create a new session builder.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Send raw bytes to the sink and flush.
    ///
    /// The bytes are written as given; no charset is involved. Useful for
    /// control characters the charset cannot spell.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError::Io`] if the write or the flush fails.
    pub async fn send(&mut self, bytes: &[u8]) -> Result<(), ExpectError> {
        self.sink.write_all(bytes).await?;
        self.sink.flush().await?;
        Ok(())
    }

    /// Send command text to the sink.
    ///
    /// `line` is encoded under the current charset and written verbatim:
    /// no line terminator is appended and no normalization is applied.
    /// Include whatever terminator the remote end expects:
    ///
    /// ```no_run
    /// # use cliexpect::Session;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let (stream, _peer) = tokio::io::duplex(1024);
    /// # let (source, sink) = tokio::io::split(stream);
    /// # let mut session = Session::new(source, sink);
    /// session.send_line("show version\r").await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError::Unencodable`] if the text cannot be encoded
    /// under the current charset, and [`ExpectError::Io`] if the write or
    /// flush fails.
    pub async fn send_line(&mut self, line: &str) -> Result<(), ExpectError> {
        let bytes = self.charset.encode(line)?;
        self.send(&bytes).await?;
        trace!(bytes = bytes.len(), "line sent");
        Ok(())
    }

    /// Wait until `pattern` appears at the tail of the output, bounded by
    /// `timeout`.
    ///
    /// `pattern` is encoded under the current charset, and the resulting
    /// byte sequence is matched exactly, with no regex or glob syntax. A match
    /// counts only when the pattern is the *suffix* of everything read so
    /// far, the way a CLI prompt sits at the end of output; an occurrence
    /// followed by more bytes is not a match. The match is detected
    /// regardless of how the stream fragments into chunks, including a
    /// pattern split across chunk boundaries.
    ///
    /// On success the accumulated bytes are decoded under the current
    /// charset and returned as a tagged [`Reply`]: either the pattern was
    /// found, or the source closed first. On timeout the scan is cancelled
    /// before this method returns; no further bytes are consumed on behalf
    /// of the expired call, and the output it had accumulated is discarded.
    ///
    /// # Errors
    ///
    /// - [`ExpectError::PatternNotFound`] if the pattern did not appear at
    ///   the tail within `timeout`.
    /// - [`ExpectError::EmptyPattern`] if `pattern` is empty.
    /// - [`ExpectError::Unencodable`] if `pattern` cannot be encoded under
    ///   the current charset.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cliexpect::Reply;
    /// # use cliexpect::Session;
    /// use std::time::Duration;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let (stream, _peer) = tokio::io::duplex(1024);
    /// # let (source, sink) = tokio::io::split(stream);
    /// # let mut session = Session::new(source, sink);
    /// match session.expect("login: ", Duration::from_secs(5)).await? {
    ///     Reply::Matched(text) => println!("prompt seen after: {text}"),
    ///     Reply::StreamEnded(text) => println!("connection closed after: {text}"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn expect(
        &mut self,
        pattern: &str,
        timeout: Duration,
    ) -> Result<Reply, ExpectError> {
        if pattern.is_empty() {
            return Err(ExpectError::EmptyPattern);
        }
        let charset = self.charset;
        let wanted = charset.encode(pattern)?;

        let scan = BoundaryScanner::new(&mut self.source, &wanted, self.chunk_capacity).run();
        match time::timeout(timeout, scan).await {
            Ok((ScanEnd::Matched, buffer)) => Ok(Reply::Matched(charset.decode(&buffer))),
            Ok((ScanEnd::SourceClosed, buffer)) => Ok(Reply::StreamEnded(charset.decode(&buffer))),
            // Dropping the scan future aborted its pending read.
            Err(_) => Err(ExpectError::PatternNotFound {
                pattern: pattern.to_owned(),
                timeout,
            }),
        }
    }

    /// The charset currently used for encoding and decoding.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Change the charset for subsequent calls.
    ///
    /// The change affects the next `send_line`/`expect` only; results
    /// already returned keep the decoding they were produced with.
    pub fn set_charset(&mut self, charset: Charset) {
        self.charset = charset;
    }
}
