//! Session builder for configuration

use tokio::io::{AsyncRead, AsyncWrite};

use crate::encoding::Charset;
use crate::scanner::DEFAULT_CHUNK_CAPACITY;
use crate::session::Session;

/// Builder for configuring a session before attaching it to a stream.
///
/// Provides a fluent interface for the options that persist across calls.
///
/// # Defaults
///
/// - Charset: UTF-8
/// - Chunk capacity: 2048 bytes per read
///
/// # Examples
///
/// ```no_run
/// use cliexpect::{Charset, Session};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let (stream, _peer) = tokio::io::duplex(1024);
/// # let (source, sink) = tokio::io::split(stream);
/// # use tokio::io::{DuplexStream, ReadHalf, WriteHalf};
/// let session = Session::<ReadHalf<DuplexStream>, WriteHalf<DuplexStream>>::builder()
///     .charset(Charset::Latin1)
///     .chunk_capacity(512)
///     .connect(source, sink);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    charset: Charset,
    chunk_capacity: usize,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    /// Create a new session builder with default configuration.
    ///
    /// See the [`SessionBuilder`] documentation for default values.
    pub fn new() -> Self {
        Self {
            charset: Charset::default(),
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
        }
    }

    /// Set the charset used to encode outgoing text and decode results.
    ///
    /// Can also be changed later with
    /// [`Session::set_charset`](crate::Session::set_charset). To resolve a
    /// charset from a label, see [`Charset::for_label`].
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Set the capacity of a single read from the byte source, in bytes.
    ///
    /// A smaller capacity only fragments the incoming stream into more
    /// chunks; it never affects which patterns are detected.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn chunk_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "chunk capacity must be non-zero");
        self.chunk_capacity = capacity;
        self
    }

    /// Attach the configured session to a byte source and byte sink.
    ///
    /// The caller owns the connection lifecycle: whatever opened the stream
    /// (a TCP socket, an SSH channel, a serial port) also closes it. The
    /// session only reads from `source` and writes to `sink`.
    pub fn connect<R, W>(self, source: R, sink: W) -> Session<R, W>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        Session {
            source,
            sink,
            charset: self.charset,
            chunk_capacity: self.chunk_capacity,
        }
    }
}
