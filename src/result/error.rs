//! Error types for expect operations

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while driving a session.
///
/// Only [`PatternNotFound`](ExpectError::PatternNotFound) can come out of a
/// scan that started: a source that ends before the pattern appears is
/// reported as the tagged [`Reply::StreamEnded`](crate::Reply::StreamEnded)
/// outcome, and a read error during a scan is logged and folded into that
/// same outcome.
///
/// # Examples
///
/// ```no_run
/// use cliexpect::{ExpectError, Session};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let (stream, _peer) = tokio::io::duplex(1024);
/// # let (source, sink) = tokio::io::split(stream);
/// let mut session = Session::new(source, sink);
///
/// match session.expect("login: ", Duration::from_millis(200)).await {
///     Ok(reply) => println!("got: {}", reply.text()),
///     Err(ExpectError::PatternNotFound { pattern, timeout }) => {
///         eprintln!("no {pattern:?} within {timeout:?}");
///     }
///     Err(e) => return Err(e.into()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Error, Debug)]
pub enum ExpectError {
    /// The pattern did not appear at the stream tail before the timeout.
    ///
    /// Carries the pattern text the caller was waiting for and the timeout
    /// that elapsed. Output accumulated before the deadline is discarded.
    #[error("pattern {pattern:?} not found in input (after {timeout:?})")]
    PatternNotFound {
        /// The pattern that was being waited for.
        pattern: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// An empty pattern was passed to `expect`.
    ///
    /// An empty byte sequence is a suffix of everything; waiting for it is
    /// always a caller bug.
    #[error("pattern cannot be empty")]
    EmptyPattern,

    /// A charset label named no supported encoding.
    #[error("unsupported charset label {0:?}")]
    UnsupportedCharset(String),

    /// A character has no representation in the session's charset.
    ///
    /// Raised on the send path and when encoding an `expect` pattern.
    #[error("character {ch:?} has no representation in {charset}")]
    Unencodable {
        /// Name of the charset that could not encode the character.
        charset: &'static str,
        /// The offending character.
        ch: char,
    },

    /// Writing to or flushing the byte sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
