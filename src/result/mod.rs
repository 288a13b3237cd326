//! Result types for expect operations

mod error;

pub use error::ExpectError;

/// Outcome of a finished scan: why it stopped, and everything it read.
///
/// Both variants carry the accumulated output decoded under the session's
/// charset. Keeping the variants distinct lets the caller decide whether a
/// stream that closed early is acceptable; a plain string return would make
/// "prompt seen" and "connection dropped" look identical.
///
/// # Examples
///
/// ```no_run
/// use cliexpect::{Reply, Session};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let (stream, _peer) = tokio::io::duplex(1024);
/// # let (source, sink) = tokio::io::split(stream);
/// # let mut session = Session::new(source, sink);
/// match session.expect("$ ", Duration::from_secs(5)).await? {
///     Reply::Matched(text) => println!("prompt is back: {text}"),
///     Reply::StreamEnded(text) => eprintln!("device hung up after: {text}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The pattern appeared as the suffix of the bytes read so far.
    Matched(String),

    /// The source signaled end-of-stream before the pattern appeared.
    ///
    /// Read errors on the source finish the scan the same way; they are
    /// reported to the log, not to the caller.
    StreamEnded(String),
}

impl Reply {
    /// The accumulated output, whichever way the scan finished.
    pub fn text(&self) -> &str {
        match self {
            Self::Matched(text) | Self::StreamEnded(text) => text,
        }
    }

    /// Consume the reply, returning the accumulated output.
    pub fn into_text(self) -> String {
        match self {
            Self::Matched(text) | Self::StreamEnded(text) => text,
        }
    }

    /// `true` when the scan finished because the pattern was found.
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_reads_either_variant() {
        assert_eq!(Reply::Matched("a$ ".into()).text(), "a$ ");
        assert_eq!(Reply::StreamEnded("partial".into()).text(), "partial");
    }

    #[test]
    fn is_matched_distinguishes_outcomes() {
        assert!(Reply::Matched(String::new()).is_matched());
        assert!(!Reply::StreamEnded(String::new()).is_matched());
    }
}
