//! cliexpect: Expect-style dialogs over byte streams
//!
//! cliexpect scripts deterministic command/response dialogs against
//! line-oriented command-line interfaces: remote shells, device consoles,
//! anything that talks over a byte-oriented duplex stream. It sends command
//! text and blocks until an expected pattern appears at the *tail* of the
//! accumulated output, or until a timeout elapses.
//!
//! # Features
//!
//! - **Stream-agnostic**: works over any `AsyncRead` source and
//!   `AsyncWrite` sink (TCP, SSH channels, serial ports, in-memory pipes)
//! - **Boundary-safe matching**: a prompt split across read chunks is
//!   still detected, byte-for-byte fragmentation included
//! - **Tail-only semantics**: a pattern counts only as the suffix of the
//!   output so far, the way a CLI prompt terminates a response
//! - **Bounded waits**: every `expect` carries a timeout; an expired scan
//!   is cancelled before the call returns
//! - **Charsets**: per-session text encoding (UTF-8, Latin-1,
//!   Windows-1252), changeable between calls
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cliexpect::{Reply, Session};
//! use std::time::Duration;
//! use tokio::net::TcpStream;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The caller owns the connection; the session only uses it.
//!     let stream = TcpStream::connect("10.0.6.7:23").await?;
//!     let (source, sink) = stream.into_split();
//!     let mut session = Session::new(source, sink);
//!
//!     // Walk through a login dialog.
//!     session.expect("login: ", Duration::from_secs(5)).await?;
//!     session.send_line("manager\r").await?;
//!     session.expect("Password: ", Duration::from_secs(1)).await?;
//!     session.send_line("friend\r").await?;
//!
//!     // Run a command and collect its output.
//!     session.send_line("show system\r").await?;
//!     match session.expect("Manager > ", Duration::from_secs(2)).await? {
//!         Reply::Matched(text) => println!("{text}"),
//!         Reply::StreamEnded(text) => eprintln!("connection closed: {text}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Matching model
//!
//! Patterns are exact byte sequences (the pattern text encoded under the
//! session's charset), with no regex or glob syntax. A match is recognized if
//! and only if the pattern occurs as a contiguous suffix of the bytes read
//! so far at the moment a chunk is processed. An occurrence buried inside
//! the output and followed by more bytes is deliberately not a match: the
//! intended use is waiting for prompts, which end the output.
//!
//! # Timeouts and outcomes
//!
//! `expect` distinguishes its three endings:
//!
//! - [`Reply::Matched`]: the pattern appeared at the tail in time
//! - [`Reply::StreamEnded`]: the source closed before the pattern appeared
//! - [`ExpectError::PatternNotFound`]: the timeout elapsed first; the
//!   scan is cancelled and its partial output discarded
//!
//! Read errors during a scan are logged via `tracing` and treated as
//! end-of-stream; failures on the send path are returned from
//! [`Session::send_line`].

#![warn(missing_docs)]

mod encoding;
mod result;
mod scanner;
mod session;

// Public API exports
pub use encoding::Charset;
pub use result::{ExpectError, Reply};
pub use session::{Session, SessionBuilder};
