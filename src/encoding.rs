//! Named text encodings for the session's send and receive paths.
//!
//! A [`Charset`] is used symmetrically: outgoing text is encoded to bytes
//! before it is written to the sink, and the bytes accumulated by a scan are
//! decoded back to text with the same charset. Encoding is fallible (a
//! character may have no representation); decoding is lossy and substitutes
//! U+FFFD for invalid input, which keeps prompt detection working even when
//! a device emits the occasional stray byte.

use std::fmt;
use std::str::FromStr;

use crate::result::ExpectError;

/// Characters for Windows-1252 bytes 0x80..=0x9F, where it departs from
/// Latin-1. Unmapped code points decode to U+FFFD.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{FFFD}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{FFFD}', '\u{017D}', '\u{FFFD}',
    '\u{FFFD}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{FFFD}', '\u{017E}', '\u{0178}',
];

/// A named character encoding for a session's text I/O.
///
/// The default is UTF-8. The charset of a [`Session`](crate::Session) can be
/// changed between calls; the change affects subsequent operations only.
///
/// # Examples
///
/// ```
/// use cliexpect::Charset;
///
/// let cs = Charset::for_label("iso-8859-1").unwrap();
/// assert_eq!(cs, Charset::Latin1);
/// assert_eq!(cs.decode(&[0x63, 0x61, 0x66, 0xE9]), "café");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8 (the default).
    #[default]
    Utf8,
    /// ISO-8859-1 (Latin-1): each byte is the identically numbered code point.
    Latin1,
    /// Windows-1252: Latin-1 with printable characters in 0x80..=0x9F.
    Windows1252,
}

impl Charset {
    /// Resolve a charset from a label such as `"utf-8"` or `"iso-8859-1"`.
    ///
    /// Labels are matched case-insensitively. Returns `None` for labels that
    /// name no supported encoding.
    pub fn for_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin-1" | "latin1" => Some(Self::Latin1),
            "windows-1252" | "cp1252" => Some(Self::Windows1252),
            _ => None,
        }
    }

    /// Canonical name of this charset.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// Encode `text` into bytes under this charset.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError::Unencodable`] if a character of `text` has no
    /// representation in this charset. UTF-8 encodes every `str`.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, ExpectError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(u32::from(ch)).map_err(|_| ExpectError::Unencodable {
                        charset: self.name(),
                        ch,
                    })
                })
                .collect(),
            Self::Windows1252 => text
                .chars()
                .map(|ch| {
                    encode_cp1252(ch).ok_or(ExpectError::Unencodable {
                        charset: self.name(),
                        ch,
                    })
                })
                .collect(),
        }
    }

    /// Decode `bytes` into text under this charset, lossily.
    ///
    /// Byte sequences with no meaning in the charset become U+FFFD.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Windows1252 => bytes
                .iter()
                .map(|&b| match b {
                    0x80..=0x9F => CP1252_HIGH[usize::from(b - 0x80)],
                    _ => char::from(b),
                })
                .collect(),
        }
    }
}

fn encode_cp1252(ch: char) -> Option<u8> {
    match u32::from(ch) {
        c @ (0x00..=0x7F | 0xA0..=0xFF) => Some(c as u8),
        // U+FFFD marks the undefined slots of the table; it has no encoding.
        _ if ch == '\u{FFFD}' => None,
        _ => CP1252_HIGH
            .iter()
            .position(|&mapped| mapped == ch)
            .map(|idx| 0x80 + idx as u8),
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = ExpectError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::for_label(label).ok_or_else(|| ExpectError::UnsupportedCharset(label.to_string()))
    }
}
