//! Trailing-byte window for matches that straddle chunk boundaries

/// Tracks whether a pattern sits at the tail of everything read so far.
///
/// Only the last `pattern.len()` bytes ever matter for a tail match, so this
/// carries a window of at most that many recent bytes between chunks. The
/// window is scratch state: it never appears in the accumulated output.
pub(crate) struct TailContext {
    pattern: Vec<u8>,
    /// Most recently seen bytes, at most `pattern.len()` of them.
    window: Vec<u8>,
}

impl TailContext {
    pub(crate) fn new(pattern: &[u8]) -> Self {
        debug_assert!(!pattern.is_empty());
        Self {
            pattern: pattern.to_vec(),
            window: Vec::with_capacity(pattern.len()),
        }
    }

    /// Feed the next chunk; `true` when the pattern is now the suffix of all
    /// bytes seen.
    ///
    /// A chunk at least as long as the pattern is compared against its own
    /// trailing bytes; anything older cannot be part of a tail match. A
    /// shorter chunk is first merged with the carried window, and only once
    /// enough bytes exist is the synthesized tail compared.
    pub(crate) fn advance(&mut self, chunk: &[u8]) -> bool {
        let plen = self.pattern.len();

        if chunk.len() >= plen {
            let tail = &chunk[chunk.len() - plen..];
            if tail == &self.pattern[..] {
                return true;
            }
            self.window.clear();
            self.window.extend_from_slice(tail);
            return false;
        }

        if self.window.len() + chunk.len() < plen {
            // Not enough data to compare yet.
            self.window.extend_from_slice(chunk);
            return false;
        }

        // Synthesize the comparison window: the carried bytes that are still
        // within pattern reach, followed by the whole chunk.
        let carry = plen - chunk.len();
        let mut merged = Vec::with_capacity(plen);
        merged.extend_from_slice(&self.window[self.window.len() - carry..]);
        merged.extend_from_slice(chunk);
        if merged == self.pattern {
            return true;
        }
        self.window = merged;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_pattern_in_one_chunk() {
        let mut tail = TailContext::new(b"login: ");
        assert!(tail.advance(b"login: "));
    }

    #[test]
    fn pattern_at_chunk_tail() {
        let mut tail = TailContext::new(b"login: ");
        assert!(tail.advance(b"Welcome to gs908m\r\nlogin: "));
    }

    #[test]
    fn interior_occurrence_is_not_a_match() {
        let mut tail = TailContext::new(b"login: ");
        assert!(!tail.advance(b"abclogin: def"));
    }

    #[test]
    fn split_across_two_chunks() {
        let mut tail = TailContext::new(b"login: ");
        assert!(!tail.advance(b"logi"));
        assert!(tail.advance(b"n: "));
    }

    #[test]
    fn split_byte_by_byte() {
        let mut tail = TailContext::new(b"login: ");
        let pattern = b"login: ";
        for &byte in &pattern[..pattern.len() - 1] {
            assert!(!tail.advance(&[byte]));
        }
        assert!(tail.advance(&[pattern[pattern.len() - 1]]));
    }

    #[test]
    fn short_chunks_accumulate_before_comparing() {
        let mut tail = TailContext::new(b"abcdef");
        assert!(!tail.advance(b"ab"));
        assert!(!tail.advance(b"cd"));
        assert!(tail.advance(b"ef"));
    }

    #[test]
    fn window_refreshes_after_mismatch() {
        let mut tail = TailContext::new(b"ab");
        assert!(!tail.advance(b"a"));
        assert!(!tail.advance(b"c"));
        assert!(!tail.advance(b"a"));
        assert!(tail.advance(b"b"));
    }

    #[test]
    fn long_chunk_then_short_completion() {
        let mut tail = TailContext::new(b"ready> ");
        assert!(!tail.advance(b"system ready"));
        assert!(tail.advance(b"> "));
    }

    #[test]
    fn mismatched_synthesized_window_becomes_the_new_tail() {
        let mut tail = TailContext::new(b"$ ");
        assert!(!tail.advance(b"x"));
        assert!(!tail.advance(b"$"));
        assert!(tail.advance(b" "));
    }

    #[test]
    fn superseded_match_is_not_redetected() {
        let mut tail = TailContext::new(b"$ ");
        assert!(tail.advance(b"output$ "));
        // A fresh scan past that point sees only the newer bytes.
        let mut tail = TailContext::new(b"$ ");
        assert!(!tail.advance(b"more output"));
    }
}
