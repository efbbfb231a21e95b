//! Chunked character reads over a byte stream.
//!
//! Input is decoded as UTF-8. Invalid sequences become U+FFFD, one per
//! maximal invalid prefix (the same policy as `String::from_utf8_lossy`), and
//! a multi-byte sequence split between two underlying reads is reassembled.

use std::io::{self, ErrorKind, Read};

const READ_BUF_SIZE: usize = 64 * 1024;

/// Result of one [`CharSource::read_chunk`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadStatus {
    pub count: usize,
    /// The stream is exhausted; nothing follows what was just read.
    pub eof: bool,
}

/// A stream that hands out decoded characters in bounded batches.
pub trait CharSource {
    /// Replace the contents of `out` with up to `max` characters.
    ///
    /// Fewer than `max` characters are only returned at end of stream.
    ///
    /// # Errors
    ///
    /// Propagates the underlying read error. The contents of `out` are
    /// unspecified afterwards.
    fn read_chunk(&mut self, out: &mut Vec<char>, max: usize) -> io::Result<ReadStatus>;
}

/// UTF-8 decoding [`CharSource`] over any [`Read`].
#[derive(Debug)]
pub struct Utf8Source<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl<R: Read> Utf8Source<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(READ_BUF_SIZE),
            pos: 0,
            eof: false,
        }
    }

    fn pending(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Append more bytes after the unconsumed tail. Sets `eof` on a zero read.
    fn fill(&mut self) -> io::Result<()> {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
        let start = self.buf.len();
        self.buf.resize(start + READ_BUF_SIZE, 0);
        let read = loop {
            match self.reader.read(&mut self.buf[start..]) {
                Ok(n) => break Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };
        match read {
            Ok(n) => {
                self.buf.truncate(start + n);
                if n == 0 {
                    self.eof = true;
                }
                Ok(())
            }
            Err(e) => {
                self.buf.truncate(start);
                Err(e)
            }
        }
    }

    /// True once every byte has been read and decoded.
    fn exhausted(&mut self) -> io::Result<bool> {
        while self.pending().is_empty() && !self.eof {
            self.fill()?;
        }
        Ok(self.pending().is_empty())
    }

    /// Decode up to `want` characters from the buffered bytes into `out`.
    /// Returns false when more bytes are needed to make progress.
    fn decode_into(&mut self, out: &mut Vec<char>, want: usize) -> bool {
        let pending = self.pending();
        if pending.is_empty() {
            return false;
        }
        // A char is at most 4 bytes, so this window always holds `want`
        // characters or a complete invalid sequence.
        let window = &pending[..pending.len().min(want.saturating_mul(4))];
        let (valid, invalid) = match std::str::from_utf8(window) {
            Ok(text) => (text, None),
            Err(e) => {
                // valid_up_to() is a char boundary by definition
                let text = std::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default();
                (text, Some(e.error_len()))
            }
        };

        if !valid.is_empty() {
            let mut consumed = 0;
            for ch in valid.chars().take(want) {
                out.push(ch);
                consumed += ch.len_utf8();
            }
            self.pos += consumed;
            return true;
        }

        match invalid {
            Some(Some(len)) => {
                out.push(char::REPLACEMENT_CHARACTER);
                self.pos += len;
                true
            }
            // Truncated sequence at the end of the stream.
            Some(None) if self.eof => {
                out.push(char::REPLACEMENT_CHARACTER);
                self.pos = self.buf.len();
                true
            }
            _ => false,
        }
    }
}

impl<R: Read> CharSource for Utf8Source<R> {
    fn read_chunk(&mut self, out: &mut Vec<char>, max: usize) -> io::Result<ReadStatus> {
        out.clear();
        while out.len() < max {
            let want = max - out.len();
            if !self.decode_into(out, want) {
                if self.eof {
                    break;
                }
                self.fill()?;
            }
        }
        let eof = self.exhausted()?;
        Ok(ReadStatus {
            count: out.len(),
            eof,
        })
    }
}
