//! Response framing
//!
//! A response is any number of body lines followed by exactly one status
//! line. The transport may hand a long line over in several fragments; the
//! frame reader stitches them back into logical lines before looking at
//! them.
//!
//! ```text
//! fragment  fragment  fragment(end)   -> logical line (body)
//! fragment(end)                       -> logical line (body)
//! fragment(end)                       -> "error id=0 msg=ok" (terminal)
//! ```

use std::io::{self, BufRead};

use bytes::BytesMut;

use crate::error::{QueryError, Result};
use super::status::{Status, STATUS_TOKEN};

/// Default max bytes per physical read
pub const DEFAULT_FRAGMENT_LEN: usize = 4096;

/// Default ceiling for an accumulated response body (16 MB)
pub const DEFAULT_MAX_RESPONSE_LEN: usize = 16 * 1024 * 1024;

/// Source of physical line fragments
pub trait LineTransport {
    /// Append the next fragment to `line`.
    ///
    /// Returns `true` when more data belongs to the same line and `false`
    /// once the line is complete.
    fn read_fragment(&mut self, line: &mut BytesMut) -> io::Result<bool>;
}

/// [`LineTransport`] over any buffered reader
///
/// Returns at most `max_fragment_len` bytes per read; a longer line is
/// reported as several fragments.
pub struct BufReadTransport<R> {
    inner: R,
    max_fragment_len: usize,
}

impl<R: BufRead> BufReadTransport<R> {
    pub fn new(inner: R) -> Self {
        Self::with_fragment_len(inner, DEFAULT_FRAGMENT_LEN)
    }

    pub fn with_fragment_len(inner: R, max_fragment_len: usize) -> Self {
        Self {
            inner,
            max_fragment_len: max_fragment_len.max(1),
        }
    }

}

impl<R: BufRead> LineTransport for BufReadTransport<R> {
    fn read_fragment(&mut self, line: &mut BytesMut) -> io::Result<bool> {
        let mut taken = 0;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                // Earlier fragments of this line may have filled whole reads
                if taken == 0 && line.is_empty() {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "connection closed before the status line",
                    ));
                }
                // Unterminated last line
                return Ok(false);
            }

            let room = self.max_fragment_len - taken;
            let window = &available[..available.len().min(room)];

            if let Some(pos) = window.iter().position(|&b| b == b'\n') {
                line.extend_from_slice(&window[..=pos]);
                self.inner.consume(pos + 1);
                return Ok(false);
            }

            let n = window.len();
            line.extend_from_slice(window);
            self.inner.consume(n);
            taken += n;

            if taken >= self.max_fragment_len {
                return Ok(true);
            }
        }
    }
}

/// Reads complete responses from one connection
///
/// Not reentrant: exactly one read may be in flight, which `&mut self`
/// enforces.
pub struct FrameReader<T> {
    transport: T,
    line: BytesMut,
    max_response_len: usize,
}

impl<T: LineTransport> FrameReader<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            line: BytesMut::with_capacity(DEFAULT_FRAGMENT_LEN),
            max_response_len: DEFAULT_MAX_RESPONSE_LEN,
        }
    }

    /// Set the ceiling for a single response body
    pub fn with_max_response_len(mut self, len: usize) -> Self {
        self.max_response_len = len;
        self
    }

    /// Read one logical line with its terminators removed
    pub fn read_line(&mut self) -> Result<String> {
        let (text, problem) = self.next_line()?;
        match problem {
            Some(err) => Err(err),
            None => Ok(text),
        }
    }

    /// Read body lines up to and including the status line
    ///
    /// Body lines are concatenated without a separator and the result is
    /// trimmed. A malformed or oversized body is still read through to its
    /// status line before the error is returned, so the next response
    /// starts on a clean boundary. Transport errors abort immediately.
    pub fn read_response(&mut self) -> Result<(String, Status)> {
        let mut body = String::new();
        let mut failure = None;

        loop {
            let (line, problem) = self.next_line()?;

            if is_status_line(&line) {
                let status = Status::parse(&line)?;
                return match failure.or(problem) {
                    Some(err) => Err(err),
                    None => Ok((body.trim().to_string(), status)),
                };
            }

            if failure.is_some() {
                continue;
            }
            if let Some(err) = problem {
                failure = Some(err);
                continue;
            }

            if body.len() + line.len() > self.max_response_len {
                failure = Some(QueryError::Protocol(format!(
                    "Response exceeds {} bytes",
                    self.max_response_len
                )));
                body.clear();
                continue;
            }
            body.push_str(&line);
        }
    }

    /// Consume the next logical line
    ///
    /// The whole line is always consumed. A line that is too long or not
    /// UTF-8 comes back with its problem alongside a lossy rendering.
    fn next_line(&mut self) -> Result<(String, Option<QueryError>)> {
        self.line.clear();
        let mut oversized = false;

        while self.transport.read_fragment(&mut self.line)? {
            if self.line.len() > self.max_response_len {
                // Keep draining, but stop buffering
                oversized = true;
                self.line.clear();
            }
        }

        if oversized {
            let err = QueryError::Protocol(format!("Line exceeds {} bytes", self.max_response_len));
            return Ok((String::new(), Some(err)));
        }

        let (text, problem) = match std::str::from_utf8(&self.line) {
            Ok(text) => (text.to_string(), None),
            Err(e) => (
                String::from_utf8_lossy(&self.line).into_owned(),
                Some(QueryError::Protocol(format!("Line is not valid UTF-8: {}", e))),
            ),
        };

        // Servers terminate with "\n\r", so the CR lands at the front of
        // the following line
        let text = text.trim_matches(|c| c == '\r' || c == '\n').to_string();
        Ok((text, problem))
    }

    pub fn get_ref(&self) -> &T {
        &self.transport
    }
}

/// True when the line's first token is the status token
pub fn is_status_line(line: &str) -> bool {
    line.trim_start().split(' ').next() == Some(STATUS_TOKEN)
}
