//! Protocol codec
//!
//! Line framing, response decoding and the retrying command writer.
//!
//! ## Response Grammar
//! ```text
//! response  := field* ( "OK" | ack ) "\n"
//! field     := key ":" " "? value "\n"
//! ack       := "ACK [" code "@" index "] {" command "} " message
//! ```
//!
//! List responses carry several entities back-to-back with no separator.
//! A new entity starts whenever a key repeats inside the entity being built.

use std::io::{self, BufRead, ErrorKind, Write};
use std::thread;
use std::time::Duration;

use crate::error::{MpdError, Result};
use super::response::{classify_error, ERROR_MARKER, LEGACY_ERROR_KEY, TERMINATOR};
use super::Record;

/// Default number of write attempts for one command
pub const DEFAULT_WRITE_ATTEMPTS: u32 = 3;

/// Default pause between write attempts after a short write
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(300);

// =============================================================================
// Line Framing
// =============================================================================

/// Read one line, without its trailing newline
///
/// End of stream is reported as an `UnexpectedEof` transport error.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Err(MpdError::Transport(io::Error::new(
            ErrorKind::UnexpectedEof,
            "stream closed before a complete response",
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    tracing::trace!("<- {}", line);
    Ok(line)
}

/// Whether a trimmed line is an `ACK` error line
pub fn is_error_line(line: &str) -> bool {
    line == ERROR_MARKER
        || line
            .strip_prefix(ERROR_MARKER)
            .is_some_and(|rest| rest.starts_with(' '))
}

/// A meaningful line of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseLine {
    /// The `OK` terminator
    Done,

    /// A `key: value` field
    Field { key: String, value: String },
}

/// Interpret a single line
///
/// Returns `None` for blank lines, and a `Server` error for `ACK` lines or the
/// legacy `error:` field.
pub fn parse_line(raw: &str) -> Result<Option<ResponseLine>> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line == TERMINATOR {
        return Ok(Some(ResponseLine::Done));
    }
    if is_error_line(line) {
        return Err(classify_error(line).into());
    }

    let (key, value) = line
        .split_once(':')
        .ok_or_else(|| MpdError::Protocol(format!("malformed response line: {:?}", line)))?;

    if key == LEGACY_ERROR_KEY {
        return Err(classify_error(line).into());
    }

    Ok(Some(ResponseLine::Field {
        key: key.to_string(),
        value: value.trim().to_string(),
    }))
}

/// Read until the next meaningful line, skipping blanks
fn next_response_line<R: BufRead>(reader: &mut R) -> Result<ResponseLine> {
    loop {
        let raw = read_line(reader)?;
        if let Some(line) = parse_line(&raw)? {
            return Ok(line);
        }
    }
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a single-record response
pub fn read_record<R: BufRead>(reader: &mut R) -> Result<Record> {
    let mut record = Record::new();
    loop {
        match next_response_line(reader)? {
            ResponseLine::Done => return Ok(record),
            ResponseLine::Field { key, value } => record.insert(key, value),
        }
    }
}

/// Decode a list response into one record per entity
pub fn read_record_list<R: BufRead>(reader: &mut R) -> Result<Vec<Record>> {
    let mut builder = RecordListBuilder::new();
    loop {
        match next_response_line(reader)? {
            ResponseLine::Done => return Ok(builder.finish()),
            ResponseLine::Field { key, value } => builder.push_field(key, value),
        }
    }
}

/// Splits a flat stream of fields into records on key repetition
///
/// Each entity type starts with a distinguished field that never repeats
/// inside one entity, so seeing a key twice marks the next entity.
#[derive(Debug, Default)]
pub struct RecordListBuilder {
    current: Record,
    completed: Vec<Record>,
}

impl RecordListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one field, closing the current record first if the key repeats
    pub fn push_field(&mut self, key: String, value: String) {
        if self.current.contains_key(&key) {
            self.flush_current();
        }
        self.current.insert(key, value);
    }

    /// Number of records closed so far
    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    /// Close the pending record and return everything collected
    ///
    /// A pending record without fields is dropped.
    pub fn finish(mut self) -> Vec<Record> {
        self.flush_current();
        self.completed
    }

    fn flush_current(&mut self) {
        let record = std::mem::take(&mut self.current);
        if !record.is_empty() {
            self.completed.push(record);
        }
    }
}

// =============================================================================
// Command Writing
// =============================================================================

/// Short-write retry policy for the command writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total write attempts, including the first
    pub attempts: u32,

    /// Pause after a short write before the next attempt
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_WRITE_ATTEMPTS,
            backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}

/// Write `bytes`, retrying the unwritten tail after a short write, then flush
///
/// Returns the number of bytes accepted by the writer. An interrupted write
/// uses up an attempt without a pause. Other I/O errors abort immediately. When every attempt ends short the remainder is dropped
/// without an error; callers only see it in the logs.
pub fn write_with_retry<W: Write>(writer: &mut W, bytes: &[u8], policy: &RetryPolicy) -> Result<usize> {
    let attempts = policy.attempts.max(1);
    let mut written = 0;
    let mut attempt = 0;

    while attempt < attempts {
        let n = match writer.write(&bytes[written..]) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                // counts as an attempt
                attempt += 1;
                tracing::debug!("write interrupted, attempt {}/{}", attempt, attempts);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        written += n;
        attempt += 1;

        if written == bytes.len() {
            break;
        }

        tracing::debug!(
            "short write ({} of {} bytes), attempt {}/{}",
            written,
            bytes.len(),
            attempt,
            attempts
        );
        if attempt < attempts {
            thread::sleep(policy.backoff);
        }
    }

    if written < bytes.len() {
        // Known gap: exhausted retries are not reported to the caller.
        tracing::warn!(
            "giving up after {} attempts with {} of {} bytes written",
            attempts,
            written,
            bytes.len()
        );
    }

    writer.flush()?;
    Ok(written)
}
