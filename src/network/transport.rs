//! Line Transport
//!
//! Buffered line reads and retrying writes over a byte stream.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;

use crate::error::Result;
use crate::protocol::{codec, Record, RetryPolicy};

/// Transport used by TCP connections
pub type TcpTransport = LineTransport<BufReader<TcpStream>, BufWriter<TcpStream>>;

/// Reads lines from `R` and writes command lines to `W`
pub struct LineTransport<R, W> {
    /// Buffered reader, shared by the decoder and raw reads
    reader: R,

    /// Buffered writer, flushed after every command
    writer: W,

    retry: RetryPolicy,
}

impl<R: BufRead, W: Write> LineTransport<R, W> {
    pub fn new(reader: R, writer: W, retry: RetryPolicy) -> Self {
        Self { reader, writer, retry }
    }

    /// Read one line without its terminator
    pub fn read_line(&mut self) -> Result<String> {
        codec::read_line(&mut self.reader)
    }

    /// Write one encoded line, retrying short writes
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        tracing::trace!("-> {}", line.trim_end());
        codec::write_with_retry(&mut self.writer, line.as_bytes(), &self.retry)?;
        Ok(())
    }

    pub fn read_record(&mut self) -> Result<Record> {
        codec::read_record(&mut self.reader)
    }

    pub fn read_record_list(&mut self) -> Result<Vec<Record>> {
        codec::read_record_list(&mut self.reader)
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Take the reader and writer back
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl TcpTransport {
    /// Split a TCP stream into buffered read and write halves
    pub fn from_stream(stream: &TcpStream, retry: RetryPolicy) -> Result<Self> {
        let read_stream = stream.try_clone()?;
        let write_stream = stream.try_clone()?;

        Ok(Self::new(
            BufReader::new(read_stream),
            BufWriter::new(write_stream),
            retry,
        ))
    }
}
