//! Connection
//!
//! A single synchronous client connection: dial, handshake, request/response
//! round trips, and close.

use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

use crate::config::Config;
use crate::error::{MpdError, Result};
use crate::protocol::{handshake, Command, Greeting, Record, Version};
use super::stream::ByteStream;
use super::transport::TcpTransport;

/// Lifecycle of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    NotConnected,

    /// Socket open, greeting not yet accepted
    Handshaking,

    Ready,

    /// Closed explicitly or after a fatal failure; nothing touches the socket again
    Closed,
}

/// A client connection
///
/// Every round trip takes `&mut self`, so one connection never has more than
/// one request in flight. Use [`SharedConnection`](super::SharedConnection)
/// to share a connection between threads.
pub struct Connection {
    /// Socket handle kept for shutdown and address queries
    stream: Option<TcpStream>,

    /// Buffered line transport (dropped on close)
    transport: Option<TcpTransport>,

    state: ConnectionState,

    greeting: Option<Greeting>,

    /// Server address for logging
    address: String,
}

impl Connection {
    /// Connect, negotiate the protocol version and log in if configured
    pub fn dial(config: &Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Dialing {}", config.address);
        let stream = TcpStream::connect(&config.address)?;
        Self::establish(stream, config)
    }

    /// Dial with default settings
    pub fn connect(address: &str, password: &str) -> Result<Self> {
        let config = Config::builder().address(address).password(password).build();
        Self::dial(&config)
    }

    /// Run the handshake over an already connected stream
    ///
    /// On any failure the stream is shut down before the error is returned.
    pub fn establish(stream: TcpStream, config: &Config) -> Result<Self> {
        let address = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| config.address.clone());

        stream.set_nodelay(config.nodelay)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        let transport = TcpTransport::from_stream(&stream, config.retry_policy())?;
        let mut conn = Self {
            stream: Some(stream),
            transport: Some(transport),
            state: ConnectionState::Handshaking,
            greeting: None,
            address,
        };

        if let Err(e) = conn.handshake(config.min_version) {
            tracing::warn!("Handshake with {} failed: {}", conn.address, e);
            conn.abort();
            return Err(e);
        }

        if let Some(password) = &config.password {
            if let Err(e) = conn.request(&Command::new("password").arg(password)) {
                tracing::warn!("Authentication with {} failed: {}", conn.address, e);
                conn.abort();
                return Err(e);
            }
        }

        tracing::debug!("Connection to {} ready", conn.address);
        Ok(conn)
    }

    fn handshake(&mut self, min_version: Version) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(MpdError::ConnectionClosed)?;
        let greeting = handshake::negotiate(transport.reader_mut(), min_version)?;
        self.greeting = Some(greeting);
        self.state = ConnectionState::Ready;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Round trips
    // -------------------------------------------------------------------------

    /// Send a command and decode a single-record response
    pub fn request(&mut self, command: &Command) -> Result<Record> {
        self.round_trip(command, |t| t.read_record())
    }

    /// Send a command and decode a list response
    pub fn request_list(&mut self, command: &Command) -> Result<Vec<Record>> {
        self.round_trip(command, |t| t.read_record_list())
    }

    fn round_trip<T>(
        &mut self,
        command: &Command,
        decode: impl FnOnce(&mut TcpTransport) -> Result<T>,
    ) -> Result<T> {
        if self.state != ConnectionState::Ready {
            return Err(MpdError::ConnectionClosed);
        }
        let line = command.encode()?;
        let transport = self.transport.as_mut().ok_or(MpdError::ConnectionClosed)?;

        let result = match transport.write_line(&line) {
            Ok(()) => decode(transport),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            if e.is_fatal() {
                tracing::warn!(
                    "Closing connection to {} after `{}` failed: {}",
                    self.address,
                    command.verb(),
                    e
                );
                self.abort();
            }
        }
        result
    }

    // -------------------------------------------------------------------------
    // Close
    // -------------------------------------------------------------------------

    /// Close the connection
    ///
    /// Sends a best-effort `close` command, then shuts the socket down.
    /// Closing an already closed connection does nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.state == ConnectionState::Closed {
            return Ok(());
        }

        if self.state == ConnectionState::Ready {
            if let Some(transport) = self.transport.as_mut() {
                let sent = Command::new("close")
                    .encode()
                    .and_then(|line| transport.write_line(&line));
                if let Err(e) = sent {
                    tracing::debug!("Could not send close to {}: {}", self.address, e);
                }
            }
        }

        self.transport = None;
        self.state = ConnectionState::Closed;
        tracing::debug!("Connection to {} closed", self.address);

        match self.stream.take().map(|s| s.shutdown(Shutdown::Both)) {
            Some(Err(e)) if e.kind() != ErrorKind::NotConnected => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Drop the transport and socket without talking to the server
    fn abort(&mut self) {
        self.transport = None;
        self.state = ConnectionState::Closed;
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ConnectionState::Ready
    }

    /// Protocol version announced in the greeting
    pub fn protocol_version(&self) -> Option<Version> {
        self.greeting.as_ref().map(|g| g.version)
    }

    /// Product name announced in the greeting
    pub fn product(&self) -> Option<&str> {
        self.greeting.as_ref().map(|g| g.product.as_str())
    }

    /// Server address string used in logs
    pub fn address(&self) -> &str {
        &self.address
    }

    fn open_stream(&self) -> io::Result<&TcpStream> {
        self.stream.as_ref().ok_or_else(not_connected)
    }

    fn open_transport(&mut self) -> io::Result<&mut TcpTransport> {
        self.transport.as_mut().ok_or_else(not_connected)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn not_connected() -> io::Error {
    io::Error::new(ErrorKind::NotConnected, "connection is closed")
}

// =============================================================================
// Raw byte stream access
// =============================================================================

impl Read for Connection {
    /// Reads through the response buffer, so no buffered bytes are skipped
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.open_transport()?.reader_mut().read(buf)
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open_transport()?.writer_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.open_transport()?.writer_mut().flush()
    }
}

impl ByteStream for Connection {
    fn local_addr(&self) -> io::Result<SocketAddr> {
        self.open_stream()?.local_addr()
    }

    fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.open_stream()?.peer_addr()
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.open_stream()?.set_read_timeout(timeout)
    }

    fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.open_stream()?.set_write_timeout(timeout)
    }
}
