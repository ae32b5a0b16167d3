//! Raw byte stream capability
//!
//! Lets a connection stand in wherever a plain socket-like stream is expected.

use std::io::{self, Read, Write};
use std::net::SocketAddr;
use std::time::Duration;

/// A bidirectional byte stream with socket-style address and timeout queries
pub trait ByteStream: Read + Write {
    fn local_addr(&self) -> io::Result<SocketAddr>;

    fn peer_addr(&self) -> io::Result<SocketAddr>;

    /// `None` blocks forever
    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()>;

    /// `None` blocks forever
    fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()>;
}

impl ByteStream for std::net::TcpStream {
    fn local_addr(&self) -> io::Result<SocketAddr> {
        std::net::TcpStream::local_addr(self)
    }

    fn peer_addr(&self) -> io::Result<SocketAddr> {
        std::net::TcpStream::peer_addr(self)
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        std::net::TcpStream::set_read_timeout(self, timeout)
    }

    fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        std::net::TcpStream::set_write_timeout(self, timeout)
    }
}
