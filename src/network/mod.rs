//! Network Module
//!
//! TCP connection handling.
//!
//! ## Architecture
//! - One blocking socket per connection
//! - Buffered line transport split from the socket
//! - Strict request/response: one command in flight at a time

mod connection;
mod shared;
mod stream;
mod transport;

pub use connection::{Connection, ConnectionState};
pub use shared::SharedConnection;
pub use stream::ByteStream;
pub use transport::{LineTransport, TcpTransport};
