//! Error types for mpdwire
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::protocol::ServerError;

/// Result type alias using MpdError
pub type Result<T> = std::result::Result<T, MpdError>;

/// Unified error type for mpdwire operations
#[derive(Debug, Error)]
pub enum MpdError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// I/O failure, including an unexpected end of stream and socket timeouts
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Malformed handshake or framing the engine cannot interpret
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The server rejected the command with an ACK line
    #[error("server error: {0}")]
    Server(ServerError),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("connection is closed")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MpdError {
    /// The server's error, if the remote rejected the command
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            MpdError::Server(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this failure leaves the connection's framing in an unknown state
    pub(crate) fn is_fatal(&self) -> bool {
        matches!(self, MpdError::Transport(_) | MpdError::Protocol(_))
    }
}

impl From<ServerError> for MpdError {
    fn from(err: ServerError) -> Self {
        MpdError::Server(err)
    }
}
