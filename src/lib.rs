//! # mpdwire
//!
//! A blocking client engine for the Music Player Daemon control protocol:
//! - Handshake with configurable minimum protocol version
//! - Command encoding with argument quoting
//! - Short-write retry on the command writer
//! - Response decoding into records, including undelimited entity lists
//! - Typed command wrappers and lenient entity decoders
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Client (commands + entity decoders)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ request / request_list
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Connection                             │
//! │         (state, handshake, one request in flight)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │   Encoder   │          │   Decoder    │
//!   │ (+ retrying │          │ (record/list │
//!   │   writer)   │          │  + ACK lines)│
//!   └──────┬──────┘          └──────┬───────┘
//!          │                        │
//!          ▼                        ▼
//!   ┌─────────────────────────────────────┐
//!   │           Line Transport            │
//!   │        (buffered TCP stream)        │
//!   └─────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use mpdwire::{Command, Config, Connection};
//!
//! let config = Config::builder().address("127.0.0.1:6600").build();
//! let mut conn = Connection::dial(&config)?;
//!
//! let status = conn.request(&Command::new("status"))?;
//! println!("volume: {}", status.get_int("volume"));
//!
//! for song in conn.request_list(&Command::new("playlistinfo"))? {
//!     println!("{}", song.get_str("file"));
//! }
//! conn.close()?;
//! # Ok::<(), mpdwire::MpdError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MpdError, Result};
pub use config::Config;
pub use network::{ByteStream, Connection, ConnectionState, SharedConnection};
pub use protocol::{Arg, Command, Record, ServerError, Version};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mpdwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
