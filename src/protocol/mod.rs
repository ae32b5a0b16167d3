//! Protocol Module
//!
//! Defines the line-oriented wire protocol spoken with the server.
//!
//! ## Wire Format
//!
//! Every message is UTF-8 text terminated by `\n`.
//!
//! ```text
//! greeting  OK MPD 0.23.5                 server -> client, once
//! command   <verb>[ <arg>]*               client -> server
//! field     <key>: <value>                server -> client, zero or more
//! done      OK                            server -> client
//! error     ACK [<code>@<index>] {<command>} <message>
//! ```
//!
//! A response is a run of field lines closed by either `OK` or an `ACK` line.

mod command;
mod record;
mod response;
mod version;
pub mod codec;
pub mod handshake;

pub use command::{encode_command, Arg, Command};
pub use record::Record;
pub use response::{classify_error, AckCode, ServerError, ERROR_MARKER, TERMINATOR};
pub use version::Version;
pub use codec::{read_record, read_record_list, write_with_retry, RecordListBuilder, RetryPolicy};
pub use handshake::{negotiate, Greeting};
