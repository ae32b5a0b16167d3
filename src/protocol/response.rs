//! Response definitions
//!
//! Terminator tokens and classification of `ACK` error lines.

use std::fmt;

/// Line that ends every successful response
pub const TERMINATOR: &str = "OK";

/// Prefix of an error line
pub const ERROR_MARKER: &str = "ACK";

/// Field key some legacy servers use to report a failure inline
pub const LEGACY_ERROR_KEY: &str = "error";

/// Error codes carried in the `[code@index]` section of an ACK line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckCode {
    NotList,
    Arg,
    Password,
    Permission,
    Unknown,
    NoExist,
    PlaylistMax,
    System,
    PlaylistLoad,
    UpdateAlready,
    PlayerSync,
    Exist,
    Other(u32),
}

impl From<u32> for AckCode {
    fn from(code: u32) -> Self {
        match code {
            1 => AckCode::NotList,
            2 => AckCode::Arg,
            3 => AckCode::Password,
            4 => AckCode::Permission,
            5 => AckCode::Unknown,
            50 => AckCode::NoExist,
            51 => AckCode::PlaylistMax,
            52 => AckCode::System,
            53 => AckCode::PlaylistLoad,
            54 => AckCode::UpdateAlready,
            55 => AckCode::PlayerSync,
            56 => AckCode::Exist,
            n => AckCode::Other(n),
        }
    }
}

/// A command rejected by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// Human-readable text following the `{command}` section
    pub message: String,

    pub code: Option<AckCode>,

    /// Position of the failing command inside a command list
    pub command_index: Option<u32>,

    /// Name of the command the server rejected
    pub command: Option<String>,
}

impl ServerError {
    /// An error carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            command_index: None,
            command: None,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServerError {}

/// Convert an error line into a [`ServerError`]
///
/// Expected shape: `ACK [<code>@<index>] {<command>} <message>`. The message
/// is everything after the first `}`, trimmed. Without a `}` the whole line
/// becomes the message. Code, index and command are filled in only when their
/// sections parse.
pub fn classify_error(line: &str) -> ServerError {
    let Some(brace) = line.find('}') else {
        return ServerError::new(line);
    };

    let mut err = ServerError::new(line[brace + 1..].trim());

    let head = line.strip_prefix(ERROR_MARKER).unwrap_or(line).trim_start();
    if let Some((code, index)) = parse_ack_position(head) {
        err.code = Some(AckCode::from(code));
        err.command_index = Some(index);
    }

    if let Some(open) = line[..brace].rfind('{') {
        err.command = Some(line[open + 1..brace].to_string());
    }

    err
}

/// Parse the leading `[code@index]` section
fn parse_ack_position(head: &str) -> Option<(u32, u32)> {
    let inner = head.strip_prefix('[')?;
    let inner = &inner[..inner.find(']')?];
    let (code, index) = inner.split_once('@')?;
    Some((code.parse().ok()?, index.parse().ok()?))
}
