//! Handshake negotiation
//!
//! The server speaks first: `OK <product> <major>.<minor>.<patch>`.

use std::io::BufRead;

use crate::error::{MpdError, Result};
use super::codec::{is_error_line, read_line};
use super::response::{classify_error, TERMINATOR};
use super::Version;

/// Result of a successful handshake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Product name announced by the server, usually `MPD`
    pub product: String,

    pub version: Version,
}

/// Parse a greeting line
///
/// Fails with `no handshake` for an empty line, a `Server` error for an ACK
/// line, and `malformed handshake` for anything else that is not a greeting.
pub fn parse_greeting(line: &str) -> Result<Greeting> {
    let line = line.trim();
    if line.is_empty() {
        return Err(MpdError::Protocol("no handshake".to_string()));
    }
    if is_error_line(line) {
        return Err(classify_error(line).into());
    }

    let malformed = || MpdError::Protocol("malformed handshake".to_string());

    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(TERMINATOR) {
        return Err(malformed());
    }
    let (Some(product), Some(version), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let version: Version = version.parse().map_err(|_| malformed())?;

    Ok(Greeting {
        product: product.to_string(),
        version,
    })
}

/// Read the greeting and check it against `min_version`
pub fn negotiate<R: BufRead>(reader: &mut R, min_version: Version) -> Result<Greeting> {
    let line = read_line(reader)?;
    let greeting = parse_greeting(&line)?;

    if greeting.version < min_version {
        tracing::warn!(
            "server speaks protocol {}, at least {} is required",
            greeting.version,
            min_version
        );
        return Err(MpdError::Protocol("unsupported version".to_string()));
    }

    tracing::debug!("handshake ok: {} {}", greeting.product, greeting.version);
    Ok(greeting)
}
