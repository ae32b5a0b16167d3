//! Protocol version
//!
//! The `major.minor.patch` triple announced in the server greeting.

use std::fmt;
use std::str::FromStr;

use crate::error::MpdError;

/// A protocol version, ordered lexicographically by (major, minor, patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Oldest protocol version the command layer is written against
    pub const DEFAULT_MINIMUM: Version = Version::new(0, 15, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::DEFAULT_MINIMUM
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = MpdError;

    /// Parse exactly three dot-separated decimal components
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MpdError::Protocol(format!("invalid version: {:?}", s));

        let mut parts = s.split('.');
        let mut next = || -> Result<u32, MpdError> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let version = Version::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}
