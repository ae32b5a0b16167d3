//! Configuration for mpdwire
//!
//! Centralized connection configuration with sensible defaults.

use std::time::Duration;

use crate::error::{MpdError, Result};
use crate::protocol::{RetryPolicy, Version};

/// Default server address
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:6600";

/// Connection configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Server
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub address: String,

    /// Password sent right after the handshake, if any
    pub password: Option<String>,

    /// Oldest protocol version this connection accepts
    pub min_version: Version,

    // -------------------------------------------------------------------------
    // Socket
    // -------------------------------------------------------------------------
    /// Socket read timeout (milliseconds, 0 disables)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 disables)
    pub write_timeout_ms: u64,

    /// Disable Nagle's algorithm
    pub nodelay: bool,

    // -------------------------------------------------------------------------
    // Writer
    // -------------------------------------------------------------------------
    /// Total attempts for writing one command after short writes
    pub write_attempts: u32,

    /// Pause between write attempts (milliseconds)
    pub retry_backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            password: None,
            min_version: Version::DEFAULT_MINIMUM,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            nodelay: true,
            write_attempts: retry.attempts,
            retry_backoff_ms: retry.backoff.as_millis() as u64,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Retry policy for the command writer
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.write_attempts,
            backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_ms > 0).then(|| Duration::from_millis(self.read_timeout_ms))
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        (self.write_timeout_ms > 0).then(|| Duration::from_millis(self.write_timeout_ms))
    }

    /// Check the configuration before dialing
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(MpdError::Config("address must not be empty".to_string()));
        }
        if self.write_attempts == 0 {
            return Err(MpdError::Config("write_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address (host:port)
    pub fn address(mut self, addr: impl Into<String>) -> Self {
        self.config.address = addr.into();
        self
    }

    /// Set the password; an empty string means no password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        let password = password.into();
        self.config.password = (!password.is_empty()).then_some(password);
        self
    }

    /// Set the minimum accepted protocol version
    pub fn min_version(mut self, version: Version) -> Self {
        self.config.min_version = version;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    /// Set the total number of write attempts per command
    pub fn write_attempts(mut self, attempts: u32) -> Self {
        self.config.write_attempts = attempts;
        self
    }

    /// Set the pause between write attempts (in milliseconds)
    pub fn retry_backoff_ms(mut self, ms: u64) -> Self {
        self.config.retry_backoff_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
