//! Shared connection handle
//!
//! Serializes callers on different threads over one connection.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Command, Record};
use super::connection::{Connection, ConnectionState};

/// Cloneable handle to one connection
///
/// The lock is held for the whole write + read round trip, so responses can
/// never interleave.
#[derive(Clone)]
pub struct SharedConnection {
    inner: Arc<Mutex<Connection>>,
}

impl SharedConnection {
    pub fn new(conn: Connection) -> Self {
        Self {
            inner: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn dial(config: &Config) -> Result<Self> {
        Ok(Self::new(Connection::dial(config)?))
    }

    pub fn request(&self, command: &Command) -> Result<Record> {
        self.inner.lock().request(command)
    }

    pub fn request_list(&self, command: &Command) -> Result<Vec<Record>> {
        self.inner.lock().request_list(command)
    }

    /// Run several commands without another caller slipping in between
    pub fn with<T>(&self, f: impl FnOnce(&mut Connection) -> T) -> T {
        f(&mut *self.inner.lock())
    }

    pub fn close(&self) -> Result<()> {
        self.inner.lock().close()
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.lock().state()
    }
}

impl From<Connection> for SharedConnection {
    fn from(conn: Connection) -> Self {
        Self::new(conn)
    }
}
