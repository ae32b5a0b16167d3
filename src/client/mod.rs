//! Client Module
//!
//! Typed command wrappers and entity decoders built on
//! [`Connection::request`] and [`Connection::request_list`].
//!
//! Each wrapper formats one command, hands it to the connection, and maps the
//! decoded records onto an entity type.

mod database;
mod entities;
mod info;
mod playback;
mod playlist;

pub use entities::{decode_all, Output, PlayState, Playlist, Song, Stats, Status, Subsystem};

use crate::error::Result;
use crate::network::Connection;
use crate::protocol::{Command, Record};

impl Connection {
    /// Run a command whose response carries nothing of interest
    fn execute(&mut self, command: Command) -> Result<()> {
        self.request(&command).map(|_| ())
    }

    /// Run a list command and decode every record as `T`
    fn request_entities<T: for<'a> From<&'a Record>>(&mut self, command: Command) -> Result<Vec<T>> {
        let records = self.request_list(&command)?;
        Ok(records.iter().map(T::from).collect())
    }

    /// Run a list command and keep every value, in order
    fn request_values(&mut self, command: Command) -> Result<Vec<String>> {
        let records = self.request_list(&command)?;
        Ok(records
            .iter()
            .flat_map(|r| r.values().map(str::to_string))
            .collect())
    }
}
