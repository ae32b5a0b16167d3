//! Server information, outputs, and idle notifications

use crate::error::Result;
use crate::network::Connection;
use crate::protocol::Command;
use super::{Output, Stats, Subsystem};

impl Connection {
    // -------------------------------------------------------------------------
    // Information
    // -------------------------------------------------------------------------

    pub fn stats(&mut self) -> Result<Stats> {
        let record = self.request(&Command::new("stats"))?;
        Ok(Stats::from(&record))
    }

    /// Commands the current user may run
    pub fn commands(&mut self) -> Result<Vec<String>> {
        self.request_values(Command::new("commands"))
    }

    /// Commands the current user may not run
    pub fn not_commands(&mut self) -> Result<Vec<String>> {
        self.request_values(Command::new("notcommands"))
    }

    /// Song metadata fields the server knows about
    pub fn tag_types(&mut self) -> Result<Vec<String>> {
        self.request_values(Command::new("tagtypes"))
    }

    pub fn url_handlers(&mut self) -> Result<Vec<String>> {
        self.request_values(Command::new("urlhandlers"))
    }

    pub fn ping(&mut self) -> Result<()> {
        self.execute(Command::new("ping"))
    }

    // -------------------------------------------------------------------------
    // Outputs and administration
    // -------------------------------------------------------------------------

    pub fn outputs(&mut self) -> Result<Vec<Output>> {
        self.request_entities(Command::new("outputs"))
    }

    pub fn enable_output(&mut self, id: u32) -> Result<()> {
        self.execute(Command::new("enableoutput").arg(id))
    }

    pub fn disable_output(&mut self, id: u32) -> Result<()> {
        self.execute(Command::new("disableoutput").arg(id))
    }

    /// Shut the server down
    pub fn kill(&mut self) -> Result<()> {
        self.execute(Command::new("kill"))
    }

    // -------------------------------------------------------------------------
    // Idle
    // -------------------------------------------------------------------------

    /// Block until something changes; returns every changed subsystem
    pub fn idle(&mut self) -> Result<Vec<Subsystem>> {
        let records = self.request_list(&Command::new("idle"))?;
        Ok(records
            .iter()
            .filter_map(|r| r.get("changed"))
            .map(Subsystem::from_name)
            .collect())
    }

    /// Block until `subsystem` changes; `false` if the wait ended without a change
    pub fn idle_subsystem(&mut self, subsystem: &str) -> Result<bool> {
        let record = self.request(&Command::new("idle").arg(subsystem))?;
        Ok(record.contains_key("changed"))
    }
}
