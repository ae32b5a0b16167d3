//! Music database queries

use crate::error::{MpdError, Result};
use crate::network::Connection;
use crate::protocol::Command;
use super::Song;

impl Connection {
    /// Songs whose `tag` exactly matches `term` (case-sensitive)
    pub fn find(&mut self, tag: &str, term: &str) -> Result<Vec<Song>> {
        self.request_entities(Command::new("find").arg(tag).arg(term))
    }

    /// Songs whose `tag` contains `term` (case-insensitive)
    pub fn search(&mut self, tag: &str, term: &str) -> Result<Vec<Song>> {
        self.request_entities(Command::new("search").arg(tag).arg(term))
    }

    /// All values of `tag`, optionally restricted to songs where
    /// `filter_tag` equals `term`
    pub fn list(&mut self, tag: &str, filter_tag: Option<&str>, term: Option<&str>) -> Result<Vec<String>> {
        let mut command = Command::new("list").arg(tag);
        if let Some(filter_tag) = filter_tag {
            let term = term.filter(|t| !t.is_empty()).ok_or_else(|| {
                MpdError::InvalidArgument(format!("a term is required when filtering on {:?}", filter_tag))
            })?;
            command = command.arg(filter_tag).arg(term);
        }
        self.request_values(command)
    }

    /// Every file below `path` (or the music root), recursively
    pub fn list_files(&mut self, path: Option<&str>) -> Result<Vec<String>> {
        let records = self.request_list(&Command::new("listall").arg_opt(path))?;
        Ok(records
            .iter()
            .filter_map(|r| r.get("file"))
            .map(str::to_string)
            .collect())
    }

    /// Metadata of every file below `path` (or the music root), recursively
    pub fn list_info(&mut self, path: Option<&str>) -> Result<Vec<Song>> {
        let records = self.request_list(&Command::new("listallinfo").arg_opt(path))?;
        Ok(records
            .iter()
            .filter(|r| r.contains_key("file"))
            .map(Song::from)
            .collect())
    }

    /// Entries directly inside `path` (or the music root)
    pub fn ls(&mut self, path: Option<&str>) -> Result<Vec<String>> {
        self.request_values(Command::new("lsinfo").arg_opt(path))
    }

    /// Number of songs matching `tag` = `term` and their total play time
    pub fn count(&mut self, tag: &str, term: &str) -> Result<(i32, i32)> {
        let record = self.request(&Command::new("count").arg(tag).arg(term))?;
        Ok((record.get_int("songs"), record.get_int("playtime")))
    }

    /// Rescan the music directory, or just `path`; returns the update job id
    pub fn update(&mut self, path: Option<&str>) -> Result<i32> {
        let record = self.request(&Command::new("update").arg_opt(path))?;
        Ok(record.get_int("updating_db"))
    }
}
