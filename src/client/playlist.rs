//! Queue and stored playlist commands

use crate::error::Result;
use crate::network::Connection;
use crate::protocol::Command;
use super::{Playlist, Song};

impl Connection {
    // -------------------------------------------------------------------------
    // Current queue
    // -------------------------------------------------------------------------

    /// Add a file or directory (recursively) to the end of the queue
    pub fn add(&mut self, path: &str) -> Result<()> {
        self.execute(Command::new("add").arg(path))
    }

    /// Add a single file, optionally at `pos`, and return its queue id
    pub fn add_id(&mut self, path: &str, pos: Option<u32>) -> Result<i32> {
        let record = self.request(&Command::new("addid").arg(path).arg_opt(pos))?;
        Ok(record.get_int("Id"))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.execute(Command::new("clear"))
    }

    /// The song being played, or `None` when nothing is current
    pub fn current_song(&mut self) -> Result<Option<Song>> {
        let record = self.request(&Command::new("currentsong"))?;
        Ok((!record.is_empty()).then(|| Song::from(&record)))
    }

    pub fn delete(&mut self, pos: u32) -> Result<()> {
        self.execute(Command::new("delete").arg(pos))
    }

    pub fn delete_id(&mut self, id: u32) -> Result<()> {
        self.execute(Command::new("deleteid").arg(id))
    }

    /// Move the song at `from` to position `to`
    pub fn move_pos(&mut self, from: u32, to: u32) -> Result<()> {
        self.execute(Command::new("move").arg(from).arg(to))
    }

    /// Move the song with id `id` to position `to`
    pub fn move_id(&mut self, id: u32, to: u32) -> Result<()> {
        self.execute(Command::new("moveid").arg(id).arg(to))
    }

    /// Metadata of the whole queue, or of the song at `pos`
    pub fn playlist_info(&mut self, pos: Option<u32>) -> Result<Vec<Song>> {
        self.request_entities(Command::new("playlistinfo").arg_opt(pos))
    }

    /// Songs changed since queue version `version`
    pub fn playlist_changes(&mut self, version: u32) -> Result<Vec<Song>> {
        self.request_entities(Command::new("plchanges").arg(version))
    }

    /// Case-insensitive search of the queue
    pub fn playlist_search(&mut self, tag: &str, term: &str) -> Result<Vec<Song>> {
        self.request_entities(Command::new("playlistsearch").arg(tag).arg(term))
    }

    pub fn shuffle(&mut self) -> Result<()> {
        self.execute(Command::new("shuffle"))
    }

    pub fn swap(&mut self, pos1: u32, pos2: u32) -> Result<()> {
        self.execute(Command::new("swap").arg(pos1).arg(pos2))
    }

    pub fn swap_id(&mut self, id1: u32, id2: u32) -> Result<()> {
        self.execute(Command::new("swapid").arg(id1).arg(id2))
    }

    // -------------------------------------------------------------------------
    // Stored playlists
    // -------------------------------------------------------------------------

    /// Append the stored playlist `name` to the queue
    pub fn load(&mut self, name: &str) -> Result<()> {
        self.execute(Command::new("load").arg(name))
    }

    /// Save the queue as `name`
    pub fn save(&mut self, name: &str) -> Result<()> {
        self.execute(Command::new("save").arg(name))
    }

    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        self.execute(Command::new("rename").arg(from).arg(to))
    }

    pub fn playlist_remove(&mut self, name: &str) -> Result<()> {
        self.execute(Command::new("rm").arg(name))
    }

    pub fn list_playlists(&mut self) -> Result<Vec<Playlist>> {
        self.request_entities(Command::new("listplaylists"))
    }

    /// File names in stored playlist `name`
    pub fn list_playlist_files(&mut self, name: &str) -> Result<Vec<String>> {
        self.request_values(Command::new("listplaylist").arg(name))
    }

    /// Songs in stored playlist `name`
    pub fn list_playlist_songs(&mut self, name: &str) -> Result<Vec<Song>> {
        self.request_entities(Command::new("listplaylistinfo").arg(name))
    }

    pub fn playlist_add(&mut self, name: &str, path: &str) -> Result<()> {
        self.execute(Command::new("playlistadd").arg(name).arg(path))
    }

    pub fn playlist_clear(&mut self, name: &str) -> Result<()> {
        self.execute(Command::new("playlistclear").arg(name))
    }

    /// Remove the song at `pos` from stored playlist `name`
    pub fn playlist_delete(&mut self, name: &str, pos: u32) -> Result<()> {
        self.execute(Command::new("playlistdelete").arg(name).arg(pos))
    }

    pub fn playlist_move(&mut self, name: &str, from: u32, to: u32) -> Result<()> {
        self.execute(Command::new("playlistmove").arg(name).arg(from).arg(to))
    }
}
