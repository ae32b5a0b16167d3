//! Entity decoders
//!
//! Typed views over decoded records. Decoding never fails: absent or
//! malformed fields take their zero value.

use crate::protocol::Record;

/// Playback state reported by `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

impl PlayState {
    fn from_field(value: &str) -> Self {
        match value {
            "play" => PlayState::Playing,
            "pause" => PlayState::Paused,
            _ => PlayState::Stopped,
        }
    }
}

/// A song from the queue, a stored playlist, or the database
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Song {
    pub file: String,
    pub id: i32,
    pub pos: i32,
    pub artist: String,
    pub album: String,
    pub title: String,
    pub track: i32,
    /// Duration in whole seconds
    pub time: i32,
    pub last_modified: i64,
}

impl From<&Record> for Song {
    fn from(r: &Record) -> Self {
        Self {
            file: r.get_str("file").to_string(),
            id: r.get_int("Id"),
            pos: r.get_int("Pos"),
            artist: r.get_str("Artist").to_string(),
            album: r.get_str("Album").to_string(),
            title: r.get_str("Title").to_string(),
            track: r.get_int("Track"),
            time: r.get_int("Time"),
            last_modified: r.get_i64("Last-Modified"),
        }
    }
}

/// Player status
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Status {
    pub state: PlayState,
    pub volume: u8,
    pub playlist: i32,
    pub playlist_length: i32,
    pub song: i32,
    pub song_id: i32,
    pub next_song: i32,
    pub next_song_id: i32,
    pub crossfade: i32,
    pub bitrate: i32,
    pub mixramp_db: f32,
    pub mixramp_delay: f32,
    pub elapsed: f32,
    pub single: bool,
    pub repeat: bool,
    pub random: bool,
    pub consume: bool,
    /// `elapsed:total` in seconds
    pub time: Vec<i32>,
    /// `samplerate:bits:channels`
    pub audio: Vec<i32>,
}

impl From<&Record> for Status {
    fn from(r: &Record) -> Self {
        Self {
            state: PlayState::from_field(r.get_str("state")),
            volume: r.get_u8("volume"),
            playlist: r.get_int("playlist"),
            playlist_length: r.get_int("playlistlength"),
            song: r.get_int("song"),
            song_id: r.get_int("songid"),
            next_song: r.get_int("nextsong"),
            next_song_id: r.get_int("nextsongid"),
            crossfade: r.get_int("xfade"),
            bitrate: r.get_int("bitrate"),
            mixramp_db: r.get_f32("mixrampdb"),
            mixramp_delay: r.get_f32("mixrampdelay"),
            elapsed: r.get_f32("elapsed"),
            single: r.get_bool("single"),
            repeat: r.get_bool("repeat"),
            random: r.get_bool("random"),
            consume: r.get_bool("consume"),
            time: split_ints(r.get_str("time")),
            audio: split_ints(r.get_str("audio")),
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stats {
    pub albums: i32,
    pub artists: i32,
    pub songs: i32,
    pub playtime: i32,
    pub uptime: i32,
    pub db_update: i64,
    pub db_playtime: i64,
}

impl From<&Record> for Stats {
    fn from(r: &Record) -> Self {
        Self {
            albums: r.get_int("albums"),
            artists: r.get_int("artists"),
            songs: r.get_int("songs"),
            playtime: r.get_int("playtime"),
            uptime: r.get_int("uptime"),
            db_update: r.get_i64("db_update"),
            db_playtime: r.get_i64("db_playtime"),
        }
    }
}

/// An audio output device
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub id: i32,
    pub name: String,
    pub enabled: bool,
}

impl From<&Record> for Output {
    fn from(r: &Record) -> Self {
        Self {
            id: r.get_int("outputid"),
            name: r.get_str("outputname").to_string(),
            enabled: r.get_bool("outputenabled"),
        }
    }
}

/// A stored playlist
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Playlist {
    pub name: String,
    pub last_modified: String,
}

impl From<&Record> for Playlist {
    fn from(r: &Record) -> Self {
        Self {
            name: r.get_str("playlist").to_string(),
            last_modified: r.get_str("Last-Modified").to_string(),
        }
    }
}

/// A subsystem reported as changed by `idle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subsystem {
    Database,
    Update,
    StoredPlaylist,
    Playlist,
    Player,
    Mixer,
    Output,
    Sticker,
    Subscription,
    Message,
    /// A subsystem this library does not know by name
    Other(String),
}

impl Subsystem {
    pub fn from_name(name: &str) -> Self {
        match name {
            "database" => Subsystem::Database,
            "update" => Subsystem::Update,
            "stored_playlist" => Subsystem::StoredPlaylist,
            "playlist" => Subsystem::Playlist,
            "player" => Subsystem::Player,
            "mixer" => Subsystem::Mixer,
            "output" => Subsystem::Output,
            "sticker" => Subsystem::Sticker,
            "subscription" => Subsystem::Subscription,
            "message" => Subsystem::Message,
            other => Subsystem::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Subsystem::Database => "database",
            Subsystem::Update => "update",
            Subsystem::StoredPlaylist => "stored_playlist",
            Subsystem::Playlist => "playlist",
            Subsystem::Player => "player",
            Subsystem::Mixer => "mixer",
            Subsystem::Output => "output",
            Subsystem::Sticker => "sticker",
            Subsystem::Subscription => "subscription",
            Subsystem::Message => "message",
            Subsystem::Other(name) => name,
        }
    }
}

/// Decode every record with `T::from`
pub fn decode_all<'a, T: From<&'a Record>>(records: &'a [Record]) -> Vec<T> {
    records.iter().map(T::from).collect()
}

/// Split `a:b:c` into integers, `0` for any unparsable part
fn split_ints(value: &str) -> Vec<i32> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(':')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}
