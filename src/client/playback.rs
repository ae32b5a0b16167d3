//! Playback control

use crate::error::Result;
use crate::network::Connection;
use crate::protocol::Command;
use super::{PlayState, Status};

impl Connection {
    /// Pause when playing, otherwise start playback
    pub fn toggle(&mut self) -> Result<()> {
        let status = self.status()?;
        if status.state == PlayState::Playing {
            self.pause(true)
        } else {
            self.play(None)
        }
    }

    /// Set crossfade between songs, in seconds
    pub fn crossfade(&mut self, seconds: u32) -> Result<()> {
        self.execute(Command::new("crossfade").arg(seconds))
    }

    pub fn pause(&mut self, pause: bool) -> Result<()> {
        self.execute(Command::new("pause").arg(pause))
    }

    /// Play the song at queue position `pos`, or resume when `None`
    pub fn play(&mut self, pos: Option<u32>) -> Result<()> {
        self.execute(Command::new("play").arg_opt(pos))
    }

    pub fn play_id(&mut self, id: u32) -> Result<()> {
        self.execute(Command::new("playid").arg(id))
    }

    pub fn previous(&mut self) -> Result<()> {
        self.execute(Command::new("previous"))
    }

    pub fn next(&mut self) -> Result<()> {
        self.execute(Command::new("next"))
    }

    pub fn random(&mut self, enabled: bool) -> Result<()> {
        self.execute(Command::new("random").arg(enabled))
    }

    pub fn repeat(&mut self, enabled: bool) -> Result<()> {
        self.execute(Command::new("repeat").arg(enabled))
    }

    /// Jump to `seconds` into the song at queue position `pos`
    pub fn seek(&mut self, pos: u32, seconds: u32) -> Result<()> {
        self.execute(Command::new("seek").arg(pos).arg(seconds))
    }

    /// Jump to `seconds` into the song with id `id`
    pub fn seek_id(&mut self, id: u32, seconds: u32) -> Result<()> {
        self.execute(Command::new("seekid").arg(id).arg(seconds))
    }

    /// Set the volume, either absolute or relative to the current one
    ///
    /// The result is clamped to `0..=100`. Returns the volume that was sent.
    pub fn set_volume(&mut self, volume: i32, relative: bool) -> Result<u8> {
        let target = if relative {
            i32::from(self.status()?.volume).saturating_add(volume)
        } else {
            volume
        };
        let target = target.clamp(0, 100) as u8;

        self.execute(Command::new("setvol").arg(u32::from(target)))?;
        Ok(target)
    }

    pub fn stop(&mut self) -> Result<()> {
        self.execute(Command::new("stop"))
    }

    /// Current player status
    pub fn status(&mut self) -> Result<Status> {
        let record = self.request(&Command::new("status"))?;
        Ok(Status::from(&record))
    }
}
