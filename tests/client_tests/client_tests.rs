//! Client Tests
//!
//! Tests for entity decoding and the typed command wrappers.

#[path = "../common/mod.rs"]
mod common;

use common::{FakeServer, Reply, GREETING};
use mpdwire::client::{decode_all, Output, PlayState, Playlist, Song, Stats, Status, Subsystem};
use mpdwire::{Connection, MpdError, Record};

fn record(fields: &[(&str, &str)]) -> Record {
    fields.iter().copied().collect()
}

/// Dial a fake server, run `f`, close, and return the commands the server saw
fn session<T>(replies: Vec<Reply>, f: impl FnOnce(&mut Connection) -> T) -> (T, Vec<String>) {
    let server = FakeServer::start(GREETING, replies);
    let mut conn = Connection::dial(&server.config()).unwrap();
    let result = f(&mut conn);
    conn.close().unwrap();
    (result, server.finish())
}

// =============================================================================
// Entity Decoding Tests
// =============================================================================

#[test]
fn test_status_from_record() {
    let status = Status::from(&record(&[
        ("volume", "57"),
        ("repeat", "1"),
        ("random", "0"),
        ("single", "0"),
        ("consume", "1"),
        ("playlist", "12"),
        ("playlistlength", "30"),
        ("xfade", "5"),
        ("state", "play"),
        ("song", "4"),
        ("songid", "44"),
        ("time", "61:200"),
        ("elapsed", "61.250"),
        ("bitrate", "320"),
        ("audio", "44100:24:2"),
        ("mixrampdb", "-17.5"),
    ]));

    assert_eq!(status.state, PlayState::Playing);
    assert_eq!(status.volume, 57);
    assert!(status.repeat);
    assert!(!status.random);
    assert!(status.consume);
    assert_eq!(status.playlist, 12);
    assert_eq!(status.playlist_length, 30);
    assert_eq!(status.crossfade, 5);
    assert_eq!(status.song_id, 44);
    assert_eq!(status.time, vec![61, 200]);
    assert_eq!(status.audio, vec![44100, 24, 2]);
    assert!((status.elapsed - 61.25).abs() < 1e-4);
    assert!((status.mixramp_db + 17.5).abs() < 1e-4);
    assert_eq!(status.next_song, 0);
}

#[test]
fn test_status_from_empty_record() {
    let status = Status::from(&Record::new());
    assert_eq!(status, Status::default());
    assert_eq!(status.state, PlayState::Stopped);
    assert!(status.time.is_empty());
}

#[test]
fn test_play_states() {
    let paused = Status::from(&record(&[("state", "pause")]));
    let stopped = Status::from(&record(&[("state", "stop")]));
    assert_eq!(paused.state, PlayState::Paused);
    assert_eq!(stopped.state, PlayState::Stopped);
}

#[test]
fn test_song_from_record() {
    let song = Song::from(&record(&[
        ("file", "tool/lateralus/parabola.flac"),
        ("Artist", "Tool"),
        ("Album", "Lateralus"),
        ("Title", "Parabola"),
        ("Track", "9"),
        ("Time", "363"),
        ("Pos", "2"),
        ("Id", "17"),
        ("Last-Modified", "1609459200"),
    ]));

    assert_eq!(song.file, "tool/lateralus/parabola.flac");
    assert_eq!(song.artist, "Tool");
    assert_eq!(song.title, "Parabola");
    assert_eq!(song.track, 9);
    assert_eq!(song.time, 363);
    assert_eq!(song.pos, 2);
    assert_eq!(song.id, 17);
    assert_eq!(song.last_modified, 1_609_459_200);
}

#[test]
fn test_song_track_with_total_is_lenient() {
    let song = Song::from(&record(&[("file", "x.mp3"), ("Track", "3/12")]));
    assert_eq!(song.track, 0);
}

#[test]
fn test_stats_output_playlist_from_record() {
    let stats = Stats::from(&record(&[("artists", "10"), ("db_playtime", "9999999999")]));
    assert_eq!(stats.artists, 10);
    assert_eq!(stats.db_playtime, 9_999_999_999);

    let output = Output::from(&record(&[("outputid", "1"), ("outputname", "pulse"), ("outputenabled", "1")]));
    assert_eq!(output, Output { id: 1, name: "pulse".into(), enabled: true });

    let playlist = Playlist::from(&record(&[("playlist", "road"), ("Last-Modified", "2024-01-01T00:00:00Z")]));
    assert_eq!(playlist.name, "road");
    assert_eq!(playlist.last_modified, "2024-01-01T00:00:00Z");
}

#[test]
fn test_decode_all() {
    let records = vec![record(&[("outputid", "0")]), record(&[("outputid", "1")])];
    let outputs: Vec<Output> = decode_all(&records);
    assert_eq!(outputs.iter().map(|o| o.id).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_subsystem_names() {
    assert_eq!(Subsystem::from_name("player"), Subsystem::Player);
    assert_eq!(Subsystem::from_name("stored_playlist"), Subsystem::StoredPlaylist);
    assert_eq!(Subsystem::from_name("neighbor"), Subsystem::Other("neighbor".into()));
    assert_eq!(Subsystem::Mixer.name(), "mixer");
}

// =============================================================================
// Command Wrapper Tests
// =============================================================================

#[test]
fn test_status_command() {
    let (status, sent) = session(vec![Reply::Send("volume: 80\nstate: stop\nOK\n")], |c| c.status());
    let status = status.unwrap();

    assert_eq!(status.volume, 80);
    assert_eq!(status.state, PlayState::Stopped);
    assert_eq!(sent, vec!["status", "close"]);
}

#[test]
fn test_outputs_command() {
    let reply = "outputid: 0\noutputname: alsa\noutputenabled: 1\n\
                 outputid: 1\noutputname: httpd\noutputenabled: 0\nOK\n";
    let (outputs, _) = session(vec![Reply::Send(reply)], |c| c.outputs());
    let outputs = outputs.unwrap();

    assert_eq!(outputs.len(), 2);
    assert!(outputs[0].enabled);
    assert_eq!(outputs[1].name, "httpd");
    assert!(!outputs[1].enabled);
}

#[test]
fn test_enable_output_server_error() {
    let (result, sent) = session(
        vec![Reply::Send("ACK [50@0] {enableoutput} No such audio output\n")],
        |c| c.enable_output(9),
    );

    let err = result.unwrap_err();
    assert_eq!(err.server_error().unwrap().message, "No such audio output");
    assert_eq!(sent, vec!["enableoutput 9", "close"]);
}

#[test]
fn test_toggle_pauses_when_playing() {
    let (result, sent) = session(
        vec![Reply::Send("state: play\nOK\n"), Reply::Send("OK\n")],
        |c| c.toggle(),
    );
    result.unwrap();
    assert_eq!(sent, vec!["status", "pause 1", "close"]);
}

#[test]
fn test_toggle_plays_when_stopped() {
    let (result, sent) = session(
        vec![Reply::Send("state: stop\nOK\n"), Reply::Send("OK\n")],
        |c| c.toggle(),
    );
    result.unwrap();
    assert_eq!(sent, vec!["status", "play", "close"]);
}

#[test]
fn test_set_volume_relative_clamps() {
    let (volume, sent) = session(
        vec![Reply::Send("volume: 95\nOK\n"), Reply::Send("OK\n")],
        |c| c.set_volume(10, true),
    );
    assert_eq!(volume.unwrap(), 100);
    assert_eq!(sent, vec!["status", "setvol 100", "close"]);
}

#[test]
fn test_set_volume_relative_extreme_up() {
    let (volume, sent) = session(
        vec![Reply::Send("volume: 50\nOK\n"), Reply::Send("OK\n")],
        |c| c.set_volume(i32::MAX, true),
    );
    assert_eq!(volume.unwrap(), 100);
    assert_eq!(sent, vec!["status", "setvol 100", "close"]);
}

#[test]
fn test_set_volume_relative_extreme_down() {
    let (volume, sent) = session(
        vec![Reply::Send("volume: 50\nOK\n"), Reply::Send("OK\n")],
        |c| c.set_volume(i32::MIN, true),
    );
    assert_eq!(volume.unwrap(), 0);
    assert_eq!(sent, vec!["status", "setvol 0", "close"]);
}

#[test]
fn test_set_volume_absolute_clamps_low() {
    let (volume, sent) = session(vec![Reply::Send("OK\n")], |c| c.set_volume(-20, false));
    assert_eq!(volume.unwrap(), 0);
    assert_eq!(sent, vec!["setvol 0", "close"]);
}

#[test]
fn test_playback_commands_encoding() {
    let replies = (0..6).map(|_| Reply::Send("OK\n")).collect();
    let (result, sent) = session(replies, |c| -> mpdwire::Result<()> {
        c.play(Some(3))?;
        c.seek(3, 42)?;
        c.random(true)?;
        c.repeat(false)?;
        c.crossfade(4)?;
        c.stop()
    });
    result.unwrap();
    assert_eq!(
        sent,
        vec!["play 3", "seek 3 42", "random 1", "repeat 0", "crossfade 4", "stop", "close"]
    );
}

#[test]
fn test_add_id_returns_id() {
    let (id, sent) = session(vec![Reply::Send("Id: 73\nOK\n")], |c| c.add_id("Some Artist/song.flac", Some(0)));
    assert_eq!(id.unwrap(), 73);
    assert_eq!(sent, vec!["addid \"Some Artist/song.flac\" 0", "close"]);
}

#[test]
fn test_current_song_empty() {
    let (song, _) = session(vec![Reply::Send("OK\n")], |c| c.current_song());
    assert_eq!(song.unwrap(), None);
}

#[test]
fn test_playlist_info_splits_songs() {
    let reply = "file: a.mp3\nTitle: A\nPos: 0\nId: 1\n\
                 file: b.mp3\nTitle: B\nPos: 1\nId: 2\nOK\n";
    let (songs, sent) = session(vec![Reply::Send(reply)], |c| c.playlist_info(None));
    let songs = songs.unwrap();

    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].title, "A");
    assert_eq!(songs[1].id, 2);
    assert_eq!(sent[0], "playlistinfo");
}

#[test]
fn test_list_playlist_files_values() {
    let reply = "file: one.mp3\nfile: two.mp3\nfile: three.mp3\nOK\n";
    let (files, sent) = session(vec![Reply::Send(reply)], |c| c.list_playlist_files("road trip"));

    assert_eq!(files.unwrap(), vec!["one.mp3", "two.mp3", "three.mp3"]);
    assert_eq!(sent[0], "listplaylist \"road trip\"");
}

#[test]
fn test_list_files_skips_directories() {
    let reply = "directory: rock\nfile: rock/a.mp3\nfile: rock/b.mp3\ndirectory: jazz\nfile: jazz/c.mp3\nOK\n";
    let (files, sent) = session(vec![Reply::Send(reply)], |c| c.list_files(None));

    assert_eq!(files.unwrap(), vec!["rock/a.mp3", "rock/b.mp3", "jazz/c.mp3"]);
    assert_eq!(sent[0], "listall");
}

#[test]
fn test_list_requires_term_with_filter() {
    let (result, sent) = session(vec![], |c| c.list("album", Some("artist"), None));

    assert!(matches!(result, Err(MpdError::InvalidArgument(_))));
    assert_eq!(sent, vec!["close"]);
}

#[test]
fn test_list_with_filter() {
    let reply = "Album: Lateralus\nAlbum: Undertow\nOK\n";
    let (albums, sent) = session(vec![Reply::Send(reply)], |c| c.list("album", Some("artist"), Some("Tool")));

    assert_eq!(albums.unwrap(), vec!["Lateralus", "Undertow"]);
    assert_eq!(sent[0], "list album artist Tool");
}

#[test]
fn test_count() {
    let (count, sent) = session(vec![Reply::Send("songs: 12\nplaytime: 3600\nOK\n")], |c| c.count("artist", "Tool"));
    assert_eq!(count.unwrap(), (12, 3600));
    assert_eq!(sent[0], "count artist Tool");
}

#[test]
fn test_commands_list() {
    let reply = "command: add\ncommand: clear\ncommand: status\nOK\n";
    let (commands, _) = session(vec![Reply::Send(reply)], |c| c.commands());
    assert_eq!(commands.unwrap(), vec!["add", "clear", "status"]);
}

#[test]
fn test_idle_multiple_changes() {
    let reply = "changed: player\nchanged: mixer\nOK\n";
    let (changed, sent) = session(vec![Reply::Send(reply)], |c| c.idle());

    assert_eq!(changed.unwrap(), vec![Subsystem::Player, Subsystem::Mixer]);
    assert_eq!(sent[0], "idle");
}

#[test]
fn test_idle_subsystem() {
    let (changed, sent) = session(vec![Reply::Send("changed: mixer\nOK\n")], |c| c.idle_subsystem("mixer"));
    assert!(changed.unwrap());
    assert_eq!(sent[0], "idle mixer");
}

#[test]
fn test_update_returns_job_id() {
    let (job, sent) = session(vec![Reply::Send("updating_db: 5\nOK\n")], |c| c.update(Some("new music")));
    assert_eq!(job.unwrap(), 5);
    assert_eq!(sent[0], "update \"new music\"");
}
