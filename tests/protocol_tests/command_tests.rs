//! Command Tests
//!
//! Tests for encoding commands into protocol lines.

use mpdwire::protocol::{encode_command, Arg, Command};
use mpdwire::MpdError;

// =============================================================================
// Basic Encoding Tests
// =============================================================================

#[test]
fn test_encode_bare_verb() {
    assert_eq!(Command::new("status").encode().unwrap(), "status\n");
}

#[test]
fn test_encode_integer_args() {
    let cmd = Command::new("seek").arg(3u32).arg(120u32);
    assert_eq!(cmd.encode().unwrap(), "seek 3 120\n");
}

#[test]
fn test_encode_negative_integer() {
    let cmd = Command::new("volume").arg(-5);
    assert_eq!(cmd.encode().unwrap(), "volume -5\n");
}

#[test]
fn test_encode_bool_args() {
    assert_eq!(Command::new("random").arg(true).encode().unwrap(), "random 1\n");
    assert_eq!(Command::new("repeat").arg(false).encode().unwrap(), "repeat 0\n");
}

#[test]
fn test_encode_range_args() {
    let closed = Command::new("playlistinfo").arg(Arg::Range { start: 2, end: Some(5) });
    let open = Command::new("playlistinfo").arg(Arg::Range { start: 7, end: None });

    assert_eq!(closed.encode().unwrap(), "playlistinfo 2:5\n");
    assert_eq!(open.encode().unwrap(), "playlistinfo 7:\n");
}

#[test]
fn test_encode_optional_arg() {
    assert_eq!(Command::new("play").arg_opt(None::<u32>).encode().unwrap(), "play\n");
    assert_eq!(Command::new("play").arg_opt(Some(4u32)).encode().unwrap(), "play 4\n");
}

// =============================================================================
// String Quoting Tests
// =============================================================================

#[test]
fn test_encode_plain_string_unquoted() {
    let cmd = Command::new("add").arg("music/track01.flac");
    assert_eq!(cmd.encode().unwrap(), "add music/track01.flac\n");
}

#[test]
fn test_encode_string_with_whitespace_quoted() {
    let cmd = Command::new("find").arg("artist").arg("Pink Floyd");
    assert_eq!(cmd.encode().unwrap(), "find artist \"Pink Floyd\"\n");
}

#[test]
fn test_encode_string_with_tab_quoted() {
    let cmd = Command::new("load").arg("a\tb");
    assert_eq!(cmd.encode().unwrap(), "load \"a\tb\"\n");
}

#[test]
fn test_encode_empty_string_quoted() {
    let cmd = Command::new("update").arg("");
    assert_eq!(cmd.encode().unwrap(), "update \"\"\n");
}

#[test]
fn test_encode_embedded_quote_escaped() {
    let cmd = Command::new("search").arg("title").arg("say \"hi\"");
    assert_eq!(cmd.encode().unwrap(), "search title \"say \\\"hi\\\"\"\n");
}

#[test]
fn test_encode_backslash_escaped() {
    let cmd = Command::new("add").arg("a\\b");
    assert_eq!(cmd.encode().unwrap(), "add \"a\\\\b\"\n");
}

// =============================================================================
// Free Function Tests
// =============================================================================

#[test]
fn test_encode_command_free_function() {
    let line = encode_command("password", &[Arg::from("secret")]).unwrap();
    assert_eq!(line, "password secret\n");
}

#[test]
fn test_encode_single_trailing_newline() {
    let line = Command::new("list").arg("album").arg("artist").arg("Tool").encode().unwrap();
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);
}

#[test]
fn test_command_accessors() {
    let cmd = Command::new("playid").arg(12u32);
    assert_eq!(cmd.verb(), "playid");
    assert_eq!(cmd.args(), &[Arg::UInt(12)]);
}

// =============================================================================
// Line Break Rejection Tests
// =============================================================================

#[test]
fn test_encode_rejects_newline_in_argument() {
    let cmd = Command::new("find").arg("title").arg("a\nkill");
    assert!(matches!(cmd.encode(), Err(MpdError::InvalidArgument(_))));
}

#[test]
fn test_encode_rejects_carriage_return_in_argument() {
    let cmd = Command::new("add").arg("x\ry");
    assert!(matches!(cmd.encode(), Err(MpdError::InvalidArgument(_))));
}

#[test]
fn test_encode_rejects_bad_verb() {
    assert!(matches!(
        encode_command("status\nkill", &[]),
        Err(MpdError::InvalidArgument(_))
    ));
    assert!(matches!(encode_command("", &[]), Err(MpdError::InvalidArgument(_))));
}

#[test]
fn test_encode_tab_still_allowed() {
    let line = Command::new("load").arg("a\tb").encode().unwrap();
    assert_eq!(line.matches('\n').count(), 1);
}
