//! Command definitions
//!
//! A verb plus typed arguments, encoded as a single protocol line.

use std::fmt::Write as _;

use crate::error::{MpdError, Result};

/// A single command argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Free text, quoted on the wire when it needs to be
    Str(String),

    Int(i64),

    UInt(u64),

    /// Encoded as `0` / `1`
    Bool(bool),

    /// Position window `start:end`, or `start:` when open-ended
    Range { start: u32, end: Option<u32> },
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Int(n.into())
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Arg::UInt(n.into())
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Arg::UInt(n)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

/// A command ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: String,
    args: Vec<Arg>,
}

impl Command {
    /// Create a command with no arguments
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append an argument only when present
    pub fn arg_opt(self, arg: Option<impl Into<Arg>>) -> Self {
        match arg {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Encode to a single newline-terminated protocol line
    ///
    /// Fails with `InvalidArgument` when the verb is empty or contains
    /// whitespace, or when a string argument contains a line break.
    pub fn encode(&self) -> Result<String> {
        encode_command(&self.verb, &self.args)
    }
}

/// Encode a verb and its arguments to a newline-terminated line
///
/// Format: `verb[ arg]*\n`
pub fn encode_command(verb: &str, args: &[Arg]) -> Result<String> {
    if verb.is_empty() || verb.chars().any(|c| c.is_whitespace()) {
        return Err(MpdError::InvalidArgument(format!("invalid command verb {:?}", verb)));
    }
    for arg in args {
        if let Arg::Str(s) = arg {
            if s.contains(['\n', '\r']) {
                return Err(MpdError::InvalidArgument(format!(
                    "line break in argument to `{}`",
                    verb
                )));
            }
        }
    }

    let mut line = String::with_capacity(verb.len() + 1 + args.len() * 8);
    line.push_str(verb);

    for arg in args {
        line.push(' ');
        match arg {
            Arg::Str(s) => push_string_arg(&mut line, s),
            Arg::Int(n) => {
                let _ = write!(line, "{}", n);
            }
            Arg::UInt(n) => {
                let _ = write!(line, "{}", n);
            }
            Arg::Bool(b) => line.push(if *b { '1' } else { '0' }),
            Arg::Range { start, end: Some(end) } => {
                let _ = write!(line, "{}:{}", start, end);
            }
            Arg::Range { start, end: None } => {
                let _ = write!(line, "{}:", start);
            }
        }
    }

    line.push('\n');
    Ok(line)
}

/// Whether a string argument must be wrapped in double quotes
fn needs_quoting(s: &str) -> bool {
    s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\')
}

fn push_string_arg(line: &mut String, s: &str) {
    if !needs_quoting(s) {
        line.push_str(s);
        return;
    }

    line.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            line.push('\\');
        }
        line.push(c);
    }
    line.push('"');
}
