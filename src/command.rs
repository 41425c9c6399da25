//! Command definitions
//!
//! Line-oriented commands accepted by the shell, and the replies the
//! engine produces for them.
//!
//! ## Line Format
//! ```text
//! SET <key> <value...>
//! DEL <key>
//! GET <key>
//! SIZE
//! DUMP
//! ```
//! Verbs are case-insensitive. The value of `SET` is the rest of the line.

use std::fmt;
use std::str::FromStr;

use crate::error::{LsmError, Result};
use crate::memtable::Operation;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a key to a value
    Set { key: String, value: String },

    /// Tombstone a key
    Delete { key: String },

    /// Get the live value for a key
    Get { key: String },

    /// Count distinct keys recorded
    Size,

    /// List every entry in key order
    Dump,
}

impl Command {
    /// Parse a single line
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        if verb.is_empty() {
            return Err(LsmError::Parse("empty command".to_string()));
        }

        match verb.to_ascii_uppercase().as_str() {
            "SET" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(k, v)| (k, v.trim_start()))
                    .filter(|(_, v)| !v.is_empty())
                    .ok_or_else(|| LsmError::Parse("usage: SET <key> <value>".to_string()))?;
                Ok(Command::Set {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
            "DEL" => Ok(Command::Delete {
                key: single_key(rest, "DEL")?,
            }),
            "GET" => Ok(Command::Get {
                key: single_key(rest, "GET")?,
            }),
            "SIZE" => no_args(rest, Command::Size, "SIZE"),
            "DUMP" => no_args(rest, Command::Dump, "DUMP"),
            other => Err(LsmError::Parse(format!("unknown command: {}", other))),
        }
    }
}

impl FromStr for Command {
    type Err = LsmError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

fn single_key(rest: &str, verb: &str) -> Result<String> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(key), None) => Ok(key.to_string()),
        _ => Err(LsmError::Parse(format!("usage: {} <key>", verb))),
    }
}

fn no_args(rest: &str, command: Command, verb: &str) -> Result<Command> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(LsmError::Parse(format!("{} takes no arguments", verb)))
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Write accepted
    Ok,

    /// Live value for a GET
    Value(String),

    /// GET on an absent or tombstoned key
    NotFound,

    /// Distinct key count
    Size(usize),

    /// Snapshot of all entries, ascending by key
    Entries(Vec<(String, Operation)>),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Value(value) => write!(f, "{}", value),
            Reply::NotFound => write!(f, "(not found)"),
            Reply::Size(n) => write!(f, "{}", n),
            Reply::Entries(entries) => {
                if entries.is_empty() {
                    return write!(f, "(empty)");
                }
                for (i, (key, op)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} => {}", key, op)?;
                }
                Ok(())
            }
        }
    }
}
