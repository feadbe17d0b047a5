use std::fmt;
use std::io::{self, BufRead, Write};

use splay_tree::{Key, SplayTree};

use crate::command::Command;
use crate::error::CommandError;

/// Outcome of one command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Successful `add` / `set` / `delete`; nothing is printed.
    Silent,
    /// `search` hit: `1 <value>`.
    Found(String),
    /// `search` miss: `0`.
    NotFound,
    /// `min` / `max`: `<key> <value>`.
    Entry(Key, String),
    /// `print`: the level-order rendering.
    Levels(String),
    /// Any rejected or malformed command.
    Error,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Silent => Ok(()),
            Response::Found(value) => write!(f, "1 {value}"),
            Response::NotFound => f.write_str("0"),
            Response::Entry(key, value) => write!(f, "{key} {value}"),
            Response::Levels(levels) => f.write_str(levels),
            Response::Error => f.write_str("error"),
        }
    }
}

/// Reads commands one line at a time and applies them to a single tree.
#[derive(Debug, Default)]
pub struct Dispatcher {
    tree: SplayTree,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &SplayTree {
        &self.tree
    }

    /// Runs one line and maps any failure to [`Response::Error`].
    pub fn execute(&mut self, line: &str) -> Response {
        match Command::parse(line).and_then(|command| self.apply(command)) {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(kind = err.kind(), error = %err, "command failed");
                Response::Error
            }
        }
    }

    /// Applies an already parsed command.
    pub fn apply(&mut self, command: Command) -> Result<Response, CommandError> {
        let tree = &mut self.tree;
        let response = match command {
            Command::Add(key, value) => {
                tree.add(key, value)?;
                Response::Silent
            }
            Command::Set(key, value) => {
                tree.set(key, value)?;
                Response::Silent
            }
            Command::Search(key) => match tree.search(&key) {
                Some(value) => Response::Found(value.to_string()),
                None => Response::NotFound,
            },
            Command::Min => {
                let (key, value) = tree.min()?;
                Response::Entry(key.clone(), value.to_string())
            }
            Command::Max => {
                let (key, value) = tree.max()?;
                Response::Entry(key.clone(), value.to_string())
            }
            Command::Delete(key) => {
                tree.delete(&key)?;
                Response::Silent
            }
            Command::Print => Response::Levels(tree.level_order().to_string()),
        };
        Ok(response)
    }

    /// Streams a whole session from `input` to `output`.
    ///
    /// Lines end with `\n`, `\r\n` or a lone `\r`. A line that is not valid
    /// UTF-8 is answered with `error`. Returns the number of lines processed.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<usize> {
        let mut buf = Vec::new();
        let mut processed = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            for line in split_lines(&buf) {
                let response = match std::str::from_utf8(line) {
                    Ok(line) => self.execute(line),
                    Err(err) => {
                        tracing::debug!(%err, "line is not valid UTF-8");
                        Response::Error
                    }
                };
                if response != Response::Silent {
                    writeln!(output, "{response}")?;
                }
                processed += 1;
            }
        }
        output.flush()?;
        Ok(processed)
    }
}

/// Splits one `\n`-terminated chunk into lines, treating a `\r` that is not
/// part of `\r\n` as a terminator of its own.
fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}
