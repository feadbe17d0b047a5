//! Command grammar.
//!
//! One command per line:
//!
//! | Command | Arguments |
//! |---------|-----------|
//! | `add K V` | key, then the rest of the line as value |
//! | `set K V` | key, then the rest of the line as value |
//! | `search K` | key |
//! | `min` / `max` | — |
//! | `delete K` | key |
//! | `print` | — |
//!
//! Keys are an optional `-` followed by ASCII digits. Values hold at least one
//! character. Whitespace follows the ECMAScript `\s` class, which adds U+FEFF
//! to Unicode `White_Space` and leaves out U+0085.

use std::sync::LazyLock;

use regex::Regex;
use splay_tree::Key;

use crate::error::CommandError;

const WS: &str = r"[[\s\x{FEFF}]&&[^\x{85}]]";
const KEY: &str = r"(-?[0-9]+)";
// Anything but a line terminator.
const VALUE: &str = r"([^\n\r\x{2028}\x{2029}]+)";

static ADD: LazyLock<Regex> = LazyLock::new(|| compile(&format!("^add{WS}+{KEY}{WS}+{VALUE}$")));
static SET: LazyLock<Regex> = LazyLock::new(|| compile(&format!("^set{WS}+{KEY}{WS}+{VALUE}$")));
static SEARCH: LazyLock<Regex> = LazyLock::new(|| compile(&format!("^search{WS}+{KEY}$")));
static DELETE: LazyLock<Regex> = LazyLock::new(|| compile(&format!("^delete{WS}+{KEY}$")));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("command pattern is a valid regex")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(Key, String),
    Set(Key, String),
    Search(Key),
    Min,
    Max,
    Delete(Key),
    Print,
}

impl Command {
    /// Parses a single line, without its terminator.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        match line {
            "min" => return Ok(Command::Min),
            "max" => return Ok(Command::Max),
            "print" => return Ok(Command::Print),
            _ => {}
        }
        if let Some(caps) = ADD.captures(line) {
            return Ok(Command::Add(caps[1].parse()?, caps[2].to_string()));
        }
        if let Some(caps) = SET.captures(line) {
            return Ok(Command::Set(caps[1].parse()?, caps[2].to_string()));
        }
        if let Some(caps) = SEARCH.captures(line) {
            return Ok(Command::Search(caps[1].parse()?));
        }
        if let Some(caps) = DELETE.captures(line) {
            return Ok(Command::Delete(caps[1].parse()?));
        }
        Err(CommandError::Malformed(line.to_string()))
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(n: i64) -> Key {
        Key::from(n)
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(Command::parse("add 5 x"), Ok(Command::Add(k(5), "x".into())));
        assert_eq!(Command::parse("set -3 y"), Ok(Command::Set(k(-3), "y".into())));
        assert_eq!(Command::parse("search 12"), Ok(Command::Search(k(12))));
        assert_eq!(Command::parse("delete -1"), Ok(Command::Delete(k(-1))));
        assert_eq!(Command::parse("min"), Ok(Command::Min));
        assert_eq!(Command::parse("max"), Ok(Command::Max));
        assert_eq!(Command::parse("print"), Ok(Command::Print));
    }

    #[test]
    fn value_is_rest_of_line() {
        assert_eq!(
            Command::parse("add 1 hello  world "),
            Ok(Command::Add(k(1), "hello  world ".into()))
        );
        assert_eq!(Command::parse("set\t7\tv"), Ok(Command::Set(k(7), "v".into())));
    }

    #[test]
    fn value_takes_back_trailing_whitespace() {
        assert_eq!(Command::parse("add 5   "), Ok(Command::Add(k(5), "  ".into())));
        assert_eq!(Command::parse("set 5  x"), Ok(Command::Set(k(5), "x".into())));
    }

    #[test]
    fn ecmascript_whitespace() {
        assert_eq!(
            Command::parse("add 1 \u{FEFF}x"),
            Ok(Command::Add(k(1), "x".into()))
        );
        assert_eq!(
            Command::parse("search\u{00A0}4"),
            Ok(Command::Search(k(4)))
        );
        assert!(matches!(
            Command::parse("search\u{85}4"),
            Err(CommandError::Malformed(_))
        ));
        assert!(matches!(
            Command::parse("add 1 x\u{2028}y"),
            Err(CommandError::Malformed(_))
        ));
    }

    #[test]
    fn big_keys() {
        let key = match Command::parse("search 100000000000000000000") {
            Ok(Command::Search(key)) => key,
            other => panic!("expected search, got {other:?}"),
        };
        assert!(key.is_big());
        assert_eq!(key.to_string(), "100000000000000000000");
    }

    #[test]
    fn rejects_malformed() {
        for line in [
            "",
            "add",
            "add 5",
            "add 1 ",
            "set 5 ",
            "add x 5",
            "add 5x",
            "search",
            "search 5 6",
            "search 1.5",
            "delete",
            "delete +5",
            "min 1",
            " min",
            "print ",
            "PRINT",
            "pushb 1",
        ] {
            assert!(
                matches!(Command::parse(line), Err(CommandError::Malformed(_))),
                "{line:?}"
            );
        }
    }
}
