use splay_tree::{KeyParseError, TreeError};
use thiserror::Error;

/// Why a single command line produced `error`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("malformed command: {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Key(#[from] KeyParseError),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl CommandError {
    /// Short label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Malformed(_) | CommandError::Key(_) => "malformed_command",
            CommandError::Tree(TreeError::DuplicateKey(_)) => "duplicate_key",
            CommandError::Tree(TreeError::KeyNotFound(_)) => "key_not_found",
            CommandError::Tree(TreeError::EmptyTree) => "empty_tree",
        }
    }
}
