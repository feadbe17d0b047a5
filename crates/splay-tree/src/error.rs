use thiserror::Error;

use crate::key::Key;

/// Rejected tree operations.
///
/// The tree may still have been re-splayed around the probed node when one of
/// these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("key {0} already exists")]
    DuplicateKey(Key),
    #[error("key {0} not found")]
    KeyNotFound(Key),
    #[error("tree is empty")]
    EmptyTree,
}
