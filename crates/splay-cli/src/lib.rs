//! Line-oriented command protocol for [`splay_tree::SplayTree`].
//!
//! Provides the core logic used by the `splay-tree` binary:
//! - [`Command`]: grammar of a single input line
//! - [`Dispatcher`]: applies commands to one tree and renders a [`Response`]
//! - [`Config`]: command-line configuration
//!
//! Every failure (duplicate key, missing key, empty tree, malformed line) is
//! rendered as the single token `error`; the session carries on with the next
//! line.
//!
//! # Example
//!
//! ```
//! use splay_cli::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new();
//! let mut out = Vec::new();
//! dispatcher
//!     .run("add 5 x\nadd 3 y\nsearch 3\nmin\nbogus\n".as_bytes(), &mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "1 y\n3 y\nerror\n");
//! ```

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;

pub use command::Command;
pub use config::Config;
pub use dispatcher::{Dispatcher, Response};
pub use error::CommandError;
