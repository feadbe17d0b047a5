//! Arena-based splay tree keyed by arbitrary-precision integers.
//!
//! Nodes live in a `Vec` owned by the [`SplayTree`]; every link is an
//! `Option<u32>` index into it. Child links own their slot, the parent link
//! is a back-reference used by the rotations.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`key`] | [`Key`]: `i64` fast path with a `BigInt` fallback |
//! [`types`] | [`Node`] link trait |
//! [`node`] | [`SplayNode`] arena slot |
//! [`splay`] | `rotate_left`, `rotate_right`, bottom-up [`splay()`] |
//! [`util`] | descents, `first` / `last` / `next`, leaf insertion |
//! [`tree`] | [`SplayTree`] add / set / search / min / max / delete |
//! [`print`] | level-order rendering |
//!
//! # Example
//!
//! ```
//! use splay_tree::{Key, SplayTree};
//!
//! let mut tree = SplayTree::new();
//! tree.add(Key::from(5), "x").unwrap();
//! tree.add(Key::from(3), "y").unwrap();
//! tree.add(Key::from(8), "z").unwrap();
//!
//! assert_eq!(tree.search(&Key::from(3)), Some("y"));
//! assert_eq!(tree.root_key(), Some(&Key::from(3)));
//! ```

pub mod error;
pub mod key;
pub mod node;
pub mod print;
pub mod splay;
pub mod tree;
pub mod types;
pub mod util;

pub use error::TreeError;
pub use key::{Key, KeyParseError};
pub use node::SplayNode;
pub use print::LevelOrder;
pub use splay::{rotate_left, rotate_right, splay};
pub use tree::{Iter, SplayTree};
pub use types::Node;
