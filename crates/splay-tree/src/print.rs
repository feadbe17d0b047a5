//! Level-order rendering of a [`SplayTree`].
//!
//! ```text
//! [8 z]
//! [5 x 8] _
//! [3 y 5] _ _ _
//! ```
//!
//! Level `d` lists all `2^d` slots, `_` marking an absent node. The root is
//! printed as `[key value]`, every other node as `[key value parentKey]`.
//! Output ends with the first level whose nodes have no children; an empty
//! tree renders as a single `_`.

use std::fmt;

use crate::tree::SplayTree;

/// Borrowed [`Display`](fmt::Display) view returned by
/// [`SplayTree::level_order`]. Lines are separated by `\n`, without a trailing
/// newline.
pub struct LevelOrder<'a> {
    tree: &'a SplayTree,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(tree: &'a SplayTree) -> Self {
        Self { tree }
    }

    /// Writes the rendering into `out`.
    pub fn write_to<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        let tree = self.tree;
        let Some(root) = tree.root_index() else {
            return out.write_char('_');
        };
        write!(out, "[{} {}]", tree.key(root), tree.value(root))?;

        // (slot position within the level, node index), sorted by position.
        let mut layer: Vec<(u128, u32)> = Vec::new();
        push_children(tree, root, 0, &mut layer);
        let mut width: u128 = 2;

        while !layer.is_empty() {
            out.write_char('\n')?;
            let mut next_layer = Vec::with_capacity(layer.len() * 2);
            let mut line = Line::new(out);
            let mut cursor: u128 = 0;
            for &(pos, idx) in &layer {
                while cursor < pos {
                    line.slot(format_args!("_"))?;
                    cursor += 1;
                }
                let (key, value) = (tree.key(idx), tree.value(idx));
                match tree.node(idx).p {
                    Some(p) => line.slot(format_args!("[{key} {value} {}]", tree.key(p)))?,
                    None => line.slot(format_args!("[{key} {value}]"))?,
                }
                cursor = pos + 1;
                push_children(tree, idx, pos, &mut next_layer);
            }
            while cursor < width {
                line.slot(format_args!("_"))?;
                cursor += 1;
            }
            layer = next_layer;
            width *= 2;
        }
        Ok(())
    }
}

fn push_children(tree: &SplayTree, idx: u32, pos: u128, layer: &mut Vec<(u128, u32)>) {
    let node = tree.node(idx);
    if let Some(l) = node.l {
        layer.push((pos * 2, l));
    }
    if let Some(r) = node.r {
        layer.push((pos * 2 + 1, r));
    }
}

/// Space-separated slot writer for a single level.
struct Line<'w, W: fmt::Write + ?Sized> {
    out: &'w mut W,
    first: bool,
}

impl<'w, W: fmt::Write + ?Sized> Line<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, first: true }
    }

    fn slot(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        if !self.first {
            self.out.write_char(' ')?;
        }
        self.first = false;
        self.out.write_fmt(args)
    }
}

impl fmt::Display for LevelOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
