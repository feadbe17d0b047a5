//! Rotations and the bottom-up splay.
//!
//! All functions take the arena and node indices, and return the (possibly
//! new) root index.

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, is_left_child, set_l, set_p, set_r};

// ── single rotations ──────────────────────────────────────────────────────

/// Left rotation around `node`: its right child takes its place.
///
/// ```text
///   node             r
///  /    \           / \
/// a      r    →  node   c
///       / \      /  \
///      b   c    a    b
/// ```
///
/// A no-op when `node` has no right child.
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let Some(r) = get_r(arena, node) else {
        return root;
    };
    let b = get_l(arena, r);
    set_r(arena, node, b);
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }
    let root = replace_in_parent(arena, root, node, r);
    set_l(arena, r, Some(node));
    set_p(arena, node, Some(r));
    tracing::trace!(pivot = node, promoted = r, "rotate left");
    root
}

/// Right rotation around `node`: its left child takes its place.
///
/// ```text
///       node         l
///      /    \       / \
///     l      c  →  a  node
///    / \              /  \
///   a   b            b    c
/// ```
///
/// A no-op when `node` has no left child.
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let Some(l) = get_l(arena, node) else {
        return root;
    };
    let b = get_r(arena, l);
    set_l(arena, node, b);
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }
    let root = replace_in_parent(arena, root, node, l);
    set_r(arena, l, Some(node));
    set_p(arena, node, Some(l));
    tracing::trace!(pivot = node, promoted = l, "rotate right");
    root
}

/// Wires `child` into the slot `node` occupies under its parent, or makes it
/// the root when `node` had no parent.
fn replace_in_parent<N: Node>(arena: &mut [N], root: Option<u32>, node: u32, child: u32) -> Option<u32> {
    let p = get_p(arena, node);
    set_p(arena, child, p);
    match p {
        None => Some(child),
        Some(p) => {
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, Some(child));
            } else {
                set_r(arena, p, Some(child));
            }
            root
        }
    }
}

// ── splay steps ───────────────────────────────────────────────────────────

/// Parent is the root: one rotation of the parent.
fn zig<N: Node>(arena: &mut [N], root: Option<u32>, node: u32, p: u32) -> Option<u32> {
    if get_l(arena, p) == Some(node) {
        rotate_right(arena, root, p)
    } else {
        rotate_left(arena, root, p)
    }
}

/// Node and parent lean the same way: grandparent first, then parent.
fn zig_zig<N: Node>(arena: &mut [N], root: Option<u32>, p: u32, g: u32, left: bool) -> Option<u32> {
    let rotate = if left { rotate_right::<N> } else { rotate_left::<N> };
    let root = rotate(arena, root, g);
    rotate(arena, root, p)
}

/// Node and parent lean opposite ways: parent first, then the grandparent
/// (which is the node's parent by then).
fn zig_zag<N: Node>(arena: &mut [N], root: Option<u32>, node: u32, p: u32, node_left: bool) -> Option<u32> {
    if node_left {
        let root = rotate_right(arena, root, p);
        match get_p(arena, node) {
            Some(g) => rotate_left(arena, root, g),
            None => root,
        }
    } else {
        let root = rotate_left(arena, root, p);
        match get_p(arena, node) {
            Some(g) => rotate_right(arena, root, g),
            None => root,
        }
    }
}

// ── top-level splay ───────────────────────────────────────────────────────

/// Rotates `node` up until it becomes the root.
pub fn splay<N: Node>(arena: &mut [N], mut root: Option<u32>, node: u32) -> Option<u32> {
    while let Some(p) = get_p(arena, node) {
        let node_left = is_left_child(arena, node);
        root = match get_p(arena, p) {
            None => zig(arena, root, node, p),
            Some(g) => {
                let parent_left = is_left_child(arena, p);
                if node_left == parent_left {
                    zig_zig(arena, root, p, g, node_left)
                } else {
                    zig_zag(arena, root, node, p, node_left)
                }
            }
        };
    }
    root
}
