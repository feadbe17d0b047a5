//! Arena tree helpers: link accessors, descents and in-order walks.
//!
//! Key-based helpers take a `key_of` accessor closure so they stay agnostic of
//! the concrete node layout.

use std::cmp::Ordering;

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// `true` if `idx` hangs off its parent's left link.
pub fn is_left_child<N: Node>(arena: &[N], idx: u32) -> bool {
    get_p(arena, idx).is_some_and(|p| get_l(arena, p) == Some(idx))
}

/// `true` if `idx` hangs off its parent's right link.
pub fn is_right_child<N: Node>(arena: &[N], idx: u32) -> bool {
    get_p(arena, idx).is_some_and(|p| get_r(arena, p) == Some(idx))
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, idx));
        stack.extend(get_r(arena, idx));
    }
    count
}

/// Descends from `root` towards `key`.
///
/// Returns the exact match (if any) together with the last node visited on
/// the way down. The latter is `None` only for an empty tree.
pub fn descend<N, K, F>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
) -> (Option<u32>, Option<u32>)
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    let mut curr = root;
    let mut last_visited = None;
    while let Some(i) = curr {
        last_visited = Some(i);
        curr = match key.cmp(key_of(&arena[i as usize])) {
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
            Ordering::Equal => return (Some(i), last_visited),
        };
    }
    (None, last_visited)
}

/// Finds a node by key.
pub fn find<N, K, F>(arena: &[N], root: Option<u32>, key: &K, key_of: F) -> Option<u32>
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    descend(arena, root, key, key_of).0
}

/// Last node visited while looking for `key`, whether or not it matched.
pub fn find_last_visited<N, K, F>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
) -> Option<u32>
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    descend(arena, root, key, key_of).1
}

/// Hangs the detached `node` off the leaf position its key belongs to.
///
/// The caller guarantees the key is not already present. Returns the new
/// root, which only changes when the tree was empty.
pub fn insert<N, K, F>(arena: &mut [N], root: Option<u32>, node: u32, key_of: F) -> Option<u32>
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    let Some(mut curr) = root else {
        return Some(node);
    };
    loop {
        let go_left = key_of(&arena[node as usize]) < key_of(&arena[curr as usize]);
        let child = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match child {
            Some(c) => curr = c,
            None => {
                if go_left {
                    set_l(arena, curr, Some(node));
                } else {
                    set_r(arena, curr, Some(node));
                }
                set_p(arena, node, Some(curr));
                return root;
            }
        }
    }
}
