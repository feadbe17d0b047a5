use crate::error::TreeError;
use crate::key::Key;
use crate::print::LevelOrder;
use crate::splay::splay;
use crate::node::SplayNode;
use crate::util::{self, descend, find, find_last_visited, first, insert, last, next, size};

/// Self-adjusting binary search tree from [`Key`] to opaque text values.
///
/// Every access, including rejected ones, splays the touched node to the
/// root: the found node on a hit, the last node visited on a miss.
#[derive(Clone, Debug, Default)]
pub struct SplayTree {
    root: Option<u32>,
    len: usize,
    arena: Vec<SplayNode>,
    free: Vec<u32>,
}

impl SplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn root_key(&self) -> Option<&Key> {
        self.root.map(|idx| self.key(idx))
    }

    pub fn node(&self, idx: u32) -> &SplayNode {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &Key {
        &self.arena[idx as usize].k
    }

    pub fn value(&self, idx: u32) -> &str {
        self.arena[idx as usize].v.as_deref().unwrap_or_default()
    }

    pub fn is_left_child(&self, idx: u32) -> bool {
        util::is_left_child(&self.arena, idx)
    }

    pub fn is_right_child(&self, idx: u32) -> bool {
        util::is_right_child(&self.arena, idx)
    }

    fn alloc(&mut self, key: Key, value: String) -> u32 {
        let node = SplayNode::new(key, value);
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = node;
                idx
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn splay(&mut self, idx: u32) {
        self.root = splay(&mut self.arena, self.root, idx);
    }

    /// Exact match for `key`. Does not splay.
    pub fn find(&self, key: &Key) -> Option<u32> {
        find(&self.arena, self.root, key, |n| &n.k)
    }

    /// Last node visited while descending towards `key`, matched or not.
    /// Does not splay.
    pub fn find_last_visited(&self, key: &Key) -> Option<u32> {
        find_last_visited(&self.arena, self.root, key, |n| &n.k)
    }

    /// Non-splaying membership test.
    pub fn contains(&self, key: &Key) -> bool {
        self.find(key).is_some()
    }

    /// Non-splaying lookup.
    pub fn get(&self, key: &Key) -> Option<&str> {
        self.find(key).map(|idx| self.value(idx))
    }

    /// Inserts a new key.
    ///
    /// An existing key is splayed to the root and reported as
    /// [`TreeError::DuplicateKey`]; its value is left untouched.
    pub fn add(&mut self, key: Key, value: impl Into<String>) -> Result<(), TreeError> {
        if let Some(idx) = self.find(&key) {
            self.splay(idx);
            tracing::debug!(%key, "add rejected: duplicate key");
            return Err(TreeError::DuplicateKey(key));
        }
        tracing::debug!(%key, "insert");
        let idx = self.alloc(key, value.into());
        self.root = insert(&mut self.arena, self.root, idx, |n| &n.k);
        self.splay(idx);
        self.len += 1;
        Ok(())
    }

    /// Overwrites the value of an existing key.
    ///
    /// A missing key splays the nearest visited node and is reported as
    /// [`TreeError::KeyNotFound`]; no node is created.
    pub fn set(&mut self, key: Key, value: impl Into<String>) -> Result<(), TreeError> {
        match descend(&self.arena, self.root, &key, |n| &n.k) {
            (Some(idx), _) => {
                self.arena[idx as usize].v = Some(value.into());
                self.splay(idx);
                Ok(())
            }
            (None, last_visited) => {
                if let Some(idx) = last_visited {
                    self.splay(idx);
                }
                tracing::debug!(%key, "set rejected: key not found");
                Err(TreeError::KeyNotFound(key))
            }
        }
    }

    /// Looks up `key`, splaying the found node or the nearest visited one.
    pub fn search(&mut self, key: &Key) -> Option<&str> {
        let (found, last_visited) = descend(&self.arena, self.root, key, |n| &n.k);
        if let Some(idx) = found.or(last_visited) {
            self.splay(idx);
        }
        found.map(|idx| self.value(idx))
    }

    /// Splays the smallest key to the root and returns it.
    pub fn min(&mut self) -> Result<(&Key, &str), TreeError> {
        let idx = first(&self.arena, self.root).ok_or(TreeError::EmptyTree)?;
        self.splay(idx);
        Ok((self.key(idx), self.value(idx)))
    }

    /// Splays the largest key to the root and returns it.
    pub fn max(&mut self) -> Result<(&Key, &str), TreeError> {
        let idx = last(&self.arena, self.root).ok_or(TreeError::EmptyTree)?;
        self.splay(idx);
        Ok((self.key(idx), self.value(idx)))
    }

    /// Removes `key` and returns its value.
    ///
    /// The node is splayed to the root first. With two children the maximum
    /// of the left subtree is splayed to the top of that subtree and adopts
    /// the right subtree; with one child that child becomes the root.
    pub fn delete(&mut self, key: &Key) -> Result<String, TreeError> {
        let idx = match descend(&self.arena, self.root, key, |n| &n.k) {
            (Some(idx), _) => idx,
            (None, last_visited) => {
                if let Some(idx) = last_visited {
                    self.splay(idx);
                }
                tracing::debug!(%key, "delete rejected: key not found");
                return Err(TreeError::KeyNotFound(key.clone()));
            }
        };
        self.splay(idx);

        let node = &self.arena[idx as usize];
        self.root = match (node.l, node.r) {
            (Some(left), Some(right)) => {
                self.arena[left as usize].p = None;
                self.arena[right as usize].p = None;
                let max_left = last(&self.arena, Some(left)).unwrap_or(left);
                splay(&mut self.arena, Some(left), max_left);
                self.arena[max_left as usize].r = Some(right);
                self.arena[right as usize].p = Some(max_left);
                Some(max_left)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.arena[child as usize].p = None;
                Some(child)
            }
            (None, None) => None,
        };

        let node = &mut self.arena[idx as usize];
        node.clear();
        let value = node.v.take().unwrap_or_default();
        self.free.push(idx);
        self.len -= 1;
        tracing::debug!(%key, "delete");
        Ok(value)
    }

    /// In-order iterator over `(key, value)` pairs. Does not splay.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            curr: first(&self.arena, self.root),
        }
    }

    /// Breadth-first rendering of the tree shape, one line per level.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self)
    }

    /// Writes [`level_order`](Self::level_order) into any text sink.
    pub fn write_levels<W: std::fmt::Write>(&self, out: &mut W) -> std::fmt::Result {
        self.level_order().write_to(out)
    }

    /// Checks ordering, parent/child link symmetry and the node count.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(format!("empty tree reports {} nodes", self.len))
            };
        };
        if self.arena[root as usize].p.is_some() {
            return Err(format!("root {root} has a parent"));
        }

        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx as usize];
            if node.v.is_none() {
                return Err(format!("node {idx} was released but is still linked"));
            }
            for child in [node.l, node.r].into_iter().flatten() {
                let p = self.arena[child as usize].p;
                if p != Some(idx) {
                    return Err(format!("node {child} has parent {p:?}, expected {idx}"));
                }
                stack.push(child);
            }
        }
        let reachable = size(&self.arena, self.root);
        if reachable != self.len {
            return Err(format!("{reachable} reachable nodes, expected {}", self.len));
        }

        let mut prev: Option<&Key> = None;
        for (key, _) in self.iter() {
            if let Some(prev) = prev {
                if prev >= key {
                    return Err(format!("keys out of order: {prev} before {key}"));
                }
            }
            prev = Some(key);
        }
        Ok(())
    }
}

/// In-order iterator returned by [`SplayTree::iter`].
pub struct Iter<'a> {
    tree: &'a SplayTree,
    curr: Option<u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = next(&self.tree.arena, idx);
        Some((self.tree.key(idx), self.tree.value(idx)))
    }
}

impl<'a> IntoIterator for &'a SplayTree {
    type Item = (&'a Key, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
