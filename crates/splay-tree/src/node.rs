use crate::key::Key;
use crate::types::Node;

/// Arena slot of a [`SplayTree`](crate::SplayTree).
#[derive(Clone, Debug)]
pub struct SplayNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    // `None` once the slot has been released by a delete.
    pub v: Option<String>,
}

impl SplayNode {
    pub fn new(k: Key, v: String) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v: Some(v),
        }
    }

    pub fn has_left_child(&self) -> bool {
        self.l.is_some()
    }

    pub fn has_right_child(&self) -> bool {
        self.r.is_some()
    }

    pub fn has_both_children(&self) -> bool {
        self.l.is_some() && self.r.is_some()
    }

    pub fn has_any_children(&self) -> bool {
        self.l.is_some() || self.r.is_some()
    }

    /// Drops every link, leaving the slot detached.
    pub fn clear(&mut self) {
        self.p = None;
        self.l = None;
        self.r = None;
    }
}

impl Node for SplayNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
