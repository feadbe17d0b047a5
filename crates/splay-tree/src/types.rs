//! Node link trait.
//!
//! Every "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! Child links (`l`, `r`) own the referenced slot; the parent link (`p`) is a
//! plain back-reference used for rotation bookkeeping.

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
