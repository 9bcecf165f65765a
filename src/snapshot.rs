//! Module implement the canonical snapshot of a red-black tree.
//!
//! Encoding is pre-order, node then left subtree then right subtree:
//!
//! * absent subtree is `()`.
//! * a node is `(`, color `R` or `B`, space, decimal key, and `)`. If at
//!   least one child is present, both children follow the key, each
//!   preceded by a space.
//!
//! Leaf nodes hence render as `(B 5)`, while `(B 5 (R 3) ())` has a single
//! child. Trees holding the same keys but differing in rotation or color
//! diverge at the first differing node, in pre-order.

use std::{fmt, fmt::Write, result};

use crate::tree::{Colored, RedBlack};

/// Canonical encoding of a tree at one point in time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Snapshot(String);

impl Default for Snapshot {
    fn default() -> Snapshot {
        Snapshot("()".to_string())
    }
}

impl From<String> for Snapshot {
    fn from(encoded: String) -> Snapshot {
        Snapshot(encoded)
    }
}

impl AsRef<str> for Snapshot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "Snapshot({})", self.0)
    }
}

impl Snapshot {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the byte offset where `self` and `other` first differ, None
    /// if they are identical.
    pub fn diverge(&self, other: &Snapshot) -> Option<usize> {
        let (a, b) = (self.0.as_bytes(), other.0.as_bytes());
        match a.iter().zip(b.iter()).position(|(x, y)| x != y) {
            Some(off) => Some(off),
            None if a.len() == b.len() => None,
            None => Some(usize::min(a.len(), b.len())),
        }
    }
}

/// Encode the tree's current shape.
pub fn encode<T>(tree: &T) -> Snapshot
where
    T: RedBlack,
{
    let mut buf = String::with_capacity(tree.len() * 12 + 2);
    encode_node(tree.to_root(), &mut buf);
    Snapshot(buf)
}

fn encode_node<N>(node: Option<N>, buf: &mut String)
where
    N: Colored,
    N::Key: fmt::Display,
{
    let node = match node {
        Some(node) => node,
        None => {
            buf.push_str("()");
            return;
        }
    };

    let color = if node.is_red() { 'R' } else { 'B' };
    // writing into a String never fails.
    write!(buf, "({} {}", color, node.as_key()).ok();
    if !node.is_leaf() {
        buf.push(' ');
        encode_node(node.to_left(), buf);
        buf.push(' ');
        encode_node(node.to_right(), buf);
    }
    buf.push(')');
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
