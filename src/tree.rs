//! Module define the capability interface for reference trees.
//!
//! Oracle machinery never looks inside a tree. It only inserts, deletes
//! and walks the tree through node views, hence any balanced tree that
//! can expose color, key and children can be plugged in.

use std::fmt;

use crate::{Error, Result};

/// Maximum tree depth tolerated by [validate]. A red-black tree of `n`
/// nodes is never deeper than `2 * log2(n + 1)`, this bound is far
/// beyond what an oracle run can populate.
pub const MAX_TREE_DEPTH: usize = 100;

/// Read-only view of a single tree node.
///
/// Views are cheap handles, typically a reference or an index paired
/// with a reference to the arena, and are copied freely while walking.
pub trait Colored: Copy {
    type Key;

    /// Return whether this node is red, otherwise black.
    fn is_red(&self) -> bool;

    fn as_key(&self) -> &Self::Key;

    fn to_left(&self) -> Option<Self>;

    fn to_right(&self) -> Option<Self>;

    /// Return whether this node has no children.
    fn is_leaf(&self) -> bool {
        self.to_left().is_none() && self.to_right().is_none()
    }
}

/// Mutation and root access, required of every reference tree.
pub trait RedBlack {
    type Key: Ord + Clone + fmt::Display;
    type Node<'a>: Colored<Key = Self::Key>
    where
        Self: 'a;

    /// Insert a new key. Inserting a key already present shall fail with
    /// [Error::DuplicateKey] and leave the tree untouched.
    fn insert(&mut self, key: Self::Key) -> Result<()>;

    /// Delete key. Deleting a missing key shall fail with
    /// [Error::KeyNotFound] and leave the tree untouched.
    fn delete(&mut self, key: &Self::Key) -> Result<()>;

    /// Return the root node, None for an empty tree.
    fn to_root(&self) -> Option<Self::Node<'_>>;

    /// Return number of keys in the tree.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the name of this implementation, used in logs.
    fn to_name(&self) -> String;
}

/// Validate red-black rules over the tree's node views:
///
/// * root node must be black.
/// * no red node has a red child.
/// * every path from root to an absent child carries the same number
///   of black nodes.
/// * keys are in strict sort order.
/// * number of nodes match [RedBlack::len].
///
/// Return the black height of the tree.
pub fn validate<T>(tree: &T) -> Result<usize>
where
    T: RedBlack,
    T::Key: fmt::Debug,
{
    let root = tree.to_root();
    let red = root.as_ref().map_or(false, Colored::is_red);
    if red {
        return err_at!(Fatal, msg: "{} root node must be black", tree.to_name());
    }

    let (n_blacks, n_count) = validate_tree(root, red, 0, 0, (None, None))?;
    if n_count != tree.len() {
        return err_at!(Fatal, msg: "n_count {} != {}", n_count, tree.len());
    }

    Ok(n_blacks)
}

// `bounds` are the nearest ancestor keys on either side, every key in
// this subtree must fall strictly between them.
fn validate_tree<N>(
    node: Option<N>,
    fromred: bool,
    mut n_blacks: usize,
    depth: usize,
    bounds: (Option<&N::Key>, Option<&N::Key>),
) -> Result<(usize, usize)>
where
    N: Colored,
    N::Key: Ord + fmt::Debug,
{
    let red = node.as_ref().map_or(false, Colored::is_red);

    let node = match node {
        Some(node) if fromred && red => {
            return err_at!(Fatal, msg: "consecutive reds at {:?}", node.as_key());
        }
        Some(node) => node,
        None => return Ok((n_blacks, 0)),
    };

    if !red {
        n_blacks += 1;
    }

    if depth > MAX_TREE_DEPTH {
        return err_at!(Fatal, msg: "tree exceeds max_depth {}", depth);
    }

    let key = node.as_key();
    match bounds {
        (Some(lo), _) if key <= lo => {
            return err_at!(Fatal, msg: "sort order key:{:?} not above {:?}", key, lo);
        }
        (_, Some(hi)) if key >= hi => {
            return err_at!(Fatal, msg: "sort order key:{:?} not below {:?}", key, hi);
        }
        _ => (),
    }

    let (lo, hi) = bounds;
    let (lb, lc) = validate_tree(node.to_left(), red, n_blacks, depth + 1, (lo, Some(key)))?;
    let (rb, rc) = validate_tree(node.to_right(), red, n_blacks, depth + 1, (Some(key), hi))?;

    if lb != rb {
        return err_at!(Fatal, msg: "unbalanced blacks l:{}, r:{} at {:?}", lb, rb, key);
    }

    Ok((lb, lc + rc + 1))
}

/// Return the tree's height, counted in nodes along the longest path
/// from root, and its black height along the left spine. Both are ZERO
/// for an empty tree.
pub fn to_height<T>(tree: &T) -> (usize, usize)
where
    T: RedBlack,
{
    let mut blacks = 0;
    let mut node = tree.to_root();
    while let Some(n) = node {
        if !n.is_red() {
            blacks += 1;
        }
        node = n.to_left();
    }

    let mut height = 0;
    let mut stack: Vec<(T::Node<'_>, usize)> = vec![];
    stack.extend(tree.to_root().map(|n| (n, 1)));
    while let Some((node, h)) = stack.pop() {
        height = usize::max(height, h);
        stack.extend(node.to_left().map(|n| (n, h + 1)));
        stack.extend(node.to_right().map(|n| (n, h + 1)));
    }

    (height, blacks)
}

#[cfg(test)]
#[path = "tree_test.rs"]
pub(crate) mod tree_test;
