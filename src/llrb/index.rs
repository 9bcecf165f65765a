// Module ``llrb`` implement a single threaded [Llrb] variant, owning its
// nodes.
//
// Inserts descend recursively and, on the way back up, rotate and flip to
// keep the tree a left leaning 2-3 tree. Deletes follow Sedgewick, moving a
// red link down the search path so that the key can be removed from a
// 3-node or 4-node, and fix up the tree on the way back up.
//
// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

use log::debug;

use std::{cmp::Ordering, fmt};

use crate::{llrb::Node, tree::RedBlack, Error, Result};

type Link<K> = Option<Box<Node<K>>>;

/// Left leaning red black tree.
///
/// Inserting a key that is already present fails with
/// [Error::DuplicateKey], deleting a missing key fails with
/// [Error::KeyNotFound], in both cases the tree is left untouched.
pub struct Llrb<K> {
    name: String,
    root: Link<K>,
    n_count: usize,
}

impl<K> Llrb<K> {
    pub fn new(name: &str) -> Llrb<K> {
        Llrb {
            name: name.to_string(),
            root: None,
            n_count: 0,
        }
    }

    /// Return name of this index instance.
    #[inline]
    pub fn to_name(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Return whether index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    pub fn as_root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Return whether `key` is present.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            node = match nref.as_key().cmp(key) {
                Ordering::Less => nref.as_right_ref(),
                Ordering::Greater => nref.as_left_ref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Return all keys in sort order.
    pub fn to_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.n_count);
        let (mut stack, mut node) = (vec![], self.root.as_deref());
        loop {
            while let Some(nref) = node {
                stack.push(nref);
                node = nref.as_left_ref();
            }
            match stack.pop() {
                Some(nref) => {
                    keys.push(nref.key.clone());
                    node = nref.as_right_ref();
                }
                None => break keys,
            }
        }
    }
}

impl<K> Llrb<K>
where
    K: Ord + Clone + fmt::Display,
{
    fn do_insert(node: Link<K>, key: K) -> Result<Box<Node<K>>> {
        let mut node = match node {
            Some(node) => node,
            None => return Ok(Node::new(key)),
        };

        match node.as_key().cmp(&key) {
            Ordering::Greater => {
                node.left = Some(Self::do_insert(node.left.take(), key)?);
                walkuprot_23(node)
            }
            Ordering::Less => {
                node.right = Some(Self::do_insert(node.right.take(), key)?);
                walkuprot_23(node)
            }
            Ordering::Equal => err_at!(DuplicateKey, msg: "insert {}", key),
        }
    }

    fn do_delete(node: Link<K>, key: &K) -> Result<Link<K>> {
        let mut node = match node {
            Some(node) => node,
            None => return err_at!(KeyNotFound, msg: "delete {}", key),
        };

        if node.as_key() > key {
            if node.left.is_none() {
                return err_at!(KeyNotFound, msg: "delete {}", key);
            }
            let left = node.as_left_ref();
            if !is_red(left) && !is_red(left.and_then(Node::as_left_ref)) {
                node = move_red_left(node)?;
            }
            node.left = Self::do_delete(node.left.take(), key)?;
            return Ok(Some(fixup(node)?));
        }

        if is_red(node.as_left_ref()) {
            node = rotate_right(node)?;
        }

        if node.as_key() == key && node.right.is_none() {
            return Ok(None);
        }

        let right = node.as_right_ref();
        if right.is_some() && !is_red(right) && !is_red(right.and_then(Node::as_left_ref)) {
            node = move_red_right(node)?;
        }

        if node.as_key() == key {
            let (right, sub_node) = do_remove_min(node.right.take())?;
            let mut sub_node = match sub_node {
                Some(sub_node) => sub_node,
                None => return err_at!(Fatal, msg: "delete {} missing successor", key),
            };
            sub_node.left = node.left.take();
            sub_node.right = right;
            sub_node.black = node.black;
            Ok(Some(fixup(sub_node)?))
        } else {
            node.right = Self::do_delete(node.right.take(), key)?;
            Ok(Some(fixup(node)?))
        }
    }
}

impl<K> RedBlack for Llrb<K>
where
    K: Ord + Clone + fmt::Display,
{
    type Key = K;
    type Node<'a> = &'a Node<K> where Self: 'a;

    fn insert(&mut self, key: K) -> Result<()> {
        if self.contains(&key) {
            return err_at!(DuplicateKey, msg: "{} insert {}", self.name, key);
        }
        debug!(target: "llrb", "{} insert {}", self.name, key);

        let mut root = Self::do_insert(self.root.take(), key)?;
        root.set_black();
        self.root = Some(root);
        self.n_count += 1;

        Ok(())
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        if !self.contains(key) {
            return err_at!(KeyNotFound, msg: "{} delete {}", self.name, key);
        }
        debug!(target: "llrb", "{} delete {}", self.name, key);

        let mut root = Self::do_delete(self.root.take(), key)?;
        if let Some(root) = root.as_mut() {
            root.set_black();
        }
        self.root = root;
        self.n_count -= 1;

        Ok(())
    }

    fn to_root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    fn len(&self) -> usize {
        self.n_count
    }

    fn to_name(&self) -> String {
        self.name.clone()
    }
}

// Detach the minimum node under `node`, return the remaining subtree and
// the detached node.
fn do_remove_min<K>(node: Link<K>) -> Result<(Link<K>, Link<K>)> {
    let mut node = match node {
        Some(node) => node,
        None => return Ok((None, None)),
    };

    if node.left.is_none() {
        return Ok((None, Some(node)));
    }

    let left = node.as_left_ref();
    if !is_red(left) && !is_red(left.and_then(Node::as_left_ref)) {
        node = move_red_left(node)?;
    }
    let (left, sub_node) = do_remove_min(node.left.take())?;
    node.left = left;
    Ok((Some(fixup(node)?), sub_node))
}

#[inline]
fn is_red<K>(node: Option<&Node<K>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

#[inline]
fn is_black<K>(node: Option<&Node<K>>) -> bool {
    node.map_or(true, Node::is_black)
}

fn walkuprot_23<K>(mut node: Box<Node<K>>) -> Result<Box<Node<K>>> {
    if is_red(node.as_right_ref()) && !is_red(node.as_left_ref()) {
        node = rotate_left(node)?;
    }
    let left = node.as_left_ref();
    if is_red(left) && is_red(left.and_then(Node::as_left_ref)) {
        node = rotate_right(node)?;
    }
    if is_red(node.as_left_ref()) && is_red(node.as_right_ref()) {
        flip(&mut node)?;
    }
    Ok(node)
}

//              (i)                       (i)
//               |                         |
//              node                     right
//              /  \                      / \
//             /    (r)                 (r)  \
//            /       \                 /     \
//          left     right           node     r-r
//                    / \            /  \
//                 r-l  r-r       left  r-l
//
fn rotate_left<K>(mut node: Box<Node<K>>) -> Result<Box<Node<K>>> {
    if is_black(node.as_right_ref()) {
        return err_at!(Fatal, msg: "rotate_left(): rotate black link");
    }
    let mut right = match node.right.take() {
        Some(right) => right,
        None => return err_at!(Fatal, msg: "rotate_left(): missing right"),
    };

    node.right = right.left.take();
    right.black = node.black;
    node.set_red();
    right.left = Some(node);

    Ok(right)
}

//              (i)                       (i)
//               |                         |
//              node                      left
//              /  \                      / \
//            (r)   \                   (r)  \
//           /       \                 /      \
//         left     right            l-l      node
//         / \                                / \
//      l-l  l-r                            l-r  right
//
fn rotate_right<K>(mut node: Box<Node<K>>) -> Result<Box<Node<K>>> {
    if is_black(node.as_left_ref()) {
        return err_at!(Fatal, msg: "rotate_right(): rotate black link");
    }
    let mut left = match node.left.take() {
        Some(left) => left,
        None => return err_at!(Fatal, msg: "rotate_right(): missing left"),
    };

    node.left = left.right.take();
    left.black = node.black;
    node.set_red();
    left.right = Some(node);

    Ok(left)
}

//        (x)                   (!x)
//         |                     |
//        node                  node
//        / \                   / \
//      (y) (z)              (!y) (!z)
//     /      \              /      \
//   left    right         left    right
//
fn flip<K>(node: &mut Node<K>) -> Result<()> {
    match (node.left.as_mut(), node.right.as_mut()) {
        (Some(left), Some(right)) => {
            left.toggle_link();
            right.toggle_link();
        }
        (_, _) => return err_at!(Fatal, msg: "flip(): missing child"),
    }
    node.toggle_link();
    Ok(())
}

fn fixup<K>(mut node: Box<Node<K>>) -> Result<Box<Node<K>>> {
    if is_red(node.as_right_ref()) {
        node = rotate_left(node)?;
    }

    let left = node.as_left_ref();
    if is_red(left) && is_red(left.and_then(Node::as_left_ref)) {
        node = rotate_right(node)?;
    }

    if is_red(node.as_left_ref()) && is_red(node.as_right_ref()) {
        flip(&mut node)?;
    }
    Ok(node)
}

fn move_red_left<K>(mut node: Box<Node<K>>) -> Result<Box<Node<K>>> {
    flip(&mut node)?;

    let right = node.as_right_ref();
    if is_red(right.and_then(Node::as_left_ref)) {
        node.right = match node.right.take() {
            Some(right) => Some(rotate_right(right)?),
            None => None,
        };
        node = rotate_left(node)?;
        flip(&mut node)?;
    }
    Ok(node)
}

fn move_red_right<K>(mut node: Box<Node<K>>) -> Result<Box<Node<K>>> {
    flip(&mut node)?;

    let left = node.as_left_ref();
    if is_red(left.and_then(Node::as_left_ref)) {
        node = rotate_right(node)?;
        flip(&mut node)?;
    }
    Ok(node)
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
