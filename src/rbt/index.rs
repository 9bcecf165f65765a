use log::debug;
use slab::Slab;

use std::{cmp::Ordering, fmt};

use crate::{
    rbt::{Node, NodeRef, LEFT, RIGHT},
    tree::RedBlack,
    Error, Result,
};

// Parent link while walking down the tree. Head is a virtual node above
// the root, it only has a right link, which is the root.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Slot {
    Head,
    Node(usize),
}

/// Red-black tree with top-down insert and delete.
///
/// Inserting a key that is already present fails with
/// [Error::DuplicateKey], deleting a missing key fails with
/// [Error::KeyNotFound], in both cases the tree is left untouched.
pub struct Rbt<K> {
    name: String,
    nodes: Slab<Node<K>>,
    root: Option<usize>,
}

impl<K> Rbt<K> {
    pub fn new(name: &str) -> Rbt<K> {
        Rbt {
            name: name.to_string(),
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Return number of keys in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the root node, if tree is not empty.
    pub fn as_root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(&self.nodes, id))
    }

    /// Return whether `key` is present.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut node = self.root;
        while let Some(id) = node {
            let n = &self.nodes[id];
            node = match n.key.cmp(key) {
                Ordering::Less => n.child[RIGHT],
                Ordering::Greater => n.child[LEFT],
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
        let mut keys = Vec::with_capacity(self.len());
        let (mut stack, mut node) = (vec![], self.root);
        loop {
            while let Some(id) = node {
                stack.push(id);
                node = self.nodes[id].child[LEFT];
            }
            match stack.pop() {
                Some(id) => {
                    keys.push(self.nodes[id].key.clone());
                    node = self.nodes[id].child[RIGHT];
                }
                None => break keys,
            }
        }
    }

    #[inline]
    fn is_red(&self, node: Option<usize>) -> bool {
        node.map_or(false, |id| self.nodes[id].red)
    }

    #[inline]
    fn set_black(&mut self, node: Option<usize>) {
        if let Some(id) = node {
            self.nodes[id].set_black()
        }
    }

    #[inline]
    fn child(&self, slot: Slot, dir: usize) -> Option<usize> {
        match slot {
            Slot::Head if dir == RIGHT => self.root,
            Slot::Head => None,
            Slot::Node(id) => self.nodes[id].child[dir],
        }
    }

    #[inline]
    fn set_child(&mut self, slot: Slot, dir: usize, child: Option<usize>) {
        match slot {
            Slot::Head => {
                debug_assert_eq!(dir, RIGHT, "head only links right");
                self.root = child
            }
            Slot::Node(id) => self.nodes[id].child[dir] = child,
        }
    }

    //            (root)                    save
    //             /  \                     /  \
    //          save   c       =>         a   (root)
    //          /  \                            /  \
    //         a    b                          b    c
    //
    // rotate `root` in direction `dir`, above picture is for dir == RIGHT.
    fn single_rotate(&mut self, root: usize, dir: usize) -> Result<usize> {
        let save = match self.nodes[root].child[1 - dir] {
            Some(save) => save,
            None => return err_at!(Fatal, msg: "{} rotate {} without child", self.name, dir),
        };

        self.nodes[root].child[1 - dir] = self.nodes[save].child[dir];
        self.nodes[save].child[dir] = Some(root);
        self.nodes[root].set_red();
        self.nodes[save].set_black();

        Ok(save)
    }

    fn double_rotate(&mut self, root: usize, dir: usize) -> Result<usize> {
        let child = match self.nodes[root].child[1 - dir] {
            Some(child) => child,
            None => return err_at!(Fatal, msg: "{} rotate {} without child", self.name, dir),
        };

        let save = self.single_rotate(child, 1 - dir)?;
        self.nodes[root].child[1 - dir] = Some(save);
        self.single_rotate(root, dir)
    }

    fn set_root_black(&mut self) {
        let root = self.root;
        self.set_black(root)
    }
}

impl<K> Rbt<K>
where
    K: Ord + Clone + fmt::Display,
{
    fn do_insert(&mut self, key: K) -> Result<()> {
        let root = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.nodes.insert(Node::new(key)));
                self.set_root_black();
                return Ok(());
            }
        };

        let (mut dir, mut last) = (LEFT, LEFT);
        let mut ggp = Slot::Head;
        let (mut gp, mut p): (Option<usize>, Option<usize>) = (None, None);
        let mut node = Some(root);

        loop {
            let curr = match (node, p) {
                (Some(id), _) => {
                    let [left, right] = self.nodes[id].child;
                    if self.is_red(left) && self.is_red(right) {
                        // color flip
                        self.nodes[id].set_red();
                        self.set_black(left);
                        self.set_black(right);
                    }
                    id
                }
                (None, Some(parent)) => {
                    let id = self.nodes.insert(Node::new(key.clone()));
                    self.nodes[parent].child[dir] = Some(id);
                    id
                }
                (None, None) => {
                    return err_at!(Fatal, msg: "{} insert {} fell off the root", self.name, key)
                }
            };

            // fix red violation
            if self.is_red(Some(curr)) && self.is_red(p) {
                let (parent, grand) = match (p, gp) {
                    (Some(parent), Some(grand)) => (parent, grand),
                    _ => return err_at!(Fatal, msg: "{} red root at insert {}", self.name, key),
                };
                let dir2 = if self.child(ggp, RIGHT) == Some(grand) {
                    RIGHT
                } else {
                    LEFT
                };
                let sub = if self.nodes[parent].child[last] == Some(curr) {
                    self.single_rotate(grand, 1 - last)?
                } else {
                    self.double_rotate(grand, 1 - last)?
                };
                self.set_child(ggp, dir2, Some(sub));
            }

            let ord = self.nodes[curr].key.cmp(&key);
            if ord == Ordering::Equal {
                break;
            }

            last = dir;
            dir = if ord == Ordering::Less { RIGHT } else { LEFT };

            if let Some(grand) = gp {
                ggp = Slot::Node(grand);
            }
            gp = p;
            p = Some(curr);
            node = self.nodes[curr].child[dir];
        }

        self.set_root_black();
        Ok(())
    }

    fn do_delete(&mut self, key: &K) -> Result<()> {
        let mut node = Slot::Head;
        let mut p = Slot::Head;
        let mut found = None;
        let mut dir = RIGHT;

        while let Some(next) = self.child(node, dir) {
            let last = dir;

            let grand = p;
            p = node;
            node = Slot::Node(next);

            let ord = key.cmp(&self.nodes[next].key);
            dir = if ord == Ordering::Greater { RIGHT } else { LEFT };
            if ord == Ordering::Equal {
                found = Some(next);
            }

            // push the red node down
            if self.is_red(Some(next)) || self.is_red(self.nodes[next].child[dir]) {
                continue;
            }

            if self.is_red(self.nodes[next].child[1 - dir]) {
                let sub = self.single_rotate(next, dir)?;
                self.set_child(p, last, Some(sub));
                p = Slot::Node(sub);
                continue;
            }

            let (parent, sibling) = match p {
                Slot::Node(parent) => match self.nodes[parent].child[1 - last] {
                    Some(sibling) => (parent, sibling),
                    None => continue,
                },
                Slot::Head => continue,
            };

            let [near, far] = {
                let child = self.nodes[sibling].child;
                [child[last], child[1 - last]]
            };
            if !self.is_red(near) && !self.is_red(far) {
                // color flip
                self.nodes[parent].set_black();
                self.nodes[sibling].set_red();
                self.nodes[next].set_red();
                continue;
            }

            let dir2 = if self.child(grand, RIGHT) == Some(parent) {
                RIGHT
            } else {
                LEFT
            };
            let sub = if self.is_red(near) {
                self.double_rotate(parent, last)?
            } else {
                self.single_rotate(parent, last)?
            };
            self.set_child(grand, dir2, Some(sub));

            // ensure correct coloring
            self.nodes[sub].set_red();
            self.nodes[next].set_red();
            let [left, right] = self.nodes[sub].child;
            self.set_black(left);
            self.set_black(right);
        }

        let (found, curr) = match (found, node) {
            (Some(found), Slot::Node(curr)) => (found, curr),
            (_, _) => return err_at!(Fatal, msg: "{} delete {} lost its key", self.name, key),
        };

        // unlink curr, its key replaces the found key.
        let side = if self.child(p, RIGHT) == Some(curr) {
            RIGHT
        } else {
            LEFT
        };
        let [left, right] = self.nodes[curr].child;
        self.set_child(p, side, if left.is_none() { right } else { left });

        let removed = self.nodes.remove(curr);
        if found != curr {
            self.nodes[found].key = removed.key;
        }

        self.set_root_black();
        Ok(())
    }
}

impl<K> RedBlack for Rbt<K>
where
    K: Ord + Clone + fmt::Display,
{
    type Key = K;
    type Node<'a> = NodeRef<'a, K> where Self: 'a;

    fn insert(&mut self, key: K) -> Result<()> {
        if self.contains(&key) {
            return err_at!(DuplicateKey, msg: "{} insert {}", self.name, key);
        }
        debug!(target: "rbt", "{} insert {}", self.name, key);
        self.do_insert(key)
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        if !self.contains(key) {
            return err_at!(KeyNotFound, msg: "{} delete {}", self.name, key);
        }
        debug!(target: "rbt", "{} delete {}", self.name, key);
        self.do_delete(key)
    }

    fn to_root(&self) -> Option<NodeRef<'_, K>> {
        self.as_root()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn to_name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
