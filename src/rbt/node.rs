use slab::Slab;

use crate::tree::Colored;

pub const LEFT: usize = 0;
pub const RIGHT: usize = 1;

// Node corresponds to a single key in Rbt instance.
pub struct Node<K> {
    pub key: K,
    pub red: bool,                   // store: red or black
    pub child: [Option<usize>; 2], // store: left and right child
}

impl<K> Node<K> {
    // new nodes are always red.
    pub fn new(key: K) -> Node<K> {
        Node {
            key,
            red: true,
            child: [None, None],
        }
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.red = true
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.red = false
    }
}

/// Read-only view into a node of [Rbt].
///
/// [Rbt]: crate::rbt::Rbt
pub struct NodeRef<'a, K> {
    nodes: &'a Slab<Node<K>>,
    id: usize,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(nodes: &'a Slab<Node<K>>, id: usize) -> NodeRef<'a, K> {
        NodeRef { nodes, id }
    }

    fn to_child(&self, dir: usize) -> Option<NodeRef<'a, K>> {
        let nodes = self.nodes;
        nodes[self.id].child[dir].map(|id| NodeRef::new(nodes, id))
    }
}

impl<'a, K> Clone for NodeRef<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K> Copy for NodeRef<'a, K> {}

impl<'a, K> Colored for NodeRef<'a, K> {
    type Key = K;

    #[inline]
    fn is_red(&self) -> bool {
        self.nodes[self.id].red
    }

    #[inline]
    fn as_key(&self) -> &K {
        &self.nodes[self.id].key
    }

    #[inline]
    fn to_left(&self) -> Option<Self> {
        self.to_child(LEFT)
    }

    #[inline]
    fn to_right(&self) -> Option<Self> {
        self.to_child(RIGHT)
    }
}
