use crate::tree::Colored;

/// Node corresponds to a single key in Llrb instance.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) black: bool,                 // store: black or red
    pub(crate) left: Option<Box<Node<K>>>,  // store: left child
    pub(crate) right: Option<Box<Node<K>>>, // store: right child
}

impl<K> Node<K> {
    // new nodes are always red.
    pub(crate) fn new(key: K) -> Box<Node<K>> {
        Box::new(Node {
            key,
            black: false,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    pub fn toggle_link(&mut self) {
        self.black = !self.black
    }

    #[inline]
    pub fn as_left_ref(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn as_right_ref(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    #[inline]
    pub fn as_key(&self) -> &K {
        &self.key
    }
}

impl<'a, K> Colored for &'a Node<K> {
    type Key = K;

    #[inline]
    fn is_red(&self) -> bool {
        !self.black
    }

    #[inline]
    fn as_key(&self) -> &K {
        &self.key
    }

    #[inline]
    fn to_left(&self) -> Option<Self> {
        let node: &'a Node<K> = *self;
        node.left.as_deref()
    }

    #[inline]
    fn to_right(&self) -> Option<Self> {
        let node: &'a Node<K> = *self;
        node.right.as_deref()
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
