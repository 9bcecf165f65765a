use super::*;

/// Read-only tree, built by hand to pin down shapes.
pub(crate) struct Fixed {
    root: Option<Box<FixedNode>>,
    n_count: usize,
}

pub(crate) struct FixedNode {
    red: bool,
    key: u64,
    left: Option<Box<FixedNode>>,
    right: Option<Box<FixedNode>>,
}

pub(crate) fn red(key: u64, left: Option<Box<FixedNode>>, right: Option<Box<FixedNode>>) -> Option<Box<FixedNode>> {
    Some(Box::new(FixedNode { red: true, key, left, right }))
}

pub(crate) fn black(key: u64, left: Option<Box<FixedNode>>, right: Option<Box<FixedNode>>) -> Option<Box<FixedNode>> {
    Some(Box::new(FixedNode { red: false, key, left, right }))
}

impl Fixed {
    pub(crate) fn new(root: Option<Box<FixedNode>>) -> Fixed {
        fn count(node: Option<&FixedNode>) -> usize {
            node.map_or(0, |n| 1 + count(n.left.as_deref()) + count(n.right.as_deref()))
        }
        let n_count = count(root.as_deref());
        Fixed { root, n_count }
    }
}

impl<'a> Colored for &'a FixedNode {
    type Key = u64;

    fn is_red(&self) -> bool {
        self.red
    }

    fn as_key(&self) -> &u64 {
        &self.key
    }

    fn to_left(&self) -> Option<Self> {
        let node: &'a FixedNode = *self;
        node.left.as_deref()
    }

    fn to_right(&self) -> Option<Self> {
        let node: &'a FixedNode = *self;
        node.right.as_deref()
    }
}

impl RedBlack for Fixed {
    type Key = u64;
    type Node<'a> = &'a FixedNode where Self: 'a;

    fn insert(&mut self, key: u64) -> Result<()> {
        err_at!(Fatal, msg: "fixed tree, insert {}", key)
    }

    fn delete(&mut self, key: &u64) -> Result<()> {
        err_at!(Fatal, msg: "fixed tree, delete {}", key)
    }

    fn to_root(&self) -> Option<Self::Node<'_>> {
        self.root.as_deref()
    }

    fn len(&self) -> usize {
        self.n_count
    }

    fn to_name(&self) -> String {
        "fixed".to_string()
    }
}

#[test]
fn test_validate_ok() {
    assert_eq!(validate(&Fixed::new(None)).unwrap(), 0);
    assert_eq!(validate(&Fixed::new(black(5, None, None))).unwrap(), 1);

    let tree = Fixed::new(black(
        10,
        black(5, red(3, None, None), None),
        black(20, red(15, None, None), red(25, None, None)),
    ));
    assert_eq!(validate(&tree).unwrap(), 2);

    assert_eq!(to_height(&tree), (3, 2));
    assert_eq!(to_height(&Fixed::new(None)), (0, 0));
    assert_eq!(to_height(&Fixed::new(black(5, red(3, None, None), None))), (2, 1));
}

#[test]
fn test_validate_broken() {
    let trees = vec![
        // red root
        Fixed::new(red(5, None, None)),
        // consecutive reds
        Fixed::new(black(5, red(3, red(1, None, None), None), None)),
        // unbalanced blacks
        Fixed::new(black(5, black(3, None, None), None)),
        // sort order, left
        Fixed::new(black(5, red(7, None, None), None)),
        // sort order, right
        Fixed::new(black(5, None, red(5, None, None))),
        // sort order, grandchild right of left subtree above root
        Fixed::new(black(
            10,
            black(5, None, red(20, None, None)),
            black(15, None, None),
        )),
        // sort order, grandchild left of right subtree below root
        Fixed::new(black(
            10,
            black(5, None, None),
            black(15, red(7, None, None), None),
        )),
    ];
    for (i, tree) in trees.iter().enumerate() {
        match validate(tree) {
            Err(Error::Fatal(_, msg)) => println!("test_validate_broken {} {}", i, msg),
            res => panic!("{} unexpected {:?}", i, res),
        }
    }
}
