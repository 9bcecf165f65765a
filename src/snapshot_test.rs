use super::*;
use crate::tree::tree_test::{black, red, Fixed};

#[test]
fn test_snapshot_empty() {
    let tree = Fixed::new(None);
    assert_eq!(encode(&tree), Snapshot::default());
    assert_eq!(encode(&tree).as_str(), "()");
}

#[test]
fn test_snapshot_leaf() {
    let tree = Fixed::new(black(5, None, None));
    assert_eq!(encode(&tree).as_str(), "(B 5)");
}

#[test]
fn test_snapshot_single_child() {
    let tree = Fixed::new(black(5, red(3, None, None), None));
    assert_eq!(encode(&tree).as_str(), "(B 5 (R 3) ())");

    let tree = Fixed::new(black(5, None, red(8, None, None)));
    assert_eq!(encode(&tree).as_str(), "(B 5 () (R 8))");
}

#[test]
fn test_snapshot_nested() {
    let tree = Fixed::new(black(
        10,
        black(5, red(3, None, None), None),
        black(20, red(15, None, None), red(25, None, None)),
    ));
    assert_eq!(
        encode(&tree).as_str(),
        "(B 10 (B 5 (R 3) ()) (B 20 (R 15) (R 25)))"
    );
}

#[test]
fn test_snapshot_diverge() {
    // same keys, different rotation.
    let a = encode(&Fixed::new(black(5, red(3, None, None), None)));
    let b = encode(&Fixed::new(black(3, None, red(5, None, None))));
    assert_eq!(a.diverge(&a), None);
    assert_eq!(a.diverge(&b), Some(3));

    // same shape, different color.
    let c = encode(&Fixed::new(black(5, black(3, None, None), None)));
    assert_eq!(a.diverge(&c), Some(6));

    let d = Snapshot::from("(B 5".to_string());
    assert_eq!(encode(&Fixed::new(black(5, None, None))).diverge(&d), Some(4));
}
