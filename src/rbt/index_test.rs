use arbitrary::{self, unstructured::Unstructured, Arbitrary};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use std::collections::BTreeSet;

use super::*;
use crate::{snapshot::encode, tree::validate};

#[derive(Clone, Debug, Arbitrary)]
enum TreeOp {
    Insert(u16),
    Delete(u16),
}

fn snap(tree: &Rbt<u64>) -> String {
    encode(tree).as_str().to_string()
}

#[test]
fn test_rbt_scenario() {
    let mut tree: Rbt<u64> = Rbt::new("test_rbt_scenario");
    assert_eq!(snap(&tree), "()");

    tree.insert(5).unwrap();
    assert_eq!(snap(&tree), "(B 5)");
    tree.insert(3).unwrap();
    assert_eq!(snap(&tree), "(B 5 (R 3) ())");
    tree.delete(&5).unwrap();
    assert_eq!(snap(&tree), "(B 3)");
    tree.delete(&3).unwrap();
    assert_eq!(snap(&tree), "()");
    assert!(tree.is_empty());
}

#[test]
fn test_rbt_rotations() {
    let mut tree: Rbt<u64> = Rbt::new("test_rbt_rotations");

    // ascending inserts, single rotation at the grand parent.
    for key in [1, 2, 3] {
        tree.insert(key).unwrap();
    }
    assert_eq!(snap(&tree), "(B 2 (R 1) (R 3))");

    // found key is replaced by its in-order predecessor.
    tree.delete(&2).unwrap();
    assert_eq!(snap(&tree), "(B 1 () (R 3))");

    // zig-zag, double rotation.
    let mut tree: Rbt<u64> = Rbt::new("test_rbt_rotations");
    for key in [10, 5, 7] {
        tree.insert(key).unwrap();
    }
    assert_eq!(snap(&tree), "(B 7 (R 5) (R 10))");

    // color flip on the way down, root is re-painted black.
    tree.insert(1).unwrap();
    assert_eq!(snap(&tree), "(B 7 (B 5 (R 1) ()) (B 10))");
    assert_eq!(validate(&tree).unwrap(), 2);
}

#[test]
fn test_rbt_reject() {
    let mut tree: Rbt<u64> = Rbt::new("test_rbt_reject");
    for key in [50, 20, 80, 10, 30, 70, 90, 60] {
        tree.insert(key).unwrap();
    }
    let before = snap(&tree);

    match tree.insert(30) {
        Err(Error::DuplicateKey(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
    assert_eq!(snap(&tree), before);

    match tree.delete(&35) {
        Err(Error::KeyNotFound(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
    assert_eq!(snap(&tree), before);
    assert_eq!(tree.len(), 8);

    let mut empty: Rbt<u64> = Rbt::new("test_rbt_reject");
    assert!(matches!(empty.delete(&1), Err(Error::KeyNotFound(_, _))));
}

#[test]
fn test_rbt_ops() {
    let seed: u64 = random();
    println!("test_rbt_ops seed:{}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    for round in 0..10 {
        let mut tree: Rbt<u64> = Rbt::new("test_rbt_ops");
        let mut btset: BTreeSet<u64> = BTreeSet::new();

        let ops: Vec<TreeOp> = {
            let bytes: Vec<u8> = (0..rng.gen_range(1..20_000)).map(|_| rng.gen()).collect();
            let mut uns = Unstructured::new(&bytes);
            uns.arbitrary().unwrap()
        };
        println!("test_rbt_ops round:{} n_ops:{}", round, ops.len());

        for op in ops.into_iter() {
            match op {
                // narrow key space to force collisions.
                TreeOp::Insert(key) => {
                    let key = u64::from(key % 1024);
                    let res = tree.insert(key);
                    match btset.insert(key) {
                        true => res.unwrap(),
                        false => assert!(matches!(res, Err(Error::DuplicateKey(_, _)))),
                    }
                }
                TreeOp::Delete(key) => {
                    let key = u64::from(key % 1024);
                    let res = tree.delete(&key);
                    match btset.remove(&key) {
                        true => res.unwrap(),
                        false => assert!(matches!(res, Err(Error::KeyNotFound(_, _)))),
                    }
                }
            }
            validate(&tree).unwrap();
        }

        assert_eq!(tree.len(), btset.len());
        let keys: Vec<u64> = btset.iter().copied().collect();
        assert_eq!(tree.to_keys(), keys);
        for key in keys.iter() {
            assert!(tree.contains(key));
        }
    }
}

#[test]
fn test_rbt_drain() {
    let seed: u64 = random();
    println!("test_rbt_drain seed:{}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut tree: Rbt<u64> = Rbt::new("test_rbt_drain");
    let mut keys: Vec<u64> = vec![];
    while keys.len() < 2000 {
        let key = rng.gen::<u64>() % 1_000_000;
        if tree.insert(key).is_ok() {
            keys.push(key);
        }
    }
    let n_blacks = validate(&tree).unwrap();
    println!("test_rbt_drain n_blacks:{}", n_blacks);

    while !keys.is_empty() {
        let key = keys.swap_remove(rng.gen_range(0..keys.len()));
        tree.delete(&key).unwrap();
        validate(&tree).unwrap();
    }
    assert!(tree.is_empty());
    assert!(tree.as_root().is_none());
    assert_eq!(snap(&tree), "()");
}
