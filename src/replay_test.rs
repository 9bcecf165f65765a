use rand::{prelude::random, rngs::SmallRng, SeedableRng};

use std::io::BufReader;

use super::*;
use crate::{llrb::Llrb, rbt::Rbt, Config, Recorder, TreeKind};

const SCENARIO: &str = "CMP ()
INS 5
CMP (B 5)
INS 3
CMP (B 5 (R 3) ())
DEL 5
CMP (B 3)
";

#[test]
fn test_replay_scenario() {
    let mut tree = Rbt::<u64>::new("rbt");
    let stats = replay(SCENARIO.as_bytes(), &mut tree).unwrap();
    assert_eq!(
        stats,
        ReplayStats {
            n_lines: 7,
            n_inserts: 2,
            n_deletes: 1,
            n_snapshots: 4,
        }
    );
    assert_eq!(tree.to_keys(), vec![3]);

    let mut tree = Llrb::<u64>::new("llrb");
    replay(BufReader::new(SCENARIO.as_bytes()), &mut tree).unwrap();
    assert_eq!(tree.to_keys(), vec![3]);
}

#[test]
fn test_replay_recorded() {
    let seed: u64 = random();
    println!("test_replay_recorded seed:{}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut config = Config::dense();
    config.set_iterations(2000).set_key_range(500);

    let mut r = Recorder::new(config, Rbt::<u64>::new("rbt"), Vec::<u8>::new()).unwrap();
    let stats = r.run(&mut rng).unwrap();
    let (_, out) = r.into_inner();

    let mut tree = Rbt::<u64>::new("rbt");
    let rs = replay(out.as_slice(), &mut tree).unwrap();
    assert_eq!(rs.n_lines, 4001);
    assert_eq!(rs.n_inserts, stats.n_inserts);
    assert_eq!(rs.n_deletes, stats.n_deletes);
    assert_eq!(rs.n_snapshots, stats.n_snapshots);
    assert_eq!(tree.len(), stats.n_count);
}

#[test]
fn test_replay_mismatch() {
    let text = SCENARIO.replace("CMP (B 5 (R 3) ())", "CMP (B 5 (B 3) ())");
    let mut tree = Rbt::<u64>::new("rbt");
    match replay(text.as_bytes(), &mut tree) {
        Err(Error::Mismatch(_, msg)) => {
            assert!(msg.starts_with("line 5 offset 6"), "{}", msg);
        }
        Err(err) => panic!("unexpected {}", err),
        Ok(stats) => panic!("unexpected {}", stats),
    }
}

#[test]
fn test_replay_cross_tree() {
    // shapes differ between the two trees once rotations kick in.
    let mut config = Config::dense();
    config.set_seed(7).set_iterations(200).set_tree(TreeKind::Rbt);
    let mut out: Vec<u8> = vec![];
    crate::recorder::generate(&config, &mut out).unwrap();

    let mut tree = Rbt::<u64>::new("rbt");
    replay(out.as_slice(), &mut tree).unwrap();

    let text = "INS 1\nINS 2\nINS 3\nCMP (B 2 (R 1) (R 3))\n";
    let mut tree = Rbt::<u64>::new("rbt");
    replay(text.as_bytes(), &mut tree).unwrap();
    let mut tree = Llrb::<u64>::new("llrb");
    match replay(text.as_bytes(), &mut tree) {
        Err(Error::Mismatch(_, _)) => (),
        Err(err) => panic!("unexpected {}", err),
        Ok(stats) => panic!("unexpected {}", stats),
    }
}

#[test]
fn test_replay_bad_input() {
    let mut tree = Rbt::<u64>::new("rbt");
    match replay("INS 1\nPUT 2\n".as_bytes(), &mut tree) {
        Err(Error::InvalidInput(_, _)) => (),
        Err(err) => panic!("unexpected {}", err),
        Ok(stats) => panic!("unexpected {}", stats),
    }

    let mut tree = Rbt::<u64>::new("rbt");
    match replay("INS 1\nINS 1\n".as_bytes(), &mut tree) {
        Err(Error::DuplicateKey(_, _)) => (),
        Err(err) => panic!("unexpected {}", err),
        Ok(stats) => panic!("unexpected {}", stats),
    }

    let mut tree = Llrb::<u64>::new("llrb");
    match replay("INS 1\nDEL 2\n".as_bytes(), &mut tree) {
        Err(Error::KeyNotFound(_, _)) => (),
        Err(err) => panic!("unexpected {}", err),
        Ok(stats) => panic!("unexpected {}", stats),
    }
}

#[test]
fn test_replay_blank_lines() {
    let text = "\nCMP ()\n\nINS 9\nCMP (B 9)\n\n";
    let mut tree = Llrb::<u64>::new("llrb");
    let stats = replay(text.as_bytes(), &mut tree).unwrap();
    assert_eq!(stats.n_lines, 6);
    assert_eq!(stats.n_snapshots, 2);
}
