//! Module implement verification of a recorded oracle stream.
//!
//! Replay feeds every `INS` and `DEL` record into a fresh reference tree
//! and checks every `CMP` record against the tree's own snapshot. Blank
//! lines are skipped.

use log::{debug, info};

use std::{fmt, io, result};

use crate::{
    record::{Op, Record},
    snapshot::{encode, Snapshot},
    tree::RedBlack,
    Error, Result,
};

/// Statistics from a successful replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub n_lines: usize,
    pub n_inserts: usize,
    pub n_deletes: usize,
    pub n_snapshots: usize,
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(
            f,
            "replay = {{ n_lines={}, n_inserts={}, n_deletes={}, n_snapshots={} }}",
            self.n_lines, self.n_inserts, self.n_deletes, self.n_snapshots
        )
    }
}

/// Replay oracle stream from `reader` on `tree`, which must be empty.
///
/// Fail with [Error::Mismatch] on the first snapshot that differs from
/// the tree's own encoding, the message carries the line number, both
/// encodings and the offset where they diverge.
pub fn replay<R, T>(reader: R, tree: &mut T) -> Result<ReplayStats>
where
    R: io::BufRead,
    T: RedBlack<Key = u64>,
{
    if !tree.is_empty() {
        let (name, n) = (tree.to_name(), tree.len());
        return err_at!(InvalidInput, msg: "{} starts with {} keys", name, n);
    }

    let mut stats = ReplayStats::default();
    for (i, line) in reader.lines().enumerate() {
        let lineno = i + 1;
        let line = err_at!(IOError, line, "at line {}", lineno)?;
        stats.n_lines = lineno;
        if line.trim().is_empty() {
            continue;
        }

        let record: Record = line.parse()?;
        match record.to_op() {
            Some(Op::Insert(key)) => {
                tree.insert(key)?;
                stats.n_inserts += 1;
            }
            Some(Op::Delete(key)) => {
                tree.delete(&key)?;
                stats.n_deletes += 1;
            }
            None => (),
        }

        if let Record::Cmp(expected) = record {
            check(lineno, &expected, &encode(tree))?;
            stats.n_snapshots += 1;
        }
    }

    info!(target: "replay", "{} {}", tree.to_name(), stats);
    Ok(stats)
}

fn check(lineno: usize, expected: &Snapshot, computed: &Snapshot) -> Result<()> {
    match expected.diverge(computed) {
        None => {
            debug!(target: "replay", "line {} ok", lineno);
            Ok(())
        }
        Some(off) => err_at!(
            Mismatch,
            msg: "line {} offset {}\n  expected: {}\n  computed: {}",
            lineno,
            off,
            expected,
            computed
        ),
    }
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;
