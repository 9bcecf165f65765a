//! Module implement the line format of oracle streams.

use std::{fmt, result, str::FromStr};

use crate::{snapshot::Snapshot, Error, Result};

/// Mutation applied to the reference tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(u64),
    Delete(u64),
}

impl Op {
    pub fn to_key(&self) -> u64 {
        match self {
            Op::Insert(key) | Op::Delete(key) => *key,
        }
    }
}

impl From<Op> for Record {
    fn from(op: Op) -> Record {
        match op {
            Op::Insert(key) => Record::Ins(key),
            Op::Delete(key) => Record::Del(key),
        }
    }
}

/// Single line in an oracle stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// `INS <key>`
    Ins(u64),
    /// `DEL <key>`
    Del(u64),
    /// `CMP <encoded-tree>`
    Cmp(Snapshot),
}

impl Record {
    /// Return the operation for `INS` and `DEL` records.
    pub fn to_op(&self) -> Option<Op> {
        match self {
            Record::Ins(key) => Some(Op::Insert(*key)),
            Record::Del(key) => Some(Op::Delete(*key)),
            Record::Cmp(_) => None,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            Record::Ins(key) => write!(f, "INS {}", key),
            Record::Del(key) => write!(f, "DEL {}", key),
            Record::Cmp(snap) => write!(f, "CMP {}", snap),
        }
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(line: &str) -> Result<Record> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (tag, arg) = match line.split_once(' ') {
            Some((tag, arg)) if !arg.is_empty() => (tag, arg),
            _ => return err_at!(InvalidInput, msg: "malformed record {:?}", line),
        };

        let record = match tag {
            "INS" => Record::Ins(err_at!(InvalidInput, arg.parse::<u64>(), "{:?}", line)?),
            "DEL" => Record::Del(err_at!(InvalidInput, arg.parse::<u64>(), "{:?}", line)?),
            "CMP" => Record::Cmp(Snapshot::from(arg.to_string())),
            tag => return err_at!(InvalidInput, msg: "invalid tag {:?} in {:?}", tag, line),
        };

        Ok(record)
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;
