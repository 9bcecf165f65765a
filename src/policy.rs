//! Module implement the workload policy for oracle runs.
//!
//! Small trees are grown aggressively so that structural cases with few
//! nodes are exercised early, large trees are shrunk so that deletion
//! rebalancing gets exercised and the run does not grow without bound.

use log::trace;

use crate::{entropy::Entropy, keys::LiveKeys, record::Op, Config};

/// Default population below which inserts are favoured.
pub const SMALL_THRESHOLD: usize = 50;
/// Default population above which deletes are favoured.
pub const LARGE_THRESHOLD: usize = 500;
/// Default probability of insert for small trees.
pub const SMALL_INSERT_RATIO: f64 = 0.8;
/// Default probability of insert for large trees.
pub const LARGE_INSERT_RATIO: f64 = 0.2;
/// Probability of insert for mid sized trees.
pub const MID_INSERT_RATIO: f64 = 0.5;

/// Next operation decided by [Policy].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Insert a key that is not live.
    Insert(u64),
    /// Delete the live key at `index`. Same `index` shall be removed from
    /// the live keys once the tree has deleted `key`.
    Delete { index: usize, key: u64 },
}

impl Decision {
    /// Return the operation, as emitted into the oracle stream.
    pub fn to_op(&self) -> Op {
        match self {
            Decision::Insert(key) => Op::Insert(*key),
            Decision::Delete { key, .. } => Op::Delete(*key),
        }
    }
}

/// Workload policy, decides between insert and delete as a function of
/// the current population.
#[derive(Clone, Debug)]
pub struct Policy {
    key_range: u64,
    small_threshold: usize,
    large_threshold: usize,
    small_insert_ratio: f64,
    large_insert_ratio: f64,
}

impl Default for Policy {
    fn default() -> Policy {
        Policy::from(&Config::default())
    }
}

impl<'a> From<&'a Config> for Policy {
    fn from(config: &'a Config) -> Policy {
        Policy {
            key_range: config.key_range,
            small_threshold: config.small_threshold,
            large_threshold: config.large_threshold,
            small_insert_ratio: config.small_insert_ratio,
            large_insert_ratio: config.large_insert_ratio,
        }
    }
}

impl Policy {
    /// Return the probability of choosing insert, for a tree of
    /// `population` keys.
    pub fn to_insert_ratio(&self, population: usize) -> f64 {
        match population {
            0 => 1.0,
            n if n < self.small_threshold => self.small_insert_ratio,
            n if n > self.large_threshold => self.large_insert_ratio,
            _ => MID_INSERT_RATIO,
        }
    }

    /// Decide the next operation. `keys` is only read, callers are
    /// expected to apply the decision and update `keys` accordingly.
    pub fn next<E>(&self, keys: &LiveKeys, rng: &mut E) -> Decision
    where
        E: Entropy + ?Sized,
    {
        let population = keys.len();
        let exhausted = (population as u64) >= self.key_range;

        let insert = match population {
            0 => true,
            _ if exhausted => false,
            n => rng.gen_unit() <= self.to_insert_ratio(n),
        };

        let decision = if insert {
            Decision::Insert(self.fresh_key(keys, rng))
        } else {
            let index = rng.gen_below(population as u64) as usize;
            // index < population, live keys can't miss it.
            let key = keys.as_slice()[index];
            Decision::Delete { index, key }
        };

        trace!(target: "policy", "population:{} {:?}", population, decision);
        decision
    }

    // keep drawing until the key is not live, caller ensure that key space
    // is not exhausted.
    fn fresh_key<E>(&self, keys: &LiveKeys, rng: &mut E) -> u64
    where
        E: Entropy + ?Sized,
    {
        loop {
            let key = rng.gen_below(self.key_range);
            if !keys.contains(key) {
                break key;
            }
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
