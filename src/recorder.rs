//! Module implement the oracle loop.
//!
//! Each step asks [Policy] for the next decision, emits the operation,
//! applies it to the reference tree and the live keys, and emits the
//! tree's snapshot. A run of `n` iterations hence emits `n` operations
//! and `n + 1` snapshots, the first one being the empty tree.

use log::{debug, info};
use rand::{random, rngs::SmallRng, SeedableRng};

use std::io;

use crate::{
    config::{Config, TreeKind},
    entropy::Entropy,
    keys::LiveKeys,
    llrb::Llrb,
    policy::{Decision, Policy},
    rbt::Rbt,
    record::Record,
    snapshot::encode,
    stats::Stats,
    tree::{self, RedBlack},
    Error, Result,
};

/// Drive a reference tree with randomized operations, streaming
/// [Record] values into `W`.
pub struct Recorder<T, W>
where
    T: RedBlack<Key = u64>,
    W: io::Write,
{
    config: Config,
    policy: Policy,
    tree: T,
    keys: LiveKeys,
    out: W,
    stats: Stats,
}

impl<T, W> Recorder<T, W>
where
    T: RedBlack<Key = u64>,
    W: io::Write,
{
    /// Create a recorder over an empty `tree`.
    pub fn new(config: Config, tree: T, out: W) -> Result<Recorder<T, W>> {
        config.validate()?;
        if !tree.is_empty() {
            let (name, n) = (tree.to_name(), tree.len());
            return err_at!(InvalidInput, msg: "{} starts with {} keys", name, n);
        }

        let stats = Stats {
            name: tree.to_name(),
            seed: config.seed,
            iterations: config.iterations,
            ..Stats::default()
        };

        Ok(Recorder {
            policy: Policy::from(&config),
            config,
            tree,
            keys: LiveKeys::new(),
            out,
            stats,
        })
    }

    /// Run configured number of iterations, drawing from `rng`.
    pub fn run<E>(&mut self, rng: &mut E) -> Result<Stats>
    where
        E: Entropy + ?Sized,
    {
        info!(
            target: "oracle",
            "{} run iterations:{} key_range:{} dump:{}",
            self.stats.name, self.config.iterations, self.config.key_range, self.config.dump
        );

        self.sample_shape();
        self.emit_snapshot()?;
        for _ in 0..self.config.iterations {
            self.step(rng)?;
        }
        err_at!(IOError, self.out.flush())?;

        self.stats.n_count = self.tree.len();
        self.stats.blacks = match self.tree.is_empty() {
            true => None,
            false => Some(tree::validate(&self.tree)?),
        };

        info!(target: "oracle", "{} stats\n{}", self.stats.name, self.stats);
        Ok(self.stats.clone())
    }

    /// Decide, emit and apply a single operation, followed by the
    /// snapshot if dump is enabled.
    pub fn step<E>(&mut self, rng: &mut E) -> Result<Decision>
    where
        E: Entropy + ?Sized,
    {
        let decision = self.policy.next(&self.keys, rng);
        self.emit(&Record::from(decision.to_op()))?;
        self.apply(decision)?;

        if self.config.validate {
            tree::validate(&self.tree)?;
        }
        self.sample_shape();
        self.emit_snapshot()?;

        Ok(decision)
    }

    /// Apply decision to the tree and then to the live keys. Any failure
    /// from the tree means the policy and the tree disagree, and the run
    /// must stop.
    pub fn apply(&mut self, decision: Decision) -> Result<()> {
        match decision {
            Decision::Insert(key) => {
                self.tree.insert(key)?;
                self.keys.push(key)?;
                self.stats.n_inserts += 1;
            }
            Decision::Delete { index, key } => {
                self.tree.delete(&key)?;
                self.keys.remove(index, key)?;
                self.stats.n_deletes += 1;
            }
        }
        self.stats.peak = usize::max(self.stats.peak, self.keys.len());

        if self.tree.len() != self.keys.len() {
            let (n, m) = (self.tree.len(), self.keys.len());
            return err_at!(Fatal, msg: "tree holds {} keys, live keys {}", n, m);
        }
        Ok(())
    }

    pub fn as_keys(&self) -> &LiveKeys {
        &self.keys
    }

    pub fn as_tree(&self) -> &T {
        &self.tree
    }

    /// Return the tree and the output stream.
    pub fn into_inner(self) -> (T, W) {
        (self.tree, self.out)
    }

    fn sample_shape(&mut self) {
        let (height, blacks) = tree::to_height(&self.tree);
        self.stats.shape.sample(self.tree.len(), height, blacks);
    }

    fn emit_snapshot(&mut self) -> Result<()> {
        if self.config.dump {
            let snapshot = encode(&self.tree);
            self.emit(&Record::Cmp(snapshot))?;
            self.stats.n_snapshots += 1;
        }
        Ok(())
    }

    fn emit(&mut self, record: &Record) -> Result<()> {
        err_at!(IOError, writeln!(self.out, "{}", record))
    }
}

/// Generate an oracle stream into `out`, using the tree implementation
/// and seed from `config`. If seed is ZERO a random seed is picked, and
/// recorded in the returned [Stats].
pub fn generate<W>(config: &Config, out: W) -> Result<Stats>
where
    W: io::Write,
{
    let mut config = config.clone();
    if config.seed == 0 {
        config.seed = random();
    }
    debug!(target: "oracle", "seed {}", config.seed);

    let mut rng = SmallRng::seed_from_u64(config.seed);
    match config.tree {
        TreeKind::Rbt => {
            let tree: Rbt<u64> = Rbt::new("rbt");
            Recorder::new(config, tree, out)?.run(&mut rng)
        }
        TreeKind::Llrb => {
            let tree: Llrb<u64> = Llrb::new("llrb");
            Recorder::new(config, tree, out)?.run(&mut rng)
        }
    }
}

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;
