use serde::{Deserialize, Serialize};

use std::{ffi, fmt, result, str::FromStr};

use crate::{
    policy::{LARGE_INSERT_RATIO, LARGE_THRESHOLD, SMALL_INSERT_RATIO, SMALL_THRESHOLD},
    util, Error, Result,
};

/// Default number of operations in a run.
pub const ITERATIONS: usize = 1000;
/// Key range for dense, collision heavy, workloads.
pub const DENSE_KEY_RANGE: u64 = 9999;
/// Key range for sparse, near unique, workloads.
pub const SPARSE_KEY_RANGE: u64 = (1 << 31) - 1;
/// Iterations used by the sparse preset.
pub const SPARSE_ITERATIONS: usize = 50;

/// Reference tree implementations shipped with this package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeKind {
    /// Top-down red-black tree, refer [crate::rbt::Rbt].
    Rbt,
    /// Left-leaning red-black tree, refer [crate::llrb::Llrb].
    Llrb,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            TreeKind::Rbt => write!(f, "rbt"),
            TreeKind::Llrb => write!(f, "llrb"),
        }
    }
}

impl FromStr for TreeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<TreeKind> {
        match s {
            "rbt" => Ok(TreeKind::Rbt),
            "llrb" => Ok(TreeKind::Llrb),
            s => err_at!(InvalidInput, msg: "invalid tree {:?}", s),
        }
    }
}

/// Configuration for an oracle run.
///
/// Can be loaded from a toml profile, missing fields take their default
/// values:
///
/// ```toml
/// iterations = 50
/// key_range = 2147483647
/// dump = true
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the random source, ZERO picks a random seed.
    pub seed: u64,
    /// Number of operations, each followed by a snapshot.
    pub iterations: usize,
    /// Keys are drawn from `[0, key_range)`.
    pub key_range: u64,
    /// Emit snapshots, if false only operations are emitted.
    pub dump: bool,
    /// Validate red-black rules after every operation.
    pub validate: bool,
    pub tree: TreeKind,
    pub small_threshold: usize,
    pub large_threshold: usize,
    pub small_insert_ratio: f64,
    pub large_insert_ratio: f64,
}

impl Default for Config {
    fn default() -> Config {
        Config::dense()
    }
}

impl Config {
    /// Dense keys, collisions between live and dead keys are common.
    pub fn dense() -> Config {
        Config {
            seed: 0,
            iterations: ITERATIONS,
            key_range: DENSE_KEY_RANGE,
            dump: true,
            validate: true,
            tree: TreeKind::Rbt,
            small_threshold: SMALL_THRESHOLD,
            large_threshold: LARGE_THRESHOLD,
            small_insert_ratio: SMALL_INSERT_RATIO,
            large_insert_ratio: LARGE_INSERT_RATIO,
        }
    }

    /// Sparse keys and a short run.
    pub fn sparse() -> Config {
        Config {
            iterations: SPARSE_ITERATIONS,
            key_range: SPARSE_KEY_RANGE,
            ..Config::dense()
        }
    }

    /// Return a named preset, `dense` or `sparse`.
    pub fn from_preset(name: &str) -> Result<Config> {
        match name {
            "dense" => Ok(Config::dense()),
            "sparse" => Ok(Config::sparse()),
            name => err_at!(InvalidInput, msg: "invalid preset {:?}", name),
        }
    }

    /// Load configuration from toml profile.
    pub fn from_file(file: &ffi::OsStr) -> Result<Config> {
        let config: Config = util::files::load_toml(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    pub fn set_key_range(&mut self, key_range: u64) -> &mut Self {
        self.key_range = key_range;
        self
    }

    pub fn set_dump(&mut self, dump: bool) -> &mut Self {
        self.dump = dump;
        self
    }

    pub fn set_validate(&mut self, validate: bool) -> &mut Self {
        self.validate = validate;
        self
    }

    pub fn set_tree(&mut self, tree: TreeKind) -> &mut Self {
        self.tree = tree;
        self
    }

    /// Check configuration before starting a run.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return err_at!(InvalidInput, msg: "iterations must be positive");
        }
        if self.key_range == 0 {
            return err_at!(InvalidInput, msg: "key_range must be positive");
        }
        if self.small_threshold > self.large_threshold {
            let (s, l) = (self.small_threshold, self.large_threshold);
            return err_at!(InvalidInput, msg: "small_threshold {} > large_threshold {}", s, l);
        }
        for ratio in [self.small_insert_ratio, self.large_insert_ratio] {
            if !(0.0..=1.0).contains(&ratio) {
                return err_at!(InvalidInput, msg: "insert ratio {} not in [0, 1]", ratio);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
