use std::collections::HashSet;

use crate::{Error, Result};

/// Insertion ordered list of keys currently held by the reference tree.
///
/// Deletion targets are picked by index into this list, hence the order
/// must be exactly the order of successful inserts, with deleted
/// positions closed up.
#[derive(Clone, Default, Debug)]
pub struct LiveKeys {
    keys: Vec<u64>,
    index: HashSet<u64>,
}

impl LiveKeys {
    pub fn new() -> LiveKeys {
        LiveKeys::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        self.index.contains(&key)
    }

    /// Return key at `index`, as of insertion order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u64> {
        self.keys.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.keys
    }

    /// Append a fresh key. Appending a live key is a bookkeeping bug.
    pub fn push(&mut self, key: u64) -> Result<()> {
        if !self.index.insert(key) {
            return err_at!(Fatal, msg: "live key {} appended twice", key);
        }
        self.keys.push(key);
        Ok(())
    }

    /// Remove the key at `index`, which must hold `key`. Subsequent keys
    /// shift down by one position.
    pub fn remove(&mut self, index: usize, key: u64) -> Result<u64> {
        match self.keys.get(index) {
            Some(k) if *k == key => (),
            Some(k) => return err_at!(Fatal, msg: "live key at {} is {} not {}", index, k, key),
            None => return err_at!(Fatal, msg: "live index {} out of {}", index, self.len()),
        }

        self.index.remove(&key);
        Ok(self.keys.remove(index))
    }
}

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;
