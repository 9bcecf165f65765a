//! Module implement shape statistics, sampled once per snapshot.
//!
//! A red-black tree holding `n` keys is never taller than
//! `2 * log2(n + 1)`. [Shape] tracks how close a run came to that bound.

use std::{collections::BTreeMap, fmt, result};

/// Return the height bound for a red-black tree of `n` keys.
pub fn height_bound(n: usize) -> f64 {
    2.0 * ((n + 1) as f64).log2()
}

/// Shape of the reference tree across a run.
#[derive(Clone, Default, Debug)]
pub struct Shape {
    n_samples: usize,
    total_height: usize,
    max_height: usize,
    max_blacks: usize,
    min_slack: Option<f64>,
    heights: BTreeMap<usize, usize>, // height -> number of snapshots
}

impl Shape {
    /// Record the tree's shape after an operation. `height` counts nodes
    /// on the longest path from root, `blacks` is the black height.
    pub fn sample(&mut self, n_count: usize, height: usize, blacks: usize) {
        self.n_samples += 1;
        self.total_height += height;
        self.max_height = usize::max(self.max_height, height);
        self.max_blacks = usize::max(self.max_blacks, blacks);
        *self.heights.entry(height).or_insert(0) += 1;

        let slack = height_bound(n_count) - (height as f64);
        self.min_slack = match self.min_slack {
            Some(min) if min <= slack => Some(min),
            _ => Some(slack),
        };
    }

    pub fn to_samples(&self) -> usize {
        self.n_samples
    }

    pub fn to_max_height(&self) -> usize {
        self.max_height
    }

    pub fn to_max_blacks(&self) -> usize {
        self.max_blacks
    }

    /// Return the average height across samples, ZERO if none.
    pub fn to_mean_height(&self) -> usize {
        self.total_height.checked_div(self.n_samples).unwrap_or(0)
    }

    /// Return the smallest margin between the height bound and the
    /// sampled height. Negative means a sample broke the bound.
    pub fn to_min_slack(&self) -> Option<f64> {
        self.min_slack
    }

    /// Return `(height, snapshots)` pairs in height order.
    pub fn to_histogram(&self) -> Vec<(usize, usize)> {
        self.heights.iter().map(|(h, n)| (*h, *n)).collect()
    }

    pub fn to_json(&self) -> String {
        let hist: Vec<String> = self
            .to_histogram()
            .into_iter()
            .map(|(h, n)| format!(r#""{}": {}"#, h, n))
            .collect();
        let slack = self
            .min_slack
            .map_or("null".to_string(), |x| format!("{:.3}", x));
        format!(
            concat!(
                r#"{{ "samples": {}, "mean_height": {}, "max_height": {}, "#,
                r#""max_blacks": {}, "min_slack": {}, "heights": {{ {} }} }}"#,
            ),
            self.n_samples,
            self.to_mean_height(),
            self.max_height,
            self.max_blacks,
            slack,
            hist.join(", ")
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let slack = self
            .min_slack
            .map_or("none".to_string(), |x| format!("{:.3}", x));
        write!(
            f,
            concat!(
                "{{ samples={}, mean_height={}, max_height={}, ",
                "max_blacks={}, min_slack={} }}"
            ),
            self.n_samples,
            self.to_mean_height(),
            self.max_height,
            self.max_blacks,
            slack
        )
    }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;
