use std::{fmt, result};

use crate::shape::Shape;

/// Statistic type, for a single oracle run.
#[derive(Clone, Default)]
pub struct Stats {
    /// Name of the reference tree.
    pub name: String,
    pub seed: u64,
    pub iterations: usize,
    pub n_inserts: usize,
    pub n_deletes: usize,
    pub n_snapshots: usize,
    /// Number of keys in the tree at the end of the run.
    pub n_count: usize,
    /// Largest population seen during the run.
    pub peak: usize,
    pub blacks: Option<usize>,
    /// Tree shape, sampled after every operation.
    pub shape: Shape,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let none = "none".to_string();
        let b = self.blacks.as_ref().map_or(none, |x| x.to_string());
        writeln!(f, "oracle.name = {}", self.name)?;
        writeln!(
            f,
            "oracle = {{ seed={}, iterations={}, n_inserts={}, n_deletes={}, n_snapshots={} }}",
            self.seed, self.iterations, self.n_inserts, self.n_deletes, self.n_snapshots,
        )?;
        writeln!(
            f,
            "oracle.tree = {{ n_count={}, peak={}, blacks={} }}",
            self.n_count, self.peak, b
        )?;
        writeln!(f, "oracle.shape = {}", self.shape)
    }
}

impl Stats {
    pub fn to_json(&self) -> String {
        let null = "null".to_string();
        format!(
            concat!(
                r#"{{ "oracle": {{ "name": "{}", "seed": {}, "iterations": {}, "#,
                r#""n_inserts": {}, "n_deletes": {}, "n_snapshots": {}, "#,
                r#""n_count": {}, "peak": {}, "#,
                r#""blacks": {}, "shape": {} }} }}"#,
            ),
            self.name,
            self.seed,
            self.iterations,
            self.n_inserts,
            self.n_deletes,
            self.n_snapshots,
            self.n_count,
            self.peak,
            self.blacks.as_ref().map_or(null, |x| format!("{}", x)),
            self.shape.to_json(),
        )
    }
}
