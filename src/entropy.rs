//! Module define the source of randomness consumed by [Policy].
//!
//! [Policy]: crate::Policy

use rand::Rng;

/// Source of uniform draws. Any [rand::Rng] is an Entropy, seed it to get
/// reproducible oracle streams.
pub trait Entropy {
    /// Return a uniform sample from `[0, 1)`.
    fn gen_unit(&mut self) -> f64;

    /// Return a uniform sample from `[0, n)`, `n` must be non-zero.
    fn gen_below(&mut self, n: u64) -> u64;
}

impl<R> Entropy for R
where
    R: Rng + ?Sized,
{
    #[inline]
    fn gen_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    #[inline]
    fn gen_below(&mut self, n: u64) -> u64 {
        self.gen_range(0..n)
    }
}

/// Entropy replaying fixed draws, pins down scenarios in test cases.
#[cfg(test)]
pub(crate) struct Scripted {
    units: std::collections::VecDeque<f64>,
    belows: std::collections::VecDeque<u64>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(units: Vec<f64>, belows: Vec<u64>) -> Scripted {
        Scripted {
            units: units.into(),
            belows: belows.into(),
        }
    }

    pub(crate) fn is_drained(&self) -> bool {
        self.units.is_empty() && self.belows.is_empty()
    }
}

#[cfg(test)]
impl Entropy for Scripted {
    fn gen_unit(&mut self) -> f64 {
        self.units.pop_front().expect("scripted units drained")
    }

    fn gen_below(&mut self, n: u64) -> u64 {
        let val = self.belows.pop_front().expect("scripted belows drained");
        assert!(val < n, "scripted draw {} out of range {}", val, n);
        val
    }
}
