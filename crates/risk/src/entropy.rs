//! Random draws used by the classifier
//!
//! The classifier never touches a global RNG directly. Production callers
//! use [`RngEntropy`]; tests use a seeded [`RngEntropy`] or a
//! [`ScriptedEntropy`] that replays exact values.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of the random draws made during classification
pub trait EntropySource {
    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32;

    /// `true` with the given probability (clamped to `[0, 1]`)
    fn chance(&mut self, probability: f64) -> bool;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Entropy backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: Rng> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngEntropy<ThreadRng> {
    /// Thread-local generator, seeded from the OS
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngEntropy<StdRng> {
    /// Deterministic generator: equal seeds give equal draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> EntropySource for RngEntropy<R> {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays scripted draws in order.
///
/// `below` pops the next scripted integer, capped to `bound - 1`; `chance`
/// pops the next scripted boolean. Exhausted scripts yield `0` and `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntropy {
    integers: VecDeque<u32>,
    flips: VecDeque<bool>,
}

impl ScriptedEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integers returned by `below`
    pub fn with_integers(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.integers.extend(values);
        self
    }

    /// Queue booleans returned by `chance`
    pub fn with_flips(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(values);
        self
    }

    /// Draws not yet consumed (integers, booleans)
    pub fn remaining(&self) -> (usize, usize) {
        (self.integers.len(), self.flips.len())
    }
}

impl EntropySource for ScriptedEntropy {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.integers.pop_front().unwrap_or(0).min(bound - 1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}
