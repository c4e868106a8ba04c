//! Injectable randomness for shape placement and coloring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random numbers used when creating shapes.
///
/// The canvas is generic over this trait so tests can drive shape creation
/// with a seeded or scripted source.
pub trait RandomSource {
    /// Sample uniformly from `[low, high]`.
    ///
    /// Implementations return `low` when the range is empty or not finite.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;
}

/// Default random source backed by `rand`'s standard generator.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        if !(low.is_finite() && high.is_finite()) || high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}
