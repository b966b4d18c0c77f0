//! Random selection for PLAY_RANDOM

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `len` candidates - allows swapping the random source in tests
pub trait VideoPicker {
    /// Return an index in `0..len`, or None when `len` is zero
    fn pick(&mut self, len: usize) -> Option<usize>;
}

/// Uniform picker backed by a seedable RNG
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker (same seed, same sequence)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}
