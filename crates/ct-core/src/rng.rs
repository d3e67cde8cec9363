//! Explicitly seeded RNG handle for the randomised transforms.
//!
//! # Determinism strategy
//!
//! There is no process-wide random state.  Every shuffler takes a
//! `&mut ShuffleRng` argument, so two invocations only share randomness if
//! the caller hands them the same handle.  The same seed and the same input
//! always produce the same output.
//!
//! `SmallRng` is fast but its stream is not guaranteed stable across `rand`
//! releases; reproducibility holds for a given build, which is what the
//! null-model comparisons need.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Seeded RNG passed by `&mut` through every randomised transform.
///
/// Not `Clone`: a copied handle would replay the same stream
/// into two places that are meant to be independent.
pub struct ShuffleRng {
    seed: u64,
    rng:  SmallRng,
}

impl ShuffleRng {
    pub fn new(seed: u64) -> Self {
        ShuffleRng { seed, rng: SmallRng::seed_from_u64(seed) }
    }

    /// The seed this handle was created from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.rng)
    }
}
