//! Shuffle algorithms for play order randomization
//!
//! The random source is an owned, injectable [`ShuffleRng`] so each playlist
//! has its own reproducible stream.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seedable uniform random source used by shuffle and shuffled inserts
pub trait ShuffleRng: Send {
    /// Restart the stream; identical seeds give identical draws afterwards
    fn reseed(&mut self, seed: u64);

    /// Uniform random permutation of `ids` in place
    fn shuffle(&mut self, ids: &mut [usize]);

    /// Uniform integer in `[0, bound)`; `bound` is at least 1
    fn index_below(&mut self, bound: usize) -> usize;
}

/// Default random source backed by [`StdRng`]
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    /// Entropy-seeded source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new()
    }
}

impl ShuffleRng for SeededRng {
    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn shuffle(&mut self, ids: &mut [usize]) {
        ids.shuffle(&mut self.rng);
    }

    fn index_below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Draw a new play order over `n` identities
///
/// With `pinned = Some((identity, position))` the remaining `n - 1`
/// identities are permuted and `identity` is placed back at `position`, so
/// the entry under the cursor does not change.
pub fn shuffled_order(
    n: usize,
    pinned: Option<(usize, usize)>,
    rng: &mut dyn ShuffleRng,
) -> Vec<usize> {
    match pinned {
        None => {
            let mut ids: Vec<usize> = (0..n).collect();
            rng.shuffle(&mut ids);
            ids
        }
        Some((current, position)) => {
            let mut ids: Vec<usize> = (0..n).filter(|&id| id != current).collect();
            rng.shuffle(&mut ids);
            ids.insert(position.min(ids.len()), current);
            ids
        }
    }
}
