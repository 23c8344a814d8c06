//! Every random choice the handlers make goes through [`RandomSelection`], so tests can seed it.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// Uniform picks and permutations over a shared, lockable generator.
pub struct RandomSelection {
    rng: Mutex<StdRng>,
}

impl RandomSelection {
    /// Generator seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // Poisoning leaves the generator usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }

    /// Uniform index in `0..len`, or `None` when `len` is zero.
    pub fn index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.with_rng(|rng| rng.gen_range(0..len)))
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|i| &items[i])
    }

    /// Fisher–Yates shuffle in place.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        self.with_rng(|rng| items.shuffle(rng));
    }

    /// Shuffled copy of `items`.
    pub fn shuffled<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }

    /// `count` distinct values in `0..upper`, in draw order. Yields at most `upper` values.
    pub fn distinct_below(&self, upper: usize, count: usize) -> Vec<usize> {
        let count = count.min(upper);
        self.with_rng(|rng| index::sample(rng, upper, count).into_vec())
    }
}

impl Default for RandomSelection {
    fn default() -> Self {
        Self::new()
    }
}
