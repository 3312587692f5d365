//! Seeded uniform-choice source used when building expression trees.
//!
//! Every random decision made while constructing a tree goes through a
//! `Randomly` handle passed in by the caller, so a run can be replayed
//! exactly from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

pub struct Randomly {
    seed: u64,
    rng: StdRng,
}

impl Randomly {
    /// Create a source that replays the same choices for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source with a fresh random seed
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick one element uniformly.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn from_options<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        assert!(!options.is_empty(), "from_options needs at least one option");
        &options[self.rng.gen_range(0..options.len())]
    }

    pub fn integer(&mut self, range: Range<i64>) -> i64 {
        self.rng.gen_range(range)
    }

    pub fn float(&mut self) -> f64 {
        self.rng.gen()
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen()
    }

    /// Returns true with probability `p`, clamped to `[0, 1]`
    pub fn probability(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_choices() {
        let options = ["a", "b", "c", "d", "e"];
        let mut first = Randomly::with_seed(7);
        let mut second = Randomly::with_seed(7);

        for _ in 0..100 {
            assert_eq!(first.from_options(&options), second.from_options(&options));
            assert_eq!(first.integer(-50..50), second.integer(-50..50));
            assert_eq!(first.boolean(), second.boolean());
        }
        assert_eq!(first.seed(), 7);
    }

    #[test]
    fn test_from_options_covers_all() {
        let options = [1, 2, 3];
        let mut randomly = Randomly::with_seed(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[*randomly.from_options(&options) as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_single_option() {
        let mut randomly = Randomly::from_entropy();
        assert_eq!(*randomly.from_options(&["only"]), "only");
    }

    #[test]
    #[should_panic(expected = "at least one option")]
    fn test_empty_options_panics() {
        let options: [u8; 0] = [];
        Randomly::with_seed(0).from_options(&options);
    }

    #[test]
    fn test_probability_bounds() {
        let mut randomly = Randomly::with_seed(3);
        assert!(!randomly.probability(0.0));
        assert!(randomly.probability(1.0));
        assert!(randomly.probability(4.0));
        assert!(!randomly.probability(-1.0));
    }
}
