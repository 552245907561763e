//! Deterministic random number generation.
//!
//! The only non-determinism in the engine is deliberate: the random
//! strategy's uniform pick and the heuristic strategy's tie-break. Both
//! draw from this seeded generator, so a game created with a fixed seed
//! replays identically. Uses ChaCha8 for speed with solid statistical
//! quality.
//!
//! ```
//! use santorini_core::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG driving all random decisions in the engine.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a generator from a seed. The same seed always produces the
    /// same decision sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform `usize` in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Bernoulli draw with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// `true` with probability `1/n`.
    ///
    /// Feeding this the running count of equally ranked candidates keeps
    /// the surviving candidate uniform over all of them, however many
    /// arrive.
    pub fn one_in(&mut self, n: u32) -> bool {
        debug_assert!(n > 0);
        n == 1 || self.inner.gen_range(0..n) == 0
    }

    /// Uniformly chosen element of a slice, `None` when empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.gen_range_usize(0..1000), b.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        let seq_a: Vec<_> = (0..10).map(|_| a.gen_range_usize(0..1000)).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.gen_range_usize(0..1000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_one_in_one_is_certain() {
        let mut rng = GameRng::new(9);
        for _ in 0..50 {
            assert!(rng.one_in(1));
        }
    }

    #[test]
    fn test_one_in_is_roughly_fair() {
        let mut rng = GameRng::new(1234);
        let hits = (0..4000).filter(|_| rng.one_in(4)).count();
        // Expect about 1000; a wide band keeps this robust to seed choice.
        assert!((800..1200).contains(&hits), "got {hits}");
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(5);
        let items = [10, 20, 30];
        let picked = rng.choose(&items).copied();
        assert!(items.contains(&picked.unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(GameRng::new(77).seed(), 77);
    }
}
