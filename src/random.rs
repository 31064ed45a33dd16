use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DEFAULT_SEED: u64 = 3819201;

/// Source of uniform random choices for the Monte Carlo player.
pub trait RandomGenerator: Default {
    /// Returns a uniformly distributed value in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks one element uniformly at random, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// Draws from the thread-local generator of the `rand` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        rand::rng().random_range(from..to)
    }
}

/// A reproducible generator: the same seed always yields the same sequence of choices.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: ChaCha8Rng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{RandomGenerator, SeededRandomGenerator, StandardRandomGenerator};

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut first = SeededRandomGenerator::new(42);
        let mut second = SeededRandomGenerator::new(42);
        let a: Vec<usize> = (0..32).map(|_| first.next_range(0, 10)).collect();
        let b: Vec<usize> = (0..32).map(|_| second.next_range(0, 10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn values_stay_in_range() {
        let mut seeded = SeededRandomGenerator::default();
        let mut standard = StandardRandomGenerator;
        for _ in 0..1000 {
            let x = seeded.next_range(3, 7);
            assert!((3..7).contains(&x));
            let y = standard.next_range(0, 2);
            assert!(y < 2);
        }
    }

    #[test]
    fn choose_covers_every_element() {
        // arrange
        let items = vec![432, 6542, 534, 6, 13];
        let mut rg = SeededRandomGenerator::default();
        let mut seen = [false; 5];

        // act
        for _ in 0..500 {
            let picked = rg.choose(&items).unwrap();
            let index = items.iter().position(|x| x == picked).unwrap();
            seen[index] = true;
        }

        // assert
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn choose_from_empty_is_none() {
        let items: Vec<u8> = vec![];
        assert!(SeededRandomGenerator::default().choose(&items).is_none());
    }
}
