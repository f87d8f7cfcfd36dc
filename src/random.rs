use rand::Rng;
use rand::seq::SliceRandom;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness injected into the agents.
///
/// Every random decision an agent makes (column ordering, random rollouts, random replies)
/// goes through this trait, so tests can swap in a deterministic generator.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element of `items`, or `None` if it is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }

    /// Reorders `items` in place.
    fn shuffle<K>(&mut self, items: &mut [K]) {
        for i in (1..items.len()).rev() {
            let j = self.next_range(0, i as i32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

/// Thread-local RNG backed generator for real play.
#[derive(Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }

    fn shuffle<K>(&mut self, items: &mut [K]) {
        items.shuffle(&mut rand::rng());
    }
}

/// Seeded linear congruential generator producing the same sequence on every run.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}

/// Generator that never reorders anything and always picks the first candidate.
///
/// Useful to pin column enumeration to plain ascending order.
#[derive(Default)]
pub struct FixedOrderGenerator;

impl RandomGenerator for FixedOrderGenerator {
    fn next(&mut self) -> i32 {
        0
    }

    fn next_range(&mut self, from: i32, _to: i32) -> i32 {
        from
    }

    fn shuffle<K>(&mut self, _items: &mut [K]) {}
}
