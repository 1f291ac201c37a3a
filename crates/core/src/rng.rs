//! RNG module - seeded pseudo-random source for food placement.
//!
//! A simple LCG (Linear Congruential Generator) with constants from
//! Numerical Recipes. Deterministic by seed so whole games replay exactly,
//! which keeps food-placement behavior testable.

/// Simple LCG random generator.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "empty range");
        self.next_u32() % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng1 = SimpleRng::new(0);
        let mut rng2 = SimpleRng::new(1);
        assert_eq!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(777);
        for _ in 0..1000 {
            assert!(rng.next_range(22) < 22);
        }
    }

    #[test]
    fn test_next_range_hits_every_value_eventually() {
        let mut rng = SimpleRng::new(9);
        let mut seen = [false; 8];
        for _ in 0..1000 {
            seen[rng.next_range(8) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
