//! Randomness capability consumed by beans.
//!
//! Beans never own a generator. Callers pass `&mut impl RandomSource` into
//! the operations that draw from it, so one seeded source can drive any
//! number of beans and tests can substitute a scripted sequence.

use rand::Rng;
use rand_distr::StandardNormal;

/// The two draws a bean needs: a standard normal sample when its skill level
/// is rolled, and a uniform integer when it bounces off a peg in luck mode.
pub trait RandomSource {
    /// Standard normal draw (mean 0, standard deviation 1).
    fn next_gaussian(&mut self) -> f64;

    /// Uniform draw over `0..n`.
    fn next_bit(&mut self, n: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn next_gaussian(&mut self) -> f64 {
        self.sample(StandardNormal)
    }

    fn next_bit(&mut self, n: u32) -> u32 {
        // An empty range would panic inside gen_range.
        if n <= 1 {
            return 0;
        }
        self.gen_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_next_bit_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.next_bit(2) < 2);
        }
    }

    #[test]
    fn test_next_bit_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(rng.next_bit(0), 0);
        assert_eq!(rng.next_bit(1), 0);
    }

    #[test]
    fn test_next_bit_hits_both_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let ones: u32 = (0..1000).map(|_| rng.next_bit(2)).sum();
        assert!(ones > 400 && ones < 600, "ones = {}", ones);
    }

    #[test]
    fn test_gaussian_is_centered() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let n = 10_000;
        let mean = (0..n).map(|_| rng.next_gaussian()).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean = {}", mean);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(rng1.next_gaussian(), rng2.next_gaussian());
            assert_eq!(rng1.next_bit(2), rng2.next_bit(2));
        }
    }
}
