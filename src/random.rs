//! Seeded RNG construction.
//!
//! All strategy runners obtain their RNG through [`create_rng`] so that
//! seeded configs reproduce runs exactly while unseeded configs stay
//! independent between runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed, falling back to entropy.
pub fn create_rng_opt(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..16 {
            assert_eq!(a.random_range(0u32..1000), b.random_range(0u32..1000));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let xs: Vec<u32> = (0..8).map(|_| a.random_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }
}
