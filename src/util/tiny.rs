use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A fixed-seed rng, so tests and generated boards are reproducible.
pub fn consistent_rng() -> impl Rng + Send {
    seeded_rng(0)
}

pub fn seeded_rng(seed: u64) -> impl Rng + Send {
    Xoroshiro64StarStar::seed_from_u64(seed)
}
