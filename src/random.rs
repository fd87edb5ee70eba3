//! Seedable random number source.
//!
//! The engine threads a single [`Rng`](rand::Rng) through every randomized
//! operation. Any `Rng` can be injected; [`create_rng`] builds the default
//! one, which is fully determined by its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the default RNG from a 64-bit seed.
///
/// Two generators built from the same seed produce identical streams.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates the default RNG from OS entropy.
pub fn create_unseeded_rng() -> StdRng {
    create_rng(rand::random())
}
