//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Tournament selection: sample `k` individuals uniformly with replacement
/// and return the index of the fittest (highest fitness).
///
/// The first sampled contestant wins ties.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Index of the fittest individual; the lowest index wins ties.
///
/// # Panics
/// Panics if `population` is empty.
pub fn fittest(population: &[Individual]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best_idx = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best_idx].fitness() {
            best_idx = i;
        }
    }
    best_idx
}
