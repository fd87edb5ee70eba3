//! Crossover and mutation operators for cut sets.
//!
//! Both operators build a fresh [`CutSet`] and re-sort the cuts, so their
//! output always satisfies the ascending invariant. Duplicate cuts may
//! appear and are kept as zero-length pieces.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: prefix of parent 1, suffix of parent 2
//!
//! # Mutation
//!
//! - [`uniform_reset_mutation`]: each cut independently reset to a uniform
//!   position with probability `rate`

use super::types::CutSet;
use crate::error::{FairDivError, Result};
use rand::Rng;
use tracing::instrument;

/// Single-point crossover.
///
/// Draws a split index in `[0, number_of_cuts)`, concatenates
/// `parent1[..split]` with `parent2[split..]`, and sorts the result.
///
/// Fails with [`FairDivError::WrongCutCount`] if the parents have different
/// cut counts.
#[instrument(level = "debug", skip(parent1, parent2, rng), fields(number_of_cuts = parent1.number_of_cuts()))]
pub fn single_point_crossover<R: Rng>(
    parent1: &CutSet,
    parent2: &CutSet,
    rng: &mut R,
) -> Result<CutSet> {
    let n = parent1.number_of_cuts();
    if parent2.number_of_cuts() != n {
        return Err(FairDivError::WrongCutCount {
            expected: n,
            found: parent2.number_of_cuts(),
        });
    }

    if n == 0 {
        return Ok(parent1.clone());
    }

    let split = rng.random_range(0..n);
    let mut cuts = Vec::with_capacity(n);
    cuts.extend_from_slice(&parent1.cuts()[..split]);
    cuts.extend_from_slice(&parent2.cuts()[split..]);
    cuts.sort_unstable();

    CutSet::new(cuts, parent1.number_of_atoms())
}

/// Uniform reset mutation.
///
/// For every cut, a fresh draw in `[0, 1)` below `rate` replaces the cut
/// with a uniform position in `[0, number_of_atoms]`. Cuts are re-sorted
/// afterwards.
#[instrument(level = "debug", skip(cut_set, rng), fields(number_of_cuts = cut_set.number_of_cuts()))]
pub fn uniform_reset_mutation<R: Rng>(cut_set: &CutSet, rate: f64, rng: &mut R) -> Result<CutSet> {
    let number_of_atoms = cut_set.number_of_atoms();
    let mut cuts: Vec<usize> = cut_set
        .cuts()
        .iter()
        .map(|&cut| {
            if rng.random::<f64>() < rate {
                rng.random_range(0..=number_of_atoms)
            } else {
                cut
            }
        })
        .collect();
    cuts.sort_unstable();

    CutSet::new(cuts, number_of_atoms)
}
