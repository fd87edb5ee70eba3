//! Genome representation: cut sets and individuals.
//!
//! A [`CutSet`] is the chromosome; an [`Individual`] pairs it with the
//! fitness assigned by a [`FitnessEvaluator`](crate::fitness::FitnessEvaluator).

use crate::error::{FairDivError, Result};
use crate::problem::{split_at_cuts, validate_cuts, Piece};
use rand::Rng;
use tracing::instrument;

/// Ascending list of cut positions in `[0, number_of_atoms]`.
///
/// Together with the implicit boundaries 0 and `number_of_atoms`, `k` cuts
/// define `k + 1` contiguous pieces. Equal neighbouring cuts are permitted
/// and yield zero-length pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCutSet")
)]
pub struct CutSet {
    cuts: Vec<usize>,
    number_of_atoms: usize,
}

impl CutSet {
    /// Validates and wraps `cuts`.
    ///
    /// Fails with [`FairDivError::CutOutOfRange`] if any cut exceeds
    /// `number_of_atoms`, or [`FairDivError::CutsNotAscending`] if the cuts
    /// decrease anywhere.
    pub fn new(cuts: Vec<usize>, number_of_atoms: usize) -> Result<Self> {
        validate_cuts(&cuts, number_of_atoms)?;
        Ok(Self {
            cuts,
            number_of_atoms,
        })
    }

    /// Samples `number_of_cuts` distinct positions from `[0, number_of_atoms]`
    /// uniformly without replacement.
    ///
    /// Runs a partial Fisher–Yates shuffle over `0..=number_of_atoms`, keeps
    /// the first `number_of_cuts` entries and sorts them.
    #[instrument(level = "debug", skip(rng))]
    pub fn random<R: Rng>(number_of_cuts: usize, number_of_atoms: usize, rng: &mut R) -> Result<Self> {
        let available = number_of_atoms + 1;
        if number_of_cuts > available {
            return Err(FairDivError::TooManyCuts {
                requested: number_of_cuts,
                available,
            });
        }

        let mut positions: Vec<usize> = (0..available).collect();
        for i in 0..number_of_cuts {
            let j = rng.random_range(i..available);
            positions.swap(i, j);
        }
        positions.truncate(number_of_cuts);
        positions.sort_unstable();

        Self::new(positions, number_of_atoms)
    }

    pub fn cuts(&self) -> &[usize] {
        &self.cuts
    }

    pub fn number_of_cuts(&self) -> usize {
        self.cuts.len()
    }

    pub fn number_of_atoms(&self) -> usize {
        self.number_of_atoms
    }

    /// The `number_of_cuts + 1` pieces this cut set defines.
    pub fn pieces(&self) -> Vec<Piece> {
        split_at_cuts(&self.cuts, self.number_of_atoms)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCutSet {
    cuts: Vec<usize>,
    number_of_atoms: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCutSet> for CutSet {
    type Error = FairDivError;

    fn try_from(raw: RawCutSet) -> Result<Self> {
        Self::new(raw.cuts, raw.number_of_atoms)
    }
}

/// A candidate solution: one [`CutSet`] and its fitness.
///
/// Fitness is never computed implicitly. A fresh individual carries
/// `f64::NEG_INFINITY` until [`set_fitness`](Self::set_fitness) is called.
/// Higher fitness is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    cut_set: CutSet,
    fitness: f64,
}

impl Individual {
    /// Wraps an unevaluated cut set.
    pub fn new(cut_set: CutSet) -> Self {
        Self {
            cut_set,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Wraps a cut set with a known fitness.
    pub fn with_fitness(cut_set: CutSet, fitness: f64) -> Self {
        Self { cut_set, fitness }
    }

    pub fn cut_set(&self) -> &CutSet {
        &self.cut_set
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn number_of_cuts(&self) -> usize {
        self.cut_set.number_of_cuts()
    }
}
