//! Envy-count fitness heuristic.

use super::{valuation_matrix, FitnessEvaluator};
use crate::assignment::ValuationMatrix;
use crate::ga::Individual;
use crate::problem::{split_at_cuts, ProblemInstance, NORMALIZATION_EPSILON};

/// Scores a cut configuration as `-(number of envious ordered pairs)`.
///
/// Player `i` is assumed to receive piece `i` in cut order. Player `i`
/// envies player `j` when `i` values piece `j` more than piece `i` by more
/// than [`NORMALIZATION_EPSILON`].
/// A score of 0 means no envy was detected.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvyCountEvaluator;

impl EnvyCountEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl FitnessEvaluator for EnvyCountEvaluator {
    fn evaluate(&self, problem: &ProblemInstance, individual: &Individual) -> f64 {
        let pieces = split_at_cuts(individual.cut_set().cuts(), problem.number_of_atoms());
        let matrix = valuation_matrix(problem, &pieces);
        let positional: Vec<usize> = (0..matrix.size()).collect();
        -(envious_pairs(&matrix, &positional).len() as f64)
    }
}

/// Lists every ordered pair `(envious, envied)` of players under the given
/// player → piece assignment.
///
/// Values closer than [`NORMALIZATION_EPSILON`] count as equal, since piece
/// values are float sums taken over different atoms.
pub fn envious_pairs(matrix: &ValuationMatrix, player_to_piece: &[usize]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, &own_piece) in player_to_piece.iter().enumerate() {
        let own = matrix.get(i, own_piece);
        for (j, &other_piece) in player_to_piece.iter().enumerate() {
            if i != j && matrix.get(i, other_piece) > own + NORMALIZATION_EPSILON {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
