//! Fitness evaluation of cut configurations.
//!
//! A [`FitnessEvaluator`] scores an [`Individual`] against a
//! [`ProblemInstance`]. Higher fitness is better. Two strategies ship:
//!
//! - [`MatchingValueEvaluator`] (default): total value of the optimal
//!   player → piece assignment. Shares its matrix construction and solver
//!   with [`AllocationSolver`](crate::allocation::AllocationSolver).
//! - [`EnvyCountEvaluator`]: negated number of envious ordered player pairs
//!   under the positional assignment "player i gets piece i".

mod envy;
mod matching;

pub use envy::{envious_pairs, EnvyCountEvaluator};
pub use matching::MatchingValueEvaluator;

use crate::assignment::ValuationMatrix;
use crate::ga::Individual;
use crate::problem::{Piece, ProblemInstance};

/// Scores a candidate cut configuration.
///
/// Evaluators must be pure: the genetic search may score individuals in
/// parallel and relies on scoring drawing no randomness.
pub trait FitnessEvaluator: Send + Sync {
    /// Returns the fitness of `individual`; higher is better.
    fn evaluate(&self, problem: &ProblemInstance, individual: &Individual) -> f64;
}

impl<E: FitnessEvaluator + ?Sized> FitnessEvaluator for &E {
    fn evaluate(&self, problem: &ProblemInstance, individual: &Individual) -> f64 {
        (**self).evaluate(problem, individual)
    }
}

impl<E: FitnessEvaluator + ?Sized> FitnessEvaluator for Box<E> {
    fn evaluate(&self, problem: &ProblemInstance, individual: &Individual) -> f64 {
        (**self).evaluate(problem, individual)
    }
}

/// Builds the player x piece matrix of `player.value_of(piece)`.
///
/// `pieces` must hold exactly one piece per player.
pub fn valuation_matrix(problem: &ProblemInstance, pieces: &[Piece]) -> ValuationMatrix {
    debug_assert_eq!(pieces.len(), problem.number_of_players());
    let players = problem.players();
    ValuationMatrix::from_fn(players.len(), |i, j| players[i].value_of(&pieces[j]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::pieces_from_cuts;

    #[test]
    fn test_valuation_matrix_scenario() {
        let problem = ProblemInstance::from_dense(&[
            vec![0.2, 0.0, 0.0, 0.3, 0.5, 0.0, 0.0],
            vec![0.0, 0.4, 0.3, 0.0, 0.0, 0.3, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.4, 0.6],
        ])
        .unwrap();
        let pieces = pieces_from_cuts(&[2, 4], problem.number_of_atoms()).unwrap();
        let m = valuation_matrix(&problem, &pieces);

        let expected = [[0.2, 0.3, 0.5], [0.4, 0.3, 0.3], [0.0, 0.0, 1.0]];
        for (i, row) in expected.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                assert!(
                    (m.get(i, j) - v).abs() < 1e-12,
                    "entry ({i}, {j}) = {}, expected {v}",
                    m.get(i, j)
                );
            }
        }
    }
}
