//! Optimal-matching fitness.

use super::{valuation_matrix, FitnessEvaluator};
use crate::assignment::{AssignmentSolver, HungarianSolver};
use crate::ga::Individual;
use crate::problem::{split_at_cuts, ProblemInstance};

/// Scores a cut configuration by the total value of its best assignment.
///
/// Builds the player x piece valuation matrix and solves it with the
/// injected [`AssignmentSolver`]. Scores lie in `[0, number_of_players]`.
#[derive(Debug, Clone, Default)]
pub struct MatchingValueEvaluator<S = HungarianSolver> {
    solver: S,
}

impl MatchingValueEvaluator<HungarianSolver> {
    pub fn new() -> Self {
        Self::with_solver(HungarianSolver)
    }
}

impl<S: AssignmentSolver> MatchingValueEvaluator<S> {
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }
}

impl<S: AssignmentSolver> FitnessEvaluator for MatchingValueEvaluator<S> {
    fn evaluate(&self, problem: &ProblemInstance, individual: &Individual) -> f64 {
        let pieces = split_at_cuts(individual.cut_set().cuts(), problem.number_of_atoms());
        let matrix = valuation_matrix(problem, &pieces);
        self.solver.maximize(&matrix).total_value(&matrix)
    }
}
