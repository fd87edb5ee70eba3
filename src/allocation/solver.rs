//! Piece-to-player allocation of a winning cut configuration.

use super::types::Allocation;
use crate::assignment::{AssignmentSolver, HungarianSolver};
use crate::error::{FairDivError, Result};
use crate::fitness::valuation_matrix;
use crate::ga::Individual;
use crate::problem::{split_at_cuts, ProblemInstance};
use tracing::{debug, instrument};

/// Turns an [`Individual`] into an [`Allocation`] by optimal matching.
///
/// The pieces come from the individual's cut set; players receive them
/// according to the value-maximizing bijection found by the injected
/// [`AssignmentSolver`], independent of the fitness strategy that drove
/// the search.
#[derive(Debug, Clone, Default)]
pub struct AllocationSolver<S = HungarianSolver> {
    solver: S,
}

impl AllocationSolver<HungarianSolver> {
    pub fn new() -> Self {
        Self::with_solver(HungarianSolver)
    }
}

impl<S: AssignmentSolver> AllocationSolver<S> {
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }

    /// Builds the allocation for `individual` on `problem`.
    ///
    /// Fails if the cut set does not match the problem: wrong number of
    /// cuts for the player count, or a cut past the last atom.
    #[instrument(level = "debug", skip_all, fields(cuts = ?individual.cut_set().cuts()))]
    pub fn solve(&self, individual: &Individual, problem: &ProblemInstance) -> Result<Allocation> {
        let cut_set = individual.cut_set();
        if cut_set.number_of_cuts() != problem.number_of_cuts() {
            return Err(FairDivError::WrongCutCount {
                expected: problem.number_of_cuts(),
                found: cut_set.number_of_cuts(),
            });
        }
        let number_of_atoms = problem.number_of_atoms();
        if let Some(&cut) = cut_set.cuts().iter().find(|&&c| c > number_of_atoms) {
            return Err(FairDivError::CutOutOfRange {
                cut,
                number_of_atoms,
            });
        }

        let pieces = split_at_cuts(cut_set.cuts(), number_of_atoms);
        let matrix = valuation_matrix(problem, &pieces);
        let assignment = self.solver.maximize(&matrix);
        debug!(total_value = assignment.total_value(&matrix), "allocation solved");

        Ok(Allocation::new(pieces, assignment, matrix))
    }
}
