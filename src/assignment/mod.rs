//! Exact player-to-piece assignment.
//!
//! Both the matching-value fitness strategy and the final allocation step
//! reduce to the same problem: given a square matrix of player valuations
//! per piece, find the bijection with the largest total value.
//!
//! # Key Types
//!
//! - [`ValuationMatrix`]: Square player x piece value matrix
//! - [`Assignment`]: Player → piece bijection
//! - [`AssignmentSolver`]: Strategy trait for solving the assignment problem
//! - [`HungarianSolver`]: O(n³) exact solver

mod hungarian;
mod matrix;

pub use hungarian::HungarianSolver;
pub use matrix::{Assignment, ValuationMatrix};

/// Solves the square maximum-weight assignment problem.
///
/// Implementations must return a bijection: every player and every piece
/// appears exactly once.
pub trait AssignmentSolver: Send + Sync {
    /// Returns the player → piece bijection maximizing the summed value.
    fn maximize(&self, matrix: &ValuationMatrix) -> Assignment;
}

impl<S: AssignmentSolver + ?Sized> AssignmentSolver for &S {
    fn maximize(&self, matrix: &ValuationMatrix) -> Assignment {
        (**self).maximize(matrix)
    }
}

impl<S: AssignmentSolver + ?Sized> AssignmentSolver for Box<S> {
    fn maximize(&self, matrix: &ValuationMatrix) -> Assignment {
        (**self).maximize(matrix)
    }
}
