//! Hungarian algorithm for the maximum-weight assignment problem.
//!
//! Maximization is turned into minimization with
//! `cost[i][j] = max(matrix) - matrix[i][j]`. Row and column minima are
//! subtracted up front and kept as dual potentials; players are then
//! matched one at a time by shortest augmenting paths over zero reduced
//! cost edges, adjusting the potentials whenever no tight edge reaches a
//! free piece. The visited-piece marks are reset for every player.
//!
//! # Complexity
//! O(n³) time, O(n²) space.
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Munkres (1957), "Algorithms for the Assignment and Transportation Problems"

use super::matrix::{Assignment, ValuationMatrix};
use super::AssignmentSolver;

/// Exact solver for square maximum-weight bipartite assignment.
///
/// Ties between equally valuable assignments are broken by search order:
/// lower piece indices are tried first, and the first optimal augmenting
/// path found wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HungarianSolver;

impl HungarianSolver {
    pub fn new() -> Self {
        Self
    }
}

impl AssignmentSolver for HungarianSolver {
    fn maximize(&self, matrix: &ValuationMatrix) -> Assignment {
        let n = matrix.size();
        let Some(max) = matrix.max_value() else {
            return Assignment::from_permutation(Vec::new());
        };

        let cost: Vec<Vec<f64>> = matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|&v| max - v).collect())
            .collect();

        // 1-based potentials; index 0 is the virtual source column.
        let mut u = vec![0.0f64; n + 1];
        let mut v = vec![0.0f64; n + 1];
        for i in 1..=n {
            u[i] = cost[i - 1].iter().copied().fold(f64::INFINITY, f64::min);
        }
        for j in 1..=n {
            v[j] = (1..=n)
                .map(|i| cost[i - 1][j - 1] - u[i])
                .fold(f64::INFINITY, f64::min);
        }

        // owner[j]: player currently holding piece j (0 = free).
        let mut owner = vec![0usize; n + 1];
        let mut way = vec![0usize; n + 1];

        for player in 1..=n {
            owner[0] = player;
            let mut j0 = 0usize;
            let mut min_slack = vec![f64::INFINITY; n + 1];
            let mut visited = vec![false; n + 1];

            loop {
                visited[j0] = true;
                let i0 = owner[j0];
                let mut delta = f64::INFINITY;
                let mut j1 = 0usize;

                for j in 1..=n {
                    if visited[j] {
                        continue;
                    }
                    let reduced = cost[i0 - 1][j - 1] - u[i0] - v[j];
                    if reduced < min_slack[j] {
                        min_slack[j] = reduced;
                        way[j] = j0;
                    }
                    if min_slack[j] < delta {
                        delta = min_slack[j];
                        j1 = j;
                    }
                }

                for j in 0..=n {
                    if visited[j] {
                        u[owner[j]] += delta;
                        v[j] -= delta;
                    } else {
                        min_slack[j] -= delta;
                    }
                }

                j0 = j1;
                if owner[j0] == 0 {
                    break;
                }
            }

            // Flip the augmenting path back to the source.
            loop {
                let j1 = way[j0];
                owner[j0] = owner[j1];
                j0 = j1;
                if j0 == 0 {
                    break;
                }
            }
        }

        let mut player_to_piece = vec![0usize; n];
        for j in 1..=n {
            player_to_piece[owner[j] - 1] = j - 1;
        }
        Assignment::from_permutation(player_to_piece)
    }
}
