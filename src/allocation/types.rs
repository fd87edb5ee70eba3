//! Final division result.

use crate::assignment::{Assignment, ValuationMatrix};
use crate::fitness::envious_pairs;
use crate::problem::Piece;

/// The outcome of a division: pieces in cut order, the player → piece
/// bijection, and every player's value for every piece.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Allocation {
    pieces: Vec<Piece>,
    assignment: Assignment,
    valuations: ValuationMatrix,
}

impl Allocation {
    pub(crate) fn new(pieces: Vec<Piece>, assignment: Assignment, valuations: ValuationMatrix) -> Self {
        debug_assert_eq!(pieces.len(), assignment.len());
        debug_assert_eq!(pieces.len(), valuations.size());
        Self {
            pieces,
            assignment,
            valuations,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Player x piece valuation matrix.
    pub fn valuations(&self) -> &ValuationMatrix {
        &self.valuations
    }

    /// The piece assigned to `player`.
    pub fn piece_of(&self, player: usize) -> Piece {
        self.pieces[self.assignment.piece_of(player)]
    }

    /// `player`'s value for the piece they received.
    pub fn value_of(&self, player: usize) -> f64 {
        self.valuations.get(player, self.assignment.piece_of(player))
    }

    /// Sum of every player's value for their own piece.
    pub fn total_value(&self) -> f64 {
        self.assignment.total_value(&self.valuations)
    }

    /// Ordered `(envious, envied)` player pairs.
    pub fn envious_pairs(&self) -> Vec<(usize, usize)> {
        envious_pairs(&self.valuations, self.assignment.as_slice())
    }

    pub fn is_envy_free(&self) -> bool {
        self.envious_pairs().is_empty()
    }
}
