//! Per-player valuation of the resource.

use super::atom::Atom;
use super::piece::Piece;
use crate::error::{FairDivError, Result};
use std::collections::HashSet;
use tracing::instrument;

/// Tolerance for the normalization check on a player's total valuation.
pub const NORMALIZATION_EPSILON: f64 = 1e-10;

/// One player's valuation of the whole resource.
///
/// Atoms are kept sorted by position. Positions are unique and the values
/// sum to 1 within [`NORMALIZATION_EPSILON`]. Positions the player has no
/// atom for are valued at 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawValuations")
)]
pub struct PlayerValuations {
    atoms: Vec<Atom>,
}

impl PlayerValuations {
    /// Validates and stores a player's atoms.
    #[instrument(level = "debug", skip(atoms), fields(atom_count = atoms.len()))]
    pub fn new(mut atoms: Vec<Atom>) -> Result<Self> {
        let sum: f64 = atoms.iter().map(Atom::value).sum();
        if (sum - 1.0).abs() > NORMALIZATION_EPSILON {
            return Err(FairDivError::NotNormalized { sum });
        }

        let mut seen = HashSet::with_capacity(atoms.len());
        for atom in &atoms {
            if !seen.insert(atom.position()) {
                return Err(FairDivError::DuplicatePosition(atom.position()));
            }
        }

        atoms.sort_by_key(Atom::position);
        Ok(Self { atoms })
    }

    /// Builds valuations from a dense array where `values[i]` is the value
    /// of the atom at position `i + 1`.
    pub fn from_dense(values: &[f64]) -> Result<Self> {
        let atoms = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Atom::new(i + 1, v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(atoms)
    }

    /// Atoms sorted by position.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn number_of_valuations(&self) -> usize {
        self.atoms.len()
    }

    /// Highest atom position this player values, or 0 if none.
    pub fn max_position(&self) -> usize {
        self.atoms.last().map_or(0, Atom::position)
    }

    /// Value of the atom at `position`; 0 when the player has no atom there.
    pub fn value_at(&self, position: usize) -> f64 {
        self.atoms
            .binary_search_by_key(&position, Atom::position)
            .map_or(0.0, |idx| self.atoms[idx].value())
    }

    /// Total value of the atoms contained in `piece`.
    pub fn value_of(&self, piece: &Piece) -> f64 {
        let lo = self.atoms.partition_point(|a| a.position() <= piece.start());
        let hi = self.atoms.partition_point(|a| a.position() <= piece.end());
        self.atoms[lo..hi].iter().map(Atom::value).sum()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawValuations {
    atoms: Vec<Atom>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawValuations> for PlayerValuations {
    type Error = FairDivError;

    fn try_from(raw: RawValuations) -> Result<Self> {
        Self::new(raw.atoms)
    }
}
