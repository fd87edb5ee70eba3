//! Square valuation matrices and player-to-piece assignments.

use crate::error::{FairDivError, Result};

/// Square `n x n` matrix where entry `(i, j)` is player `i`'s value for
/// piece `j`.
///
/// Entries are finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix")
)]
pub struct ValuationMatrix {
    rows: Vec<Vec<f64>>,
}

impl ValuationMatrix {
    /// Wraps `rows`, checking that the matrix is square and every entry is
    /// finite and non-negative.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(FairDivError::NonSquareMatrix {
                row,
                expected: n,
                found: r.len(),
            });
        }
        for (row, r) in rows.iter().enumerate() {
            if let Some((col, &value)) = r.iter().enumerate().find(|(_, &v)| !is_valid_entry(v)) {
                return Err(FairDivError::InvalidMatrixEntry { row, col, value });
            }
        }
        Ok(Self { rows })
    }

    /// Builds an `n x n` matrix from `f(row, col)`.
    ///
    /// `f` must return finite non-negative values, as piece valuations do.
    pub(crate) fn from_fn<F: FnMut(usize, usize) -> f64>(n: usize, mut f: F) -> Self {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| f(i, j)).collect())
            .collect();
        debug_assert!(
            rows.iter().flatten().all(|&v| is_valid_entry(v)),
            "valuation matrix entries must be finite and non-negative"
        );
        Self { rows }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Largest entry, or `None` for an empty matrix.
    pub fn max_value(&self) -> Option<f64> {
        self.rows.iter().flatten().copied().reduce(f64::max)
    }
}

/// A bijection from players to pieces: `piece_of(i)` is player `i`'s piece.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawAssignment")
)]
pub struct Assignment {
    player_to_piece: Vec<usize>,
}

impl Assignment {
    /// Wraps a player → piece mapping.
    ///
    /// Fails with [`FairDivError::NotABijection`] unless `player_to_piece`
    /// is a permutation of `0..len`.
    pub fn new(player_to_piece: Vec<usize>) -> Result<Self> {
        if !is_permutation(&player_to_piece) {
            return Err(FairDivError::NotABijection { player_to_piece });
        }
        Ok(Self { player_to_piece })
    }

    /// Wraps a mapping the caller has already built as a permutation.
    pub(crate) fn from_permutation(player_to_piece: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&player_to_piece), "{player_to_piece:?}");
        Self { player_to_piece }
    }

    pub fn piece_of(&self, player: usize) -> usize {
        self.player_to_piece[player]
    }

    /// Piece index per player, in player order.
    pub fn as_slice(&self) -> &[usize] {
        &self.player_to_piece
    }

    pub fn len(&self) -> usize {
        self.player_to_piece.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_to_piece.is_empty()
    }

    /// Sum of the selected entries of `matrix`.
    pub fn total_value(&self, matrix: &ValuationMatrix) -> f64 {
        self.player_to_piece
            .iter()
            .enumerate()
            .map(|(player, &piece)| matrix.get(player, piece))
            .sum()
    }
}

impl From<Assignment> for Vec<usize> {
    fn from(a: Assignment) -> Self {
        a.player_to_piece
    }
}

fn is_valid_entry(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn is_permutation(indices: &[usize]) -> bool {
    let mut seen = vec![false; indices.len()];
    indices.iter().all(|&i| i < seen.len() && !std::mem::replace(&mut seen[i], true))
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    rows: Vec<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for ValuationMatrix {
    type Error = FairDivError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::new(raw.rows)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAssignment {
    player_to_piece: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAssignment> for Assignment {
    type Error = FairDivError;

    fn try_from(raw: RawAssignment) -> Result<Self> {
        Self::new(raw.player_to_piece)
    }
}
