//! Contiguous pieces of the resource.

use crate::error::{FairDivError, Result};

/// Half-open interval `[start, end)` of cut coordinates.
///
/// A piece contains every atom whose position `p` satisfies
/// `start < p <= end`. Zero-length pieces (`start == end`) are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPiece")
)]
pub struct Piece {
    start: usize,
    end: usize,
}

impl Piece {
    /// Creates a piece, failing with [`FairDivError::InvertedPiece`] if
    /// `end < start`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if end < start {
            return Err(FairDivError::InvertedPiece { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a piece between two cuts already known to be ordered.
    pub(crate) fn spanning(start: usize, end: usize) -> Self {
        debug_assert!(end >= start, "piece end {end} precedes start {start}");
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of atoms covered by this piece.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the atom at `position` belongs to this piece.
    pub fn contains(&self, position: usize) -> bool {
        position > self.start && position <= self.end
    }
}

/// Splits `[0, number_of_atoms)` at the given cuts.
///
/// `k` cuts yield `k + 1` pieces; the last one ends at `number_of_atoms`.
/// Fails if a cut exceeds `number_of_atoms` or the cuts are not ascending.
pub fn pieces_from_cuts(cuts: &[usize], number_of_atoms: usize) -> Result<Vec<Piece>> {
    validate_cuts(cuts, number_of_atoms)?;
    Ok(split_at_cuts(cuts, number_of_atoms))
}

/// Checks that `cuts` ascend and lie in `[0, number_of_atoms]`.
pub(crate) fn validate_cuts(cuts: &[usize], number_of_atoms: usize) -> Result<()> {
    if let Some(&cut) = cuts.iter().find(|&&c| c > number_of_atoms) {
        return Err(FairDivError::CutOutOfRange {
            cut,
            number_of_atoms,
        });
    }
    if let Some(i) = cuts.windows(2).position(|w| w[1] < w[0]) {
        return Err(FairDivError::CutsNotAscending { index: i + 1 });
    }
    Ok(())
}

/// [`pieces_from_cuts`] for cuts that have already been validated.
pub(crate) fn split_at_cuts(cuts: &[usize], number_of_atoms: usize) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for &cut in cuts {
        pieces.push(Piece::spanning(start, cut));
        start = cut;
    }
    pieces.push(Piece::spanning(start, number_of_atoms));
    pieces
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPiece {
    start: usize,
    end: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPiece> for Piece {
    type Error = FairDivError;

    fn try_from(raw: RawPiece) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}
