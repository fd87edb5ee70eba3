//! Indivisible resource unit.

use crate::error::{FairDivError, Result};
use tracing::instrument;

/// One indivisible unit of the resource as valued by one player.
///
/// The atom at position `p` occupies the unit interval `[p - 1, p)` of the
/// cut coordinate space, so positions start at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawAtom")
)]
pub struct Atom {
    position: usize,
    value: f64,
}

impl Atom {
    /// Creates an atom, validating `position >= 1` and `value` in `[0, 1]`.
    #[instrument(level = "debug")]
    pub fn new(position: usize, value: f64) -> Result<Self> {
        if position < 1 {
            return Err(FairDivError::InvalidAtomPosition(position));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(FairDivError::AtomValueOutOfRange { position, value });
        }
        Ok(Self { position, value })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAtom {
    position: usize,
    value: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAtom> for Atom {
    type Error = FairDivError;

    fn try_from(raw: RawAtom) -> Result<Self> {
        Self::new(raw.position, raw.value)
    }
}
