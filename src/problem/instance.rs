//! Immutable problem instance.

use super::valuations::PlayerValuations;
use crate::error::{FairDivError, Result};
use tracing::instrument;

/// The valuations of every player over a shared position space `1..=M`.
///
/// `M` ([`number_of_atoms`](Self::number_of_atoms)) is the highest atom
/// position any player values. Built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawInstance")
)]
pub struct ProblemInstance {
    players: Vec<PlayerValuations>,
    number_of_atoms: usize,
}

impl ProblemInstance {
    /// Creates an instance from validated player valuations.
    ///
    /// Fails with [`FairDivError::TooFewPlayers`] for fewer than 2 players
    /// and [`FairDivError::NoAtoms`] when no player values any atom.
    #[instrument(level = "debug", skip(players), fields(player_count = players.len()))]
    pub fn new(players: Vec<PlayerValuations>) -> Result<Self> {
        if players.len() < 2 {
            return Err(FairDivError::TooFewPlayers {
                found: players.len(),
            });
        }

        let number_of_atoms = players
            .iter()
            .map(PlayerValuations::max_position)
            .max()
            .unwrap_or(0);
        if number_of_atoms < 1 {
            return Err(FairDivError::NoAtoms);
        }

        Ok(Self {
            players,
            number_of_atoms,
        })
    }

    /// Creates an instance from dense per-player valuation rows.
    ///
    /// Row `i` holds player `i`'s value for positions `1..=len`. Every row
    /// must have the same length.
    pub fn from_dense(rows: &[Vec<f64>]) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        let players = rows
            .iter()
            .enumerate()
            .map(|(player, row)| {
                if row.len() != expected {
                    return Err(FairDivError::ValuationCountMismatch {
                        player,
                        expected,
                        found: row.len(),
                    });
                }
                PlayerValuations::from_dense(row)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(players)
    }

    pub fn players(&self) -> &[PlayerValuations] {
        &self.players
    }

    pub fn number_of_players(&self) -> usize {
        self.players.len()
    }

    pub fn number_of_atoms(&self) -> usize {
        self.number_of_atoms
    }

    /// Cuts needed to split the resource into one piece per player.
    pub fn number_of_cuts(&self) -> usize {
        self.players.len() - 1
    }
}

// `number_of_atoms` is derived from the players on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    players: Vec<PlayerValuations>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for ProblemInstance {
    type Error = FairDivError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Self::new(raw.players)
    }
}
