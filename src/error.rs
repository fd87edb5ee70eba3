//! Error types for the fair-division engine.
//!
//! Every failure is synchronous and raised at the point of construction or
//! validation. Nothing is retried: each variant describes a caller or input
//! defect, grouped into three [`ErrorKind`]s.

/// Broad classification of a [`FairDivError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid algorithm parameters.
    Config,
    /// Invalid problem data (valuations, atoms, matrices).
    Input,
    /// A cut configuration violated its structural invariants.
    Invariant,
}

/// Errors raised by the fair-division engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FairDivError {
    #[error("InvalidPopulationSize: population size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("InvalidMutationRate: mutation rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("InvalidTournamentSize: tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),

    #[error("TooFewPlayers: at least 2 players are required, got {found}")]
    TooFewPlayers { found: usize },

    #[error("NoAtoms: the resource must contain at least 1 atom")]
    NoAtoms,

    #[error("InvalidAtomPosition: atom positions start at 1, got {0}")]
    InvalidAtomPosition(usize),

    #[error("AtomValueOutOfRange: atom at position {position} has value {value}, expected [0, 1]")]
    AtomValueOutOfRange { position: usize, value: f64 },

    #[error("NotNormalized: valuations must sum to 1, got {sum}")]
    NotNormalized { sum: f64 },

    #[error("DuplicatePosition: atom position {0} appears more than once")]
    DuplicatePosition(usize),

    #[error("ValuationCountMismatch: player {player} has {found} valuations, expected {expected}")]
    ValuationCountMismatch {
        player: usize,
        expected: usize,
        found: usize,
    },

    #[error("NonSquareMatrix: row {row} has {found} columns, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("InvalidMatrixEntry: entry ({row}, {col}) is {value}, expected a finite non-negative value")]
    InvalidMatrixEntry { row: usize, col: usize, value: f64 },

    #[error("CutOutOfRange: cut {cut} lies outside [0, {number_of_atoms}]")]
    CutOutOfRange { cut: usize, number_of_atoms: usize },

    #[error("CutsNotAscending: cut at index {index} is smaller than its predecessor")]
    CutsNotAscending { index: usize },

    #[error("WrongCutCount: expected {expected} cuts, got {found}")]
    WrongCutCount { expected: usize, found: usize },

    #[error("TooManyCuts: cannot draw {requested} distinct cuts from {available} positions")]
    TooManyCuts { requested: usize, available: usize },

    #[error("InvertedPiece: piece end {end} precedes start {start}")]
    InvertedPiece { start: usize, end: usize },

    #[error("NotABijection: {player_to_piece:?} is not a permutation of piece indices")]
    NotABijection { player_to_piece: Vec<usize> },
}

impl FairDivError {
    /// Returns the taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPopulationSize(_)
            | Self::InvalidMutationRate(_)
            | Self::InvalidTournamentSize(_) => ErrorKind::Config,
            Self::TooFewPlayers { .. }
            | Self::NoAtoms
            | Self::InvalidAtomPosition(_)
            | Self::AtomValueOutOfRange { .. }
            | Self::NotNormalized { .. }
            | Self::DuplicatePosition(_)
            | Self::ValuationCountMismatch { .. }
            | Self::NonSquareMatrix { .. }
            | Self::InvalidMatrixEntry { .. } => ErrorKind::Input,
            Self::CutOutOfRange { .. }
            | Self::CutsNotAscending { .. }
            | Self::WrongCutCount { .. }
            | Self::TooManyCuts { .. }
            | Self::InvertedPiece { .. }
            | Self::NotABijection { .. } => ErrorKind::Invariant,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FairDivError>;
