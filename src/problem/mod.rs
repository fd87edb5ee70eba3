//! Problem data: atoms, player valuations, pieces, and the problem instance.
//!
//! Everything here is validated on construction and immutable afterwards.
//! The genetic search and the allocation step only ever read it.

mod atom;
mod instance;
mod piece;
mod valuations;

pub use atom::Atom;
pub use instance::ProblemInstance;
pub use piece::{pieces_from_cuts, Piece};
pub(crate) use piece::{split_at_cuts, validate_cuts};
pub use valuations::{PlayerValuations, NORMALIZATION_EPSILON};
