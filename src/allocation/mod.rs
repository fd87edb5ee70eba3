//! Final allocation of pieces to players.
//!
//! [`AllocationSolver`] derives the pieces of the winning cut set, builds
//! the player x piece valuation matrix and assigns pieces by maximum-weight
//! matching. The result is packaged as an [`Allocation`].

mod solver;
mod types;

pub use solver::AllocationSolver;
pub use types::Allocation;
