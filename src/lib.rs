//! Fair division of a one-dimensional divisible resource.
//!
//! A "cake" of `M` atoms is valued differently by each of `N` players.
//! This crate searches for `N - 1` cut positions splitting it into `N`
//! contiguous pieces, then assigns pieces to players so that the total
//! value is maximal.
//!
//! - **Problem model** ([`problem`]): atoms, normalized per-player
//!   valuations, pieces, and the immutable problem instance.
//! - **Genetic search** ([`ga`]): evolves a population of cut sets with
//!   elitism, tournament selection, single-point crossover and uniform
//!   reset mutation, driven by one seedable RNG.
//! - **Fitness** ([`fitness`]): optimal-matching total value (default) or
//!   envy count under positional assignment.
//! - **Assignment** ([`assignment`]): exact Hungarian solver for the square
//!   maximum-weight bipartite matching problem.
//! - **Allocation** ([`allocation`]): turns the winning cut set into pieces,
//!   a player → piece bijection and the full valuation matrix.
//!
//! # Example
//!
//! ```
//! use u_fairdiv::ga::{AlgorithmConfig, GeneticAlgorithm};
//! use u_fairdiv::problem::ProblemInstance;
//!
//! let problem = ProblemInstance::from_dense(&[
//!     vec![0.2, 0.0, 0.0, 0.3, 0.5, 0.0, 0.0],
//!     vec![0.0, 0.4, 0.3, 0.0, 0.0, 0.3, 0.0],
//!     vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.4, 0.6],
//! ])
//! .unwrap();
//!
//! let config = AlgorithmConfig::new(40, 0.1).unwrap();
//! let mut ga = GeneticAlgorithm::seeded(problem, config, 7).unwrap();
//! let allocation = ga.evolve(50).unwrap();
//! assert_eq!(allocation.pieces().len(), 3);
//! ```
//!
//! # Architecture
//!
//! Single-threaded and synchronous. Fitness scoring of a generation's
//! offspring may fan out over rayon (feature `parallel`), which never
//! changes results: scoring is pure and all randomness stays on the
//! orchestrator's RNG.

pub mod allocation;
pub mod assignment;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod problem;
pub mod random;

pub use error::{ErrorKind, FairDivError, Result};
