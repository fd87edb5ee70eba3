//! Genetic search over cut configurations.
//!
//! The chromosome is a [`CutSet`]: `number_of_players - 1` ascending cut
//! positions over the resource. The search maximizes the fitness assigned
//! by a pluggable [`FitnessEvaluator`](crate::fitness::FitnessEvaluator).
//!
//! # Key Types
//!
//! - [`AlgorithmConfig`]: Population size, mutation rate, tournament size
//! - [`CutSet`] / [`Individual`]: Genome and scored candidate
//! - [`GeneticAlgorithm`]: Executes the evolutionary loop and allocation
//! - [`EvolutionOutcome`]: Per-call result with cancellation status
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and uniform reset mutation
//! - [`selection`]: Tournament selection and elite lookup
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::AlgorithmConfig;
pub use runner::{EvolutionOutcome, GeneticAlgorithm};
pub use types::{CutSet, Individual};
