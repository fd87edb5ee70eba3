//! Algorithm configuration.
//!
//! [`AlgorithmConfig`] holds the parameters that control the evolutionary
//! loop. The generation budget is not part of it: it is passed to each
//! [`evolve`](super::GeneticAlgorithm::evolve) call.

use crate::error::{FairDivError, Result};

/// Configuration for the cut-search genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_fairdiv::ga::AlgorithmConfig;
///
/// let config = AlgorithmConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_fairdiv::ga::AlgorithmConfig;
///
/// let config = AlgorithmConfig::new(50, 0.05)
///     .unwrap()
///     .with_tournament_size(4)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmConfig {
    /// Number of individuals in the population. Must be at least 1.
    pub population_size: usize,

    /// Per-cut probability of being reset to a random position (0.0–1.0).
    pub mutation_rate: f64,

    /// Contestants sampled per tournament. Must be at least 1.
    pub tournament_size: usize,

    /// Whether to score offspring in parallel using rayon.
    ///
    /// Only honoured when the `parallel` feature is enabled. Results are
    /// identical either way since scoring draws no randomness.
    pub parallel: bool,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            tournament_size: 3,
            parallel: true,
        }
    }
}

impl AlgorithmConfig {
    /// Creates a validated configuration with default tournament size and
    /// parallelism.
    pub fn new(population_size: usize, mutation_rate: f64) -> Result<Self> {
        let config = Self {
            population_size,
            mutation_rate,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(FairDivError::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(FairDivError::InvalidMutationRate(self.mutation_rate));
        }
        if self.tournament_size == 0 {
            return Err(FairDivError::InvalidTournamentSize(self.tournament_size));
        }
        Ok(())
    }
}
