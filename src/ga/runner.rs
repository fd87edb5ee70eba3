//! Evolutionary loop over cut configurations.
//!
//! [`GeneticAlgorithm`] orchestrates the search:
//! initialization → evaluation → elitism → tournament selection →
//! crossover → mutation → evaluation → repeat, then hands the best
//! individual to the [`AllocationSolver`].

use super::config::AlgorithmConfig;
use super::operators::{single_point_crossover, uniform_reset_mutation};
use super::selection::{fittest, tournament};
use super::types::{CutSet, Individual};
use crate::allocation::{Allocation, AllocationSolver};
use crate::assignment::{AssignmentSolver, HungarianSolver};
use crate::error::Result;
use crate::fitness::{FitnessEvaluator, MatchingValueEvaluator};
use crate::problem::ProblemInstance;
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Result of one [`evolve_with_cancel`](GeneticAlgorithm::evolve_with_cancel) call.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    /// The fittest individual of the final population.
    pub best: Individual,

    /// Generations executed by this call.
    pub generations: usize,

    /// Whether the call stopped early on the cancellation flag.
    pub cancelled: bool,
}

/// Genetic search for cut positions, followed by optimal allocation.
///
/// Owns the problem, the population and the single RNG every randomized
/// step draws from. Two instances built with the same problem, config,
/// strategies and RNG seed produce identical runs.
///
/// The population is replaced wholesale every generation: children are
/// built from a read-only view of the current generation into a new
/// vector, which then becomes the population.
///
/// # Usage
///
/// ```
/// use u_fairdiv::ga::{AlgorithmConfig, GeneticAlgorithm};
/// use u_fairdiv::problem::ProblemInstance;
///
/// let problem = ProblemInstance::from_dense(&[
///     vec![0.5, 0.5, 0.0, 0.0],
///     vec![0.0, 0.0, 0.5, 0.5],
/// ])
/// .unwrap();
/// let config = AlgorithmConfig::new(20, 0.1).unwrap();
/// let mut ga = GeneticAlgorithm::seeded(problem, config, 42).unwrap();
/// let allocation = ga.evolve(10).unwrap();
/// assert!((allocation.total_value() - 2.0).abs() < 1e-9);
/// ```
pub struct GeneticAlgorithm<E = MatchingValueEvaluator, R = StdRng, S = HungarianSolver> {
    problem: ProblemInstance,
    config: AlgorithmConfig,
    evaluator: E,
    allocator: AllocationSolver<S>,
    rng: R,
    population: Vec<Individual>,
    generation: usize,
    fitness_history: Vec<f64>,
}

impl GeneticAlgorithm<MatchingValueEvaluator, StdRng, HungarianSolver> {
    /// Builds an instance with the default strategies and a seeded RNG.
    pub fn seeded(problem: ProblemInstance, config: AlgorithmConfig, seed: u64) -> Result<Self> {
        Self::new(problem, config, MatchingValueEvaluator::new(), create_rng(seed))
    }
}

impl<E: FitnessEvaluator, R: Rng> GeneticAlgorithm<E, R, HungarianSolver> {
    /// Builds an instance with the given fitness strategy and RNG, and the
    /// default Hungarian allocator.
    pub fn new(problem: ProblemInstance, config: AlgorithmConfig, evaluator: E, rng: R) -> Result<Self> {
        Self::with_allocator(problem, config, evaluator, AllocationSolver::new(), rng)
    }
}

impl<E: FitnessEvaluator, R: Rng, S: AssignmentSolver> GeneticAlgorithm<E, R, S> {
    /// Builds an instance with every strategy injected explicitly.
    ///
    /// Validates `config` and seeds a scored initial population of
    /// `population_size` random cut sets.
    #[instrument(level = "debug", skip_all, fields(
        players = problem.number_of_players(),
        atoms = problem.number_of_atoms(),
        population_size = config.population_size,
    ))]
    pub fn with_allocator(
        problem: ProblemInstance,
        config: AlgorithmConfig,
        evaluator: E,
        allocator: AllocationSolver<S>,
        mut rng: R,
    ) -> Result<Self> {
        config.validate()?;

        let number_of_cuts = problem.number_of_cuts();
        let number_of_atoms = problem.number_of_atoms();
        let mut population = (0..config.population_size)
            .map(|_| CutSet::random(number_of_cuts, number_of_atoms, &mut rng).map(Individual::new))
            .collect::<Result<Vec<_>>>()?;
        evaluate_population(&problem, &evaluator, &mut population, config.parallel);

        let best = population[fittest(&population)].fitness();
        debug!(best_fitness = best, "initial population scored");

        Ok(Self {
            problem,
            config,
            evaluator,
            allocator,
            rng,
            population,
            generation: 0,
            fitness_history: vec![best],
        })
    }

    /// Runs `generations` more generations and returns the allocation of
    /// the best individual.
    pub fn evolve(&mut self, generations: usize) -> Result<Allocation> {
        let outcome = self.evolve_with_cancel(generations, None)?;
        self.allocate(&outcome.best)
    }

    /// Runs `generations` more generations and returns the best individual.
    pub fn evolve_best(&mut self, generations: usize) -> Result<Individual> {
        Ok(self.evolve_with_cancel(generations, None)?.best)
    }

    /// Runs up to `generations` more generations.
    ///
    /// If `cancel` is set, it is checked at every generation boundary; once
    /// it reads `true` the loop stops and the best individual of the
    /// current population is returned.
    pub fn evolve_with_cancel(
        &mut self,
        generations: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolutionOutcome> {
        info!(
            generations,
            population_size = self.config.population_size,
            start_generation = self.generation,
            "starting evolution"
        );

        let mut executed = 0usize;
        let mut cancelled = false;

        for _ in 0..generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    warn!(generation = self.generation, "evolution cancelled");
                    break;
                }
            }

            self.step()?;
            executed += 1;
        }

        let best = self.best().clone();
        info!(
            executed,
            cancelled,
            best_fitness = best.fitness(),
            "evolution finished"
        );

        Ok(EvolutionOutcome {
            best,
            generations: executed,
            cancelled,
        })
    }

    /// Produces one new generation and replaces the current one.
    fn step(&mut self) -> Result<()> {
        let size = self.config.population_size;

        // Elitism: the fittest survives unchanged.
        let mut next_gen = Vec::with_capacity(size);
        next_gen.push(self.population[fittest(&self.population)].clone());

        while next_gen.len() < size {
            let p1 = tournament(&self.population, self.config.tournament_size, &mut self.rng);
            let p2 = tournament(&self.population, self.config.tournament_size, &mut self.rng);

            let child = single_point_crossover(
                self.population[p1].cut_set(),
                self.population[p2].cut_set(),
                &mut self.rng,
            )?;
            let child = uniform_reset_mutation(&child, self.config.mutation_rate, &mut self.rng)?;

            next_gen.push(Individual::new(child));
        }

        evaluate_population(
            &self.problem,
            &self.evaluator,
            &mut next_gen[1..],
            self.config.parallel,
        );

        self.population = next_gen;
        self.generation += 1;

        let best = self.best().fitness();
        self.fitness_history.push(best);
        debug!(
            generation = self.generation,
            best_fitness = best,
            mean_fitness = mean_fitness(&self.population),
            "generation complete"
        );
        Ok(())
    }

    /// Allocates the pieces of `individual` to players by optimal matching.
    pub fn allocate(&self, individual: &Individual) -> Result<Allocation> {
        self.allocator.solve(individual, &self.problem)
    }

    /// The fittest individual of the current population.
    pub fn best(&self) -> &Individual {
        &self.population[fittest(&self.population)]
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Generations executed so far across all `evolve*` calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness after initialization and after every generation.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    pub fn problem(&self) -> &ProblemInstance {
        &self.problem
    }

    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }
}

/// Scores every individual in `population`.
#[cfg(feature = "parallel")]
fn evaluate_population<E: FitnessEvaluator>(
    problem: &ProblemInstance,
    evaluator: &E,
    population: &mut [Individual],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = evaluator.evaluate(problem, ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, evaluator, population);
    }
}

/// Scores every individual in `population`.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<E: FitnessEvaluator>(
    problem: &ProblemInstance,
    evaluator: &E,
    population: &mut [Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, evaluator, population);
}

fn evaluate_sequential<E: FitnessEvaluator>(
    problem: &ProblemInstance,
    evaluator: &E,
    population: &mut [Individual],
) {
    for ind in population.iter_mut() {
        let f = evaluator.evaluate(problem, ind);
        ind.set_fitness(f);
    }
}

fn mean_fitness(population: &[Individual]) -> f64 {
    population.iter().map(Individual::fitness).sum::<f64>() / population.len() as f64
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FairDivError;
    use crate::fitness::EnvyCountEvaluator;

    fn scenario() -> ProblemInstance {
        ProblemInstance::from_dense(&[
            vec![0.2, 0.0, 0.0, 0.3, 0.5, 0.0, 0.0],
            vec![0.0, 0.4, 0.3, 0.0, 0.0, 0.3, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.4, 0.6],
        ])
        .unwrap()
    }

    fn config(population_size: usize) -> AlgorithmConfig {
        AlgorithmConfig::new(population_size, 0.1)
            .unwrap()
            .with_parallel(false)
    }

    #[test]
    fn test_initial_population() {
        let ga = GeneticAlgorithm::seeded(scenario(), config(30), 42).unwrap();
        assert_eq!(ga.population().len(), 30);
        assert_eq!(ga.generation(), 0);
        assert_eq!(ga.fitness_history().len(), 1);
        for ind in ga.population() {
            assert_eq!(ind.number_of_cuts(), 2);
            assert!(ind.fitness().is_finite(), "initial individuals must be scored");
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = AlgorithmConfig::default().with_mutation_rate(1.5);
        let err = GeneticAlgorithm::seeded(scenario(), bad, 1).err();
        assert_eq!(err, Some(FairDivError::InvalidMutationRate(1.5)));
    }

    #[test]
    fn test_population_size_constant() {
        let mut ga = GeneticAlgorithm::seeded(scenario(), config(17), 3).unwrap();
        ga.evolve_best(5).unwrap();
        assert_eq!(ga.population().len(), 17);
        assert_eq!(ga.generation(), 5);
        assert_eq!(ga.fitness_history().len(), 6);
    }

    #[test]
    fn test_population_of_one() {
        let mut ga = GeneticAlgorithm::seeded(scenario(), config(1), 9).unwrap();
        let before = ga.best().clone();
        let after = ga.evolve_best(3).unwrap();
        assert_eq!(before, after, "a lone elite survives unchanged");
    }

    #[test]
    fn test_zero_generations() {
        let mut ga = GeneticAlgorithm::seeded(scenario(), config(10), 5).unwrap();
        let initial_best = ga.best().clone();
        let outcome = ga.evolve_with_cancel(0, None).unwrap();
        assert_eq!(outcome.generations, 0);
        assert_eq!(outcome.best, initial_best);
    }

    #[test]
    fn test_elite_preservation() {
        let mut ga = GeneticAlgorithm::seeded(scenario(), config(20), 42).unwrap();
        ga.evolve_best(30).unwrap();

        for window in ga.fitness_history().windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness must not regress with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_finds_scenario_optimum() {
        // Best possible total: p0 gets [3,5) = 0.8, p1 [0,3) = 0.7,
        // p2 [5,7) = 1.0.
        let mut ga = GeneticAlgorithm::seeded(scenario(), config(50), 42).unwrap();
        let allocation = ga.evolve(60).unwrap();
        assert!(
            allocation.total_value() >= 2.5 - 1e-9,
            "expected total value 2.5, got {}",
            allocation.total_value()
        );
    }

    #[test]
    fn test_envy_strategy() {
        let mut ga =
            GeneticAlgorithm::new(scenario(), config(40), EnvyCountEvaluator, create_rng(11))
                .unwrap();
        let best = ga.evolve_best(40).unwrap();
        assert!(best.fitness() <= 0.0);
        assert!(best.fitness() >= -6.0);
        let allocation = ga.allocate(&best).unwrap();
        assert_eq!(allocation.pieces().len(), 3);
    }

    #[test]
    fn test_cancellation_before_start() {
        let mut ga = GeneticAlgorithm::seeded(scenario(), config(10), 42).unwrap();
        let cancel = Arc::new(AtomicBool::new(true));
        let outcome = ga.evolve_with_cancel(100, Some(cancel)).unwrap();
        assert!(outcome.cancelled);
        assert_eq!(outcome.generations, 0);
        assert_eq!(ga.generation(), 0);
    }

    #[test]
    fn test_cancellation_from_other_thread() {
        let mut ga = GeneticAlgorithm::seeded(scenario(), config(50), 42).unwrap();
        let cancel = Arc::new(AtomicBool::new(false));

        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(10));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let outcome = ga.evolve_with_cancel(10_000_000, Some(cancel)).unwrap();
        assert!(outcome.cancelled, "expected cancelled result");
        assert!(outcome.generations < 10_000_000);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GeneticAlgorithm::seeded(scenario(), config(25), 1234).unwrap();
        let mut b = GeneticAlgorithm::seeded(scenario(), config(25), 1234).unwrap();
        assert_eq!(a.evolve(20).unwrap(), b.evolve(20).unwrap());
        assert_eq!(a.population(), b.population());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let mut seq = GeneticAlgorithm::seeded(scenario(), config(30), 77).unwrap();
        let mut par =
            GeneticAlgorithm::seeded(scenario(), config(30).with_parallel(true), 77).unwrap();
        assert_eq!(seq.evolve(15).unwrap(), par.evolve(15).unwrap());
    }
}
