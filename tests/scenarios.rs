//! End-to-end scenarios: problem construction, search, and allocation.

use rand::rngs::StdRng;
use rand::RngCore;
use std::cell::RefCell;
use std::rc::Rc;
use u_fairdiv::allocation::AllocationSolver;
use u_fairdiv::assignment::{AssignmentSolver, HungarianSolver};
use u_fairdiv::fitness::{valuation_matrix, EnvyCountEvaluator, FitnessEvaluator, MatchingValueEvaluator};
use u_fairdiv::ga::{AlgorithmConfig, CutSet, GeneticAlgorithm, Individual};
use u_fairdiv::problem::{Atom, Piece, PlayerValuations, ProblemInstance};
use u_fairdiv::random::create_rng;
use u_fairdiv::{ErrorKind, FairDivError};

fn three_player_problem() -> ProblemInstance {
    ProblemInstance::from_dense(&[
        vec![0.2, 0.0, 0.0, 0.3, 0.5, 0.0, 0.0],
        vec![0.0, 0.4, 0.3, 0.0, 0.0, 0.3, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.4, 0.6],
    ])
    .unwrap()
}

fn separable_problem(n: usize) -> ProblemInstance {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();
    ProblemInstance::from_dense(&rows).unwrap()
}

fn sequential(population_size: usize, mutation_rate: f64) -> AlgorithmConfig {
    AlgorithmConfig::new(population_size, mutation_rate)
        .unwrap()
        .with_parallel(false)
}

fn piece(start: usize, end: usize) -> Piece {
    Piece::new(start, end).unwrap()
}

/// Records every 64-bit word the wrapped RNG hands out.
struct RecordingRng {
    inner: StdRng,
    log: Rc<RefCell<Vec<u64>>>,
}

impl RngCore for RecordingRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.inner.next_u32();
        self.log.borrow_mut().push(v as u64);
        v
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.inner.next_u64();
        self.log.borrow_mut().push(v);
        v
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst);
        self.log
            .borrow_mut()
            .extend(dst.iter().map(|&b| b as u64));
    }
}

#[test]
fn test_three_player_pieces_and_matrix() {
    let problem = three_player_problem();
    let cut_set = CutSet::new(vec![2, 4], problem.number_of_atoms()).unwrap();
    let pieces = cut_set.pieces();
    assert_eq!(pieces, vec![piece(0, 2), piece(2, 4), piece(4, 7)]);

    let matrix = valuation_matrix(&problem, &pieces);
    let expected = [[0.2, 0.3, 0.5], [0.4, 0.3, 0.3], [0.0, 0.0, 1.0]];
    for (i, row) in expected.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            assert!((matrix.get(i, j) - v).abs() < 1e-12, "entry ({i}, {j})");
        }
    }

    let assignment = HungarianSolver.maximize(&matrix);
    assert_eq!(assignment.as_slice(), &[1, 0, 2]);
    assert!((assignment.total_value(&matrix) - 1.7).abs() < 1e-12);
}

#[test]
fn test_degenerate_cut_sets_evaluate() {
    let problem = three_player_problem();
    let expected_pieces = [
        (vec![0, 0], vec![piece(0, 0), piece(0, 0), piece(0, 7)]),
        (vec![7, 7], vec![piece(0, 7), piece(7, 7), piece(7, 7)]),
    ];

    for (cuts, pieces) in expected_pieces {
        let cut_set = CutSet::new(cuts, 7).unwrap();
        assert_eq!(cut_set.pieces(), pieces);

        let individual = Individual::new(cut_set);
        let envy = EnvyCountEvaluator.evaluate(&problem, &individual);
        let matching = MatchingValueEvaluator::new().evaluate(&problem, &individual);
        assert!(envy.is_finite() && envy <= 0.0, "envy fitness {envy}");
        assert!((matching - 1.0).abs() < 1e-12, "matching fitness {matching}");

        let allocation = AllocationSolver::new().solve(&individual, &problem).unwrap();
        assert_eq!(allocation.pieces(), pieces.as_slice());
    }
}

#[test]
fn test_separable_instance_envy_search() {
    let problem = separable_problem(3);
    let mut ga = GeneticAlgorithm::new(
        problem,
        sequential(30, 0.2),
        EnvyCountEvaluator,
        create_rng(42),
    )
    .unwrap();

    let best = ga.evolve_best(30).unwrap();
    assert_eq!(best.fitness(), 0.0, "cuts {:?}", best.cut_set().cuts());
    assert_eq!(best.cut_set().cuts(), &[1, 2]);

    let allocation = ga.allocate(&best).unwrap();
    for player in 0..3 {
        assert_eq!(allocation.assignment().piece_of(player), player);
        assert!((allocation.value_of(player) - 1.0).abs() < 1e-12);
    }
    assert!(allocation.is_envy_free());
}

#[test]
fn test_separable_instance_matching_search() {
    let problem = separable_problem(4);
    let mut ga = GeneticAlgorithm::seeded(problem, sequential(40, 0.2), 5).unwrap();
    let allocation = ga.evolve(40).unwrap();

    assert!((allocation.total_value() - 4.0).abs() < 1e-9);
    for player in 0..4 {
        assert_eq!(allocation.piece_of(player), piece(player, player + 1));
    }
}

#[test]
fn test_identical_seeds_identical_runs() {
    let log_a = Rc::new(RefCell::new(Vec::new()));
    let log_b = Rc::new(RefCell::new(Vec::new()));

    let rng_a = RecordingRng {
        inner: create_rng(2024),
        log: Rc::clone(&log_a),
    };
    let rng_b = RecordingRng {
        inner: create_rng(2024),
        log: Rc::clone(&log_b),
    };

    let config = sequential(25, 0.15);
    let mut a = GeneticAlgorithm::new(three_player_problem(), config.clone(), MatchingValueEvaluator::new(), rng_a)
        .unwrap();
    let mut b = GeneticAlgorithm::new(three_player_problem(), config, MatchingValueEvaluator::new(), rng_b)
        .unwrap();

    let alloc_a = a.evolve(25).unwrap();
    let alloc_b = b.evolve(25).unwrap();

    assert!(!log_a.borrow().is_empty());
    assert_eq!(*log_a.borrow(), *log_b.borrow());
    assert_eq!(alloc_a, alloc_b);
    assert_eq!(a.fitness_history(), b.fitness_history());
}

#[test]
fn test_best_fitness_never_regresses() {
    for seed in [1u64, 2, 3] {
        let mut ga = GeneticAlgorithm::seeded(three_player_problem(), sequential(15, 0.3), seed).unwrap();
        let mut previous = ga.best().fitness();
        for _ in 0..20 {
            let best = ga.evolve_best(1).unwrap();
            assert!(
                best.fitness() >= previous,
                "seed {seed}: best fitness fell from {previous} to {}",
                best.fitness()
            );
            previous = best.fitness();
        }
    }
}

#[test]
fn test_longer_run_at_least_as_good() {
    for g in [0usize, 3, 10] {
        let mut shorter = GeneticAlgorithm::seeded(three_player_problem(), sequential(20, 0.1), 99).unwrap();
        let mut longer = GeneticAlgorithm::seeded(three_player_problem(), sequential(20, 0.1), 99).unwrap();
        let a = shorter.evolve_best(g).unwrap();
        let b = longer.evolve_best(g + 1).unwrap();
        assert!(b.fitness() >= a.fitness(), "g={g}: {} < {}", b.fitness(), a.fitness());
    }
}

#[test]
fn test_every_population_member_keeps_cut_invariant() {
    let mut ga = GeneticAlgorithm::seeded(three_player_problem(), sequential(30, 0.5), 8).unwrap();
    for _ in 0..10 {
        ga.evolve_best(1).unwrap();
        for ind in ga.population() {
            let cuts = ind.cut_set().cuts();
            assert_eq!(cuts.len(), 2);
            assert!(cuts.windows(2).all(|w| w[0] <= w[1]), "{cuts:?}");
            assert!(cuts.iter().all(|&c| c <= 7), "{cuts:?}");
        }
    }
}

#[test]
fn test_input_validation_failures() {
    let not_normalized = ProblemInstance::from_dense(&[vec![0.5, 0.4], vec![0.5, 0.5]]).unwrap_err();
    assert_eq!(not_normalized.kind(), ErrorKind::Input);

    let single = ProblemInstance::from_dense(&[vec![1.0]]).unwrap_err();
    assert_eq!(single, FairDivError::TooFewPlayers { found: 1 });

    let duplicate = PlayerValuations::new(vec![
        Atom::new(2, 0.5).unwrap(),
        Atom::new(2, 0.5).unwrap(),
    ])
    .unwrap_err();
    assert_eq!(duplicate, FairDivError::DuplicatePosition(2));

    let bad_config = AlgorithmConfig::new(0, 0.1).unwrap_err();
    assert_eq!(bad_config.kind(), ErrorKind::Config);

    let bad_cuts = CutSet::new(vec![5, 3], 7).unwrap_err();
    assert_eq!(bad_cuts.kind(), ErrorKind::Invariant);
}

#[test]
fn test_sparse_players_share_position_space() {
    let p0 = PlayerValuations::new(vec![Atom::new(1, 0.5).unwrap(), Atom::new(2, 0.5).unwrap()]).unwrap();
    let p1 = PlayerValuations::new(vec![Atom::new(5, 1.0).unwrap()]).unwrap();
    let problem = ProblemInstance::new(vec![p0, p1]).unwrap();
    assert_eq!(problem.number_of_atoms(), 5);

    let mut ga = GeneticAlgorithm::seeded(problem, sequential(20, 0.1), 3).unwrap();
    let allocation = ga.evolve(20).unwrap();
    assert!((allocation.total_value() - 2.0).abs() < 1e-9);
}
