use itertools::assert_equal;
use model::base_types::{CompanyIdx, Score, StudentIdx};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use solution::satisfaction::satisfaction_score;
use solution::test_utilities::{build_instance, init_scenario_a};

use super::progress::CallbackError;
use super::*;
use crate::test_utilities::{quick_config, random_instance};

fn greedy_seed(
    students: &Arc<Students>,
    companies: &Arc<Companies>,
    config: &Arc<Config>,
) -> Solution {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    Greedy::initialize(students.clone(), companies.clone(), config.clone())
        .solve(&mut rng)
        .unwrap()
}

#[test]
fn hill_climbing_never_regresses() {
    // ARRANGE
    let (students, companies) = random_instance(80, 16, 11);
    let config = quick_config();
    let seed = greedy_seed(&students, &companies, &config);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // ACT
    let outcome = OptimizerStrategy::HillClimbing
        .optimize(seed.clone(), &config, &mut rng, &mut NoProgress)
        .unwrap();

    // ASSERT
    assert!(outcome.best_score() >= seed.score());
    assert_eq!(
        outcome.best_score(),
        satisfaction_score(outcome.solution.assignment())
    );
    assert_eq!(outcome.log.iterations, 400);
    assert!(outcome.log.accepted_moves + outcome.log.no_op_iterations <= 400);
    let scores: Vec<Score> = outcome.log.progress.iter().map(|p| p.score).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    assert!(scores.iter().all(|&s| s >= seed.score()));
    assert!(outcome.solution.assignment().verify_consistency().is_ok());
}

#[test]
fn annealing_returns_best_seen() {
    // ARRANGE
    let (students, companies) = random_instance(80, 16, 12);
    let config = quick_config();
    let seed = greedy_seed(&students, &companies, &config);
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    // ACT
    let outcome = OptimizerStrategy::SimulatedAnnealing
        .optimize(seed.clone(), &config, &mut rng, &mut NoProgress)
        .unwrap();

    // ASSERT
    assert!(outcome.best_score() >= seed.score());
    assert_eq!(
        outcome.best_score(),
        satisfaction_score(outcome.solution.assignment())
    );
    for progress in outcome.log.progress.iter() {
        assert!(progress.best_score >= progress.score);
        assert!(progress.best_score <= outcome.best_score());
        assert!(progress.temperature.is_some());
    }
    let temperatures: Vec<f64> = outcome
        .log
        .progress
        .iter()
        .filter_map(|p| p.temperature)
        .collect();
    assert!(temperatures.windows(2).all(|w| w[0] > w[1]));
    assert!(outcome.solution.assignment().verify_consistency().is_ok());
}

#[test]
fn frozen_annealing_reproduces_hill_climbing() {
    // ARRANGE
    let (students, companies) = random_instance(60, 12, 13);
    let mut config = Config::default();
    config.hill_climbing.iterations = 500;
    config.hill_climbing.progress_interval = 50;
    config.simulated_annealing.iterations = 500;
    config.simulated_annealing.progress_interval = 50;
    config.simulated_annealing.initial_temperature = 1e-6;
    let config = Arc::new(config);
    let seed = greedy_seed(&students, &companies, &config);

    for run in 0..3 {
        // ACT
        let hill_climbing = OptimizerStrategy::HillClimbing
            .optimize(
                seed.clone(),
                &config,
                &mut ChaCha8Rng::seed_from_u64(run),
                &mut NoProgress,
            )
            .unwrap();
        let annealing = OptimizerStrategy::SimulatedAnnealing
            .optimize(
                seed.clone(),
                &config,
                &mut ChaCha8Rng::seed_from_u64(run),
                &mut NoProgress,
            )
            .unwrap();

        // ASSERT
        assert_eq!(
            hill_climbing.solution.assignment(),
            annealing.solution.assignment()
        );
        assert_eq!(hill_climbing.best_score(), annealing.best_score());
        assert_eq!(hill_climbing.log.accepted_moves, annealing.log.accepted_moves);
        assert_eq!(
            hill_climbing.log.no_op_iterations,
            annealing.log.no_op_iterations
        );
        assert_equal(
            hill_climbing.log.progress.iter().map(|p| (p.score, p.best_score)),
            annealing.log.progress.iter().map(|p| (p.score, p.best_score)),
        );
    }
}

#[test]
fn progress_is_reported_at_fixed_cadence() {
    // ARRANGE
    let (students, companies) = random_instance(40, 10, 14);
    let config = quick_config();
    let seed = greedy_seed(&students, &companies, &config);
    let mut seen = Vec::new();
    let mut observer = |progress: &Progress| -> Result<(), CallbackError> {
        seen.push(progress.iteration);
        Ok(())
    };

    // ACT
    let outcome = OptimizerStrategy::HillClimbing
        .optimize(
            seed.clone(),
            &config,
            &mut ChaCha8Rng::seed_from_u64(1),
            &mut observer,
        )
        .unwrap();

    // ASSERT
    assert_equal(seen, vec![100, 200, 300, 400]);
    assert_equal(
        outcome.log.progress.iter().map(|p| p.iteration),
        vec![100, 200, 300, 400],
    );
    assert!(outcome.log.callback_failures.is_empty());
}

#[test]
fn zero_interval_disables_progress() {
    // ARRANGE
    let (students, companies) = random_instance(40, 10, 15);
    let mut config = (*quick_config()).clone();
    config.hill_climbing.progress_interval = 0;
    let seed = greedy_seed(&students, &companies, &Arc::new(config.clone()));
    let mut calls = 0;
    let mut observer = |_: &Progress| -> Result<(), CallbackError> {
        calls += 1;
        Ok(())
    };

    // ACT
    let outcome = OptimizerStrategy::HillClimbing
        .optimize(seed, &config, &mut ChaCha8Rng::seed_from_u64(1), &mut observer)
        .unwrap();

    // ASSERT
    assert_eq!(calls, 0);
    assert!(outcome.log.progress.is_empty());
}

#[test]
fn failing_callbacks_do_not_abort_the_search() {
    // ARRANGE
    let (students, companies) = random_instance(60, 12, 16);
    let config = quick_config();
    let seed = greedy_seed(&students, &companies, &config);
    let mut returning =
        |_: &Progress| -> Result<(), CallbackError> { Err("display closed".into()) };
    let mut panicking = |progress: &Progress| -> Result<(), CallbackError> {
        if progress.iteration == 400 {
            panic!("observer crashed");
        }
        Ok(())
    };

    // ACT
    let reference = OptimizerStrategy::SimulatedAnnealing
        .optimize(
            seed.clone(),
            &config,
            &mut ChaCha8Rng::seed_from_u64(2),
            &mut NoProgress,
        )
        .unwrap();
    let with_errors = OptimizerStrategy::SimulatedAnnealing
        .optimize(
            seed.clone(),
            &config,
            &mut ChaCha8Rng::seed_from_u64(2),
            &mut returning,
        )
        .unwrap();
    let with_panic = OptimizerStrategy::SimulatedAnnealing
        .optimize(
            seed.clone(),
            &config,
            &mut ChaCha8Rng::seed_from_u64(2),
            &mut panicking,
        )
        .unwrap();

    // ASSERT
    assert_eq!(with_errors.log.callback_failures.len(), 4);
    assert_eq!(
        with_errors.log.callback_failures[0],
        CallbackFailure::Returned {
            iteration: 200,
            message: String::from("display closed"),
        }
    );
    assert_eq!(
        with_panic.log.callback_failures,
        vec![CallbackFailure::Panicked {
            iteration: 400,
            message: String::from("observer crashed"),
        }]
    );
    assert_eq!(with_errors.log.iterations, 800);
    assert_eq!(with_panic.log.iterations, 800);
    assert_eq!(
        reference.solution.assignment(),
        with_errors.solution.assignment()
    );
    assert_eq!(
        reference.solution.assignment(),
        with_panic.solution.assignment()
    );
}

#[test]
fn single_student_iterations_are_no_ops() {
    // ARRANGE
    let (students, companies) = build_instance(&[("solo", 3.0, &["A"])], &[("A", 1)]);
    let config = quick_config();
    let seed = greedy_seed(&students, &companies, &config);

    // ACT
    let outcome = OptimizerStrategy::SimulatedAnnealing
        .optimize(
            seed.clone(),
            &config,
            &mut ChaCha8Rng::seed_from_u64(0),
            &mut NoProgress,
        )
        .unwrap();

    // ASSERT
    assert_eq!(outcome.log.no_op_iterations, 800);
    assert_eq!(outcome.log.accepted_moves, 0);
    assert_eq!(outcome.best_score(), 100);
    assert_eq!(outcome.solution.assignment(), seed.assignment());
}

#[test]
fn swap_delta_and_revert() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());
    assignment.place(d.ogrenci1, d.firma2).unwrap();
    assignment.place(d.ogrenci3, d.firma1).unwrap();
    let before = assignment.clone();
    let swap = Move::Swap {
        first: d.ogrenci1,
        second: d.ogrenci3,
    };

    // ACT
    let delta = swap.apply(&mut assignment).unwrap();
    let after_apply = satisfaction_score(&assignment);
    swap.revert(&mut assignment).unwrap();

    // ASSERT
    assert_eq!(delta, 30);
    assert_eq!(after_apply, satisfaction_score(&before) + delta);
    assert_eq!(assignment, before);
}

#[test]
fn relocate_delta_and_revert() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());
    assignment.place(d.ogrenci1, d.firma1).unwrap();
    assignment.place(d.ogrenci3, d.firma2).unwrap();
    let before = assignment.clone();
    let relocate = Move::Relocate {
        student: d.ogrenci2,
        company: d.firma3,
    };

    // ACT
    let delta = relocate.apply(&mut assignment).unwrap();
    let rank = assignment.rank_of(d.ogrenci2);
    relocate.revert(&mut assignment).unwrap();

    // ASSERT
    assert_eq!(delta, 70);
    assert_eq!(rank, Some(3));
    assert_eq!(assignment, before);
}

#[test]
fn proposals_follow_the_placement_state() {
    // ARRANGE
    let d = init_scenario_a();
    let mut spread = Assignment::empty(d.students.clone(), d.companies.clone());
    spread.place(d.ogrenci1, d.firma1).unwrap();
    spread.place(d.ogrenci2, d.firma3).unwrap();
    spread.place(d.ogrenci3, d.firma2).unwrap();

    let (students, companies) = build_instance(
        &[("a", 3.0, &["A"]), ("b", 2.0, &["A"])],
        &[("A", 2)],
    );
    let mut crowded = Assignment::empty(students.clone(), companies.clone());
    crowded.place(StudentIdx::new(0), CompanyIdx::new(0)).unwrap();
    crowded.place(StudentIdx::new(1), CompanyIdx::new(0)).unwrap();
    let empty = Assignment::empty(students, companies);

    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..50 {
        // ACT
        let on_spread = Move::propose(&spread, &mut rng);
        let on_crowded = Move::propose(&crowded, &mut rng);
        let on_empty = Move::propose(&empty, &mut rng);

        // ASSERT
        assert!(matches!(on_spread, Some(Move::Swap { first, second }) if first != second));
        assert_eq!(on_crowded, None);
        assert!(matches!(
            on_empty,
            Some(Move::Relocate { company, .. }) if company == CompanyIdx::new(0)
        ));
    }
}

#[test]
fn strategy_names_round_trip() {
    for strategy in OptimizerStrategy::ALL {
        assert_eq!(strategy.name().parse::<OptimizerStrategy>(), Ok(strategy));
        assert_eq!(strategy.to_string(), strategy.name());
    }
    assert!(matches!(
        "tabu_search".parse::<OptimizerStrategy>(),
        Err(ConfigurationError::InvalidParameter {
            name: "strategy",
            ..
        })
    ));
}

#[test]
fn local_search_solver_starts_from_greedy() {
    // ARRANGE
    let (students, companies) = random_instance(50, 10, 17);
    let config = quick_config();
    let greedy = greedy_seed(&students, &companies, &config);
    let mut local_search =
        LocalSearch::initialize(students.clone(), companies.clone(), config.clone());
    local_search.set_strategy(OptimizerStrategy::HillClimbing);

    // ACT
    let from_greedy = local_search
        .solve(&mut ChaCha8Rng::seed_from_u64(4))
        .unwrap();
    local_search.set_initial_solution(greedy.clone());
    let from_given = local_search
        .solve(&mut ChaCha8Rng::seed_from_u64(4))
        .unwrap();

    // ASSERT
    assert!(from_greedy.score() >= greedy.score());
    assert_eq!(from_greedy.assignment(), from_given.assignment());
}
