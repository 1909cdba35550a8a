use std::time as stdtime;

use anyhow::Context;
use model::json_serialisation::load_allocation_instance_from_json;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use solution::json_serialisation::assignment_to_json;
use solver::comparison::strategy_rng;
use solver::greedy::Greedy;
use solver::local_search::progress::{CallbackError, Progress};
use solver::round_simulator::RoundSimulator;
use solver::{compare_strategies, OptimizerStrategy, Solver, StrategyOutcome};
use tracing::info;

/// Loads an instance, runs greedy, the configured optimizer, a comparison of all optimizers and
/// the round simulation, and returns everything as one json document.
pub fn run(input_data: serde_json::Value) -> anyhow::Result<serde_json::Value> {
    let (students, companies, config) =
        load_allocation_instance_from_json(input_data).context("invalid input")?;
    let strategy: OptimizerStrategy = config.strategy.parse()?;
    info!(
        students = students.len(),
        companies = companies.len(),
        total_capacity = companies.total_capacity(),
        %strategy,
        "instance loaded"
    );
    let start_time = stdtime::Instant::now();

    // greedy
    let greedy = Greedy::initialize(students.clone(), companies.clone(), config.clone());
    let start_solution = greedy.solve(&mut ChaCha8Rng::seed_from_u64(config.seed))?;
    info!(
        placed = start_solution.assignment().number_of_placed(),
        score = start_solution.score(),
        "greedy finished"
    );

    // configured optimizer
    let mut report_progress = |progress: &Progress| -> Result<(), CallbackError> {
        info!(
            iteration = progress.iteration,
            score = progress.score,
            best_score = progress.best_score,
            temperature = progress.temperature,
            "{} progress",
            strategy
        );
        Ok(())
    };
    let optimized = strategy.optimize(
        start_solution.clone(),
        &config,
        &mut strategy_rng(config.seed, strategy),
        &mut report_progress,
    )?;
    info!(
        placed = optimized.solution.assignment().number_of_placed(),
        score = optimized.best_score(),
        "{} finished",
        strategy
    );

    // the remaining optimizers side by side; the configured one is taken from the run above
    let others: Vec<OptimizerStrategy> = OptimizerStrategy::ALL
        .into_iter()
        .filter(|&other| other != strategy)
        .collect();
    let mut comparison = compare_strategies(&start_solution, &others, &config)?;
    comparison.push(StrategyOutcome {
        strategy,
        outcome: optimized.clone(),
    });
    comparison.sort_by_key(|result| {
        OptimizerStrategy::ALL
            .iter()
            .position(|&s| s == result.strategy)
    });

    // admission rounds with attrition
    let simulator = RoundSimulator::initialize(students.clone(), companies.clone(), config.clone());
    let simulation = simulator.solve_with_log(&mut ChaCha8Rng::seed_from_u64(config.seed))?;
    info!(
        rounds = simulation.rounds.len(),
        placed = simulation.solution.assignment().number_of_placed(),
        score = simulation.solution.score(),
        "round simulation finished"
    );

    let runtime_duration = stdtime::Instant::now().duration_since(start_time);
    info!("running time: {:0.2}sec", runtime_duration.as_secs_f32());

    Ok(json!({
        "greedy": assignment_to_json(&start_solution),
        "optimized": {
            "strategy": strategy,
            "result": assignment_to_json(&optimized.solution),
            "log": optimized.log,
        },
        "comparison": comparison
            .iter()
            .map(|result| json!({
                "strategy": result.strategy,
                "startScore": start_solution.score(),
                "bestScore": result.outcome.best_score(),
                "acceptedMoves": result.outcome.log.accepted_moves,
                "noOpIterations": result.outcome.log.no_op_iterations,
            }))
            .collect::<Vec<_>>(),
        "roundSimulation": {
            "rounds": simulation.rounds,
            "result": assignment_to_json(&simulation.solution),
        },
        "runningTime": runtime_duration.as_secs_f64(),
    }))
}
