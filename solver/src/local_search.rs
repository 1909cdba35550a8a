//! Hill climbing and simulated annealing over swap and relocate moves.

pub mod acceptance;
pub mod moves;
pub mod progress;
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use model::base_types::Score;
use model::companies::Companies;
use model::config::Config;
use model::students::Students;
use model::ConfigurationError;
use rand::Rng;
use serde::Serialize;
use solution::{Assignment, EvaluatedAssignment, InvariantViolation};
use tracing::{debug, trace, warn};

use crate::greedy::Greedy;
use crate::{Solution, Solver};
use acceptance::{AcceptanceCriterion, HillClimbing, SimulatedAnnealing};
use moves::Move;
use progress::{notify, CallbackFailure, NoProgress, Progress, ProgressObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerStrategy {
    HillClimbing,
    #[default]
    SimulatedAnnealing,
}

impl OptimizerStrategy {
    pub const ALL: [OptimizerStrategy; 2] = [
        OptimizerStrategy::HillClimbing,
        OptimizerStrategy::SimulatedAnnealing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OptimizerStrategy::HillClimbing => "hill_climbing",
            OptimizerStrategy::SimulatedAnnealing => "simulated_annealing",
        }
    }

    /// Improves `start` within the iteration budget of the strategy. The returned solution is the
    /// best assignment seen; for hill climbing this is the final one.
    #[tracing::instrument(skip_all, fields(strategy = self.name(), start_score = start.score()))]
    pub fn optimize<R: Rng, O: ProgressObserver>(
        &self,
        start: Solution,
        config: &Config,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<OptimizationOutcome, InvariantViolation> {
        match self {
            OptimizerStrategy::HillClimbing => search(
                start,
                config.hill_climbing.iterations,
                config.hill_climbing.progress_interval,
                HillClimbing::new(&config.hill_climbing),
                rng,
                observer,
            ),
            OptimizerStrategy::SimulatedAnnealing => search(
                start,
                config.simulated_annealing.iterations,
                config.simulated_annealing.progress_interval,
                SimulatedAnnealing::new(&config.simulated_annealing),
                rng,
                observer,
            ),
        }
    }
}

impl fmt::Display for OptimizerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OptimizerStrategy {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        OptimizerStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| ConfigurationError::InvalidParameter {
                name: "strategy",
                reason: format!("unknown optimizer strategy '{}'", name),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLog {
    pub iterations: usize,
    pub accepted_moves: usize,
    pub no_op_iterations: usize,
    pub progress: Vec<Progress>,
    pub callback_failures: Vec<CallbackFailure>,
}

#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    pub solution: Solution,
    pub log: SearchLog,
}

impl OptimizationOutcome {
    pub fn best_score(&self) -> Score {
        self.solution.score()
    }
}

fn search<A, R, O>(
    start: Solution,
    iterations: usize,
    progress_interval: usize,
    mut acceptance: A,
    rng: &mut R,
    observer: &mut O,
) -> Result<OptimizationOutcome, InvariantViolation>
where
    A: AcceptanceCriterion,
    R: Rng,
    O: ProgressObserver,
{
    let mut best = start.clone();
    let mut score = start.score();
    let mut current: Assignment = start.into_assignment();
    let mut log = SearchLog::default();

    for iteration in 0..iterations {
        match Move::propose(&current, rng) {
            None => log.no_op_iterations += 1,
            Some(candidate) => {
                let delta = candidate.apply(&mut current)?;
                if acceptance.accept(delta, rng) {
                    score += delta;
                    log.accepted_moves += 1;
                    trace!(iteration, ?candidate, delta, score, "move accepted");
                    #[cfg(debug_assertions)]
                    current.verify_consistency()?;
                    if score > best.score() {
                        best = EvaluatedAssignment::new(current.clone(), score);
                    }
                } else {
                    candidate.revert(&mut current)?;
                }
            }
        }
        log.iterations += 1;

        if progress_interval > 0 && (iteration + 1) % progress_interval == 0 {
            let progress = Progress {
                iteration: iteration + 1,
                score,
                best_score: best.score(),
                temperature: acceptance.temperature(),
            };
            if let Err(failure) = notify(observer, &progress) {
                warn!(%failure, "progress callback failed; search continues");
                log.callback_failures.push(failure);
            }
            log.progress.push(progress);
        }

        acceptance.advance();
    }

    best.assignment().verify_consistency()?;
    debug!(
        iterations = log.iterations,
        accepted = log.accepted_moves,
        no_ops = log.no_op_iterations,
        best_score = best.score(),
        "local search finished"
    );
    Ok(OptimizationOutcome {
        solution: best,
        log,
    })
}

/// Local search as a solver: starts from the given solution or, if none is set, from the greedy
/// allocation.
pub struct LocalSearch {
    students: Arc<Students>,
    companies: Arc<Companies>,
    config: Arc<Config>,
    strategy: OptimizerStrategy,
    initial_solution: Option<Solution>,
}

impl LocalSearch {
    pub fn set_initial_solution(&mut self, solution: Solution) {
        self.initial_solution = Some(solution);
    }

    pub fn set_strategy(&mut self, strategy: OptimizerStrategy) {
        self.strategy = strategy;
    }

    pub fn solve_with_observer<R: Rng, O: ProgressObserver>(
        &self,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<OptimizationOutcome, InvariantViolation> {
        let start = match &self.initial_solution {
            Some(solution) => solution.clone(),
            None => Greedy::initialize(
                self.students.clone(),
                self.companies.clone(),
                self.config.clone(),
            )
            .solve(rng)?,
        };
        self.strategy.optimize(start, &self.config, rng, observer)
    }
}

impl Solver for LocalSearch {
    fn initialize(
        students: Arc<Students>,
        companies: Arc<Companies>,
        config: Arc<Config>,
    ) -> LocalSearch {
        LocalSearch {
            students,
            companies,
            config,
            strategy: OptimizerStrategy::default(),
            initial_solution: None,
        }
    }

    fn solve<R: Rng>(&self, rng: &mut R) -> Result<Solution, InvariantViolation> {
        self.solve_with_observer(rng, &mut NoProgress)
            .map(|outcome| outcome.solution)
    }
}
