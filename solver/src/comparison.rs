use model::config::Config;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use solution::InvariantViolation;
use tracing::info;

use crate::local_search::progress::NoProgress;
use crate::local_search::{OptimizationOutcome, OptimizerStrategy};
use crate::Solution;

#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub strategy: OptimizerStrategy,
    pub outcome: OptimizationOutcome,
}

/// The rng of a strategy: the configured seed on a stream of its own.
pub fn strategy_rng(seed: u64, strategy: OptimizerStrategy) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(strategy as u64);
    rng
}

/// Runs every strategy in parallel, each on its own copy of `start`. Outcomes are returned in the
/// order of `strategies`.
pub fn compare_strategies(
    start: &Solution,
    strategies: &[OptimizerStrategy],
    config: &Config,
) -> Result<Vec<StrategyOutcome>, InvariantViolation> {
    let outcomes = strategies
        .par_iter()
        .map(|&strategy| {
            let mut rng = strategy_rng(config.seed, strategy);
            strategy
                .optimize(start.clone(), config, &mut rng, &mut NoProgress)
                .map(|outcome| StrategyOutcome { strategy, outcome })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for result in outcomes.iter() {
        info!(
            strategy = result.strategy.name(),
            start_score = start.score(),
            best_score = result.outcome.best_score(),
            "strategy finished"
        );
    }
    Ok(outcomes)
}
