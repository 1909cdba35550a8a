pub mod comparison;
pub mod greedy;
pub mod local_search;
pub mod round_simulator;
pub mod test_utilities;

use std::sync::Arc;

use model::{companies::Companies, config::Config, students::Students};
use rand::Rng;
use solution::{EvaluatedAssignment, InvariantViolation};

pub use comparison::{compare_strategies, StrategyOutcome};
pub use local_search::OptimizerStrategy;

pub type Solution = EvaluatedAssignment;

/// Common surface of the allocation algorithms. Randomness is always injected by the caller so
/// that runs are reproducible.
pub trait Solver {
    fn initialize(
        students: Arc<Students>,
        companies: Arc<Companies>,
        config: Arc<Config>,
    ) -> Self;

    fn solve<R: Rng>(&self, rng: &mut R) -> Result<Solution, InvariantViolation>;
}
