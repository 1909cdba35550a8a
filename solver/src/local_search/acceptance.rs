//! When to keep a move.

use model::base_types::Score;
use model::config::{ConfigHillClimbing, ConfigSimulatedAnnealing};
use rand::Rng;

pub trait AcceptanceCriterion {
    fn accept<R: Rng>(&mut self, delta: Score, rng: &mut R) -> bool;

    /// Called once after every iteration, no-ops included.
    fn advance(&mut self) {}

    fn temperature(&self) -> Option<f64> {
        None
    }
}

/// Strict improvement.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbing;

impl HillClimbing {
    pub fn new(_config: &ConfigHillClimbing) -> HillClimbing {
        HillClimbing
    }
}

impl AcceptanceCriterion for HillClimbing {
    fn accept<R: Rng>(&mut self, delta: Score, _rng: &mut R) -> bool {
        delta > 0
    }
}

/// T_i = T_0 * alpha^i. At or below `frozen` the temperature counts as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricCooling {
    current: f64,
    alpha: f64,
    frozen: f64,
}

impl GeometricCooling {
    pub fn new(initial: f64, alpha: f64, frozen: f64) -> GeometricCooling {
        GeometricCooling {
            current: initial,
            alpha,
            frozen,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_frozen(&self) -> bool {
        self.current <= self.frozen
    }

    pub fn update(&mut self) {
        self.current *= self.alpha;
    }
}

/// Metropolis criterion on a geometric cooling schedule. Improvements are always accepted; a
/// worsening (or neutral) move is accepted with probability exp(delta / T). A frozen schedule
/// degenerates to strict improvement without drawing from the rng.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedAnnealing {
    cooling: GeometricCooling,
}

impl SimulatedAnnealing {
    pub fn new(config: &ConfigSimulatedAnnealing) -> SimulatedAnnealing {
        SimulatedAnnealing {
            cooling: GeometricCooling::new(
                config.initial_temperature,
                config.cooling_rate,
                config.frozen_temperature,
            ),
        }
    }
}

impl AcceptanceCriterion for SimulatedAnnealing {
    fn accept<R: Rng>(&mut self, delta: Score, rng: &mut R) -> bool {
        if delta > 0 {
            return true;
        }
        if self.cooling.is_frozen() {
            return false;
        }
        let probability = (delta as f64 / self.cooling.current()).exp();
        rng.gen::<f64>() < probability
    }

    fn advance(&mut self) {
        self.cooling.update();
    }

    fn temperature(&self) -> Option<f64> {
        Some(self.cooling.current())
    }
}
